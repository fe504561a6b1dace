use leptos::html;
use leptos::prelude::*;

use crate::components::contact::Contact;
use crate::components::footer::Footer;
use crate::components::header::Header;
use crate::components::hero::Hero;
use crate::components::projects_section::ProjectsSection;
use crate::components::skills::Skills;
use crate::components::terrain_overlay::TerrainOverlay;
use crate::viewport::use_viewport;

#[component]
pub fn HomePage() -> impl IntoView {
    let lower = NodeRef::<html::Div>::new();
    let viewport = use_viewport(lower);

    view! {
        <div class="page">
            <TerrainOverlay viewport=viewport />
            <Header />
            <main class="page-main home">
                <Hero />
                <div node_ref=lower class="home-lower">
                    <ProjectsSection />
                    <Skills />
                    <Contact />
                </div>
            </main>
            <Footer />
        </div>
    }
}
