use leptos::html;
use leptos::prelude::*;

use crate::components::clickable_word::ClickableWord;
use crate::components::footer::Footer;
use crate::components::header::Header;
use crate::components::project_card::ProjectCard;
use crate::components::terrain_overlay::TerrainOverlay;
use crate::projects::{ProjectSection, PROJECT_SECTIONS};
use crate::viewport::{scroll_to_top, use_viewport};

fn section_view(section: &'static ProjectSection) -> impl IntoView {
    view! {
        <h2 class="listing-title">{section.title}</h2>
        <div class="card-grid two">
            {section.cards.iter().map(|card| view! { <ProjectCard card=*card /> }).collect_view()}
        </div>
    }
}

#[component]
pub fn AllProjectsPage() -> impl IntoView {
    let sections = NodeRef::<html::Div>::new();
    let viewport = use_viewport(sections);
    scroll_to_top();

    view! {
        <div class="page">
            <TerrainOverlay viewport=viewport />
            <Header />
            <main class="page-main listing">
                <div class="section-heading">
                    <h1>"All Projects"</h1>
                    <p>
                        "A comprehensive collection of my "
                        <ClickableWord id="all-projects-work" value=5000>"work"</ClickableWord>
                    </p>
                </div>

                <div node_ref=sections class="listing-sections">
                    {PROJECT_SECTIONS
                        .iter()
                        .map(|section| {
                            view! {
                                <div class="listing-section" class:shaded=section.shaded>
                                    {section_view(section)}
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            </main>
            <Footer />
        </div>
    }
}
