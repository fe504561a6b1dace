use leptos::html;
use leptos::prelude::*;

use crate::components::footer::Footer;
use crate::components::header::Header;
use crate::components::terrain_overlay::TerrainOverlay;
use crate::viewport::{scroll_to_top, use_viewport};

#[component]
pub fn AboutPage() -> impl IntoView {
    let find_me = NodeRef::<html::Div>::new();
    let viewport = use_viewport(find_me);
    scroll_to_top();

    view! {
        <div class="page">
            <TerrainOverlay viewport=viewport />
            <Header />
            <main class="page-main about">
                <div class="section-heading">
                    <h1>"Who is Aaron Rhim?"</h1>
                    <div class="photo-placeholder">"Photo Coming Soon"</div>
                </div>

                <div class="card-grid two">
                    <div class="glass-card">
                        <p>
                            "I'm a "
                            <span class="accent">"Computer Science student"</span>
                            " at the University of British Columbia!"
                        </p>
                    </div>
                    <div class="glass-card">
                        <p>
                            "I take pride in my ability to "
                            <span class="accent">"design, develop, and lead"</span>
                            " high quality solutions for software engineering systems!"
                        </p>
                    </div>
                </div>
                <div class="glass-card wide">
                    <p>
                        "I'm passionate about taking my skills to the next level and making an "
                        <span class="accent">"impact on the greater community"</span>
                        "."
                    </p>
                </div>

                <div node_ref=find_me class="find-me">
                    <h2>"You can also find me..."</h2>
                    <div class="card-grid three">
                        <div class="glass-card">
                            <div class="emoji">"🎾"</div>
                            <h3>"Playing Sports"</h3>
                            <p>"Tennis is my main one right now!"</p>
                        </div>
                        <div class="glass-card">
                            <div class="emoji">"🎹"</div>
                            <h3>"Playing Piano"</h3>
                            <p>"La Campanella is my greatest masterpiece!"</p>
                            <a
                                href="https://youtu.be/JRo3_ib7wmE?si=7Aw_zm1kf4raj2_v"
                                target="_blank"
                                rel="noopener noreferrer"
                                class="accent-link"
                            >
                                "Watch my performance ↗"
                            </a>
                        </div>
                        <div class="glass-card">
                            <div class="emoji">"🍜"</div>
                            <h3>"Eating Food"</h3>
                            <p>"There are 105 restaurants on campus at UBC!"</p>
                        </div>
                    </div>
                </div>
            </main>
            <Footer />
        </div>
    }
}
