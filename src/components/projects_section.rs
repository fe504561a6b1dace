use leptos::prelude::*;

use crate::components::clickable_word::ClickableWord;
use crate::components::project_card::ProjectCard;
use crate::projects::FEATURED;

#[component]
pub fn ProjectsSection() -> impl IntoView {
    view! {
        <section class="page-section">
            <div class="section-heading">
                <h2>"My Projects"</h2>
                <p>
                    "A collection of my "
                    <ClickableWord id="projects-recent-work" value=3000>"recent work"</ClickableWord>
                </p>
            </div>
            <div class="card-grid three">
                {FEATURED.iter().map(|card| view! { <ProjectCard card=*card /> }).collect_view()}
            </div>
        </section>
    }
}
