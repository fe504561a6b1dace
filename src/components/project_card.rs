use leptos::prelude::*;

use crate::projects::{detail_link, ProjectCardData};

#[component]
pub fn ProjectCard(card: ProjectCardData) -> impl IntoView {
    let body = view! {
        <div class="project-card">
            <div class="project-card-head">
                <h3>{card.title}</h3>
                {card.link.map(|_| view! { <span class="project-card-arrow">"↗"</span> })}
            </div>
            <p class="project-card-description">{card.description}</p>
            <div class="tag-list">
                {card.tags.iter().map(|tag| view! { <span class="tag">{*tag}</span> }).collect_view()}
            </div>
        </div>
    };

    match card.link {
        Some(slug) => view! { <a href=detail_link(slug) class="project-card-link">{body}</a> }.into_any(),
        None => body.into_any(),
    }
}
