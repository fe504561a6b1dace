use leptos::html;
use leptos::prelude::*;
use leptos_router::hooks::use_params_map;

use crate::components::clickable_word::ClickableWord;
use crate::components::footer::Footer;
use crate::components::header::Header;
use crate::components::terrain_overlay::TerrainOverlay;
use crate::projects::{find_project, ProjectData, Segment};
use crate::viewport::{scroll_to_top, use_viewport};

fn go_back() {
    if let Some(history) = web_sys::window().and_then(|w| w.history().ok()) {
        let _ = history.back();
    }
}

fn paragraph_view(segments: &'static [Segment]) -> impl IntoView {
    segments
        .iter()
        .map(|segment| match *segment {
            Segment::Text(text) => text.into_any(),
            Segment::Reward { id, value, text } => {
                view! { <ClickableWord id=id value=value>{text}</ClickableWord> }.into_any()
            }
        })
        .collect_view()
}

fn pill_list(items: &'static [&'static str]) -> impl IntoView {
    view! {
        <div class="tag-list">
            {items.iter().map(|item| view! { <span class="tag">{*item}</span> }).collect_view()}
        </div>
    }
}

#[component]
fn ProjectArticle(project: &'static ProjectData) -> impl IntoView {
    let article = NodeRef::<html::Div>::new();
    let viewport = use_viewport(article);

    view! {
        <div class="page">
            <TerrainOverlay viewport=viewport />
            <Header />
            <main class="page-main detail">
                <button class="back-button" on:click=move |_| go_back()>"← Back"</button>

                <div node_ref=article class="project-article">
                    <header class="project-header">
                        <h1>{project.title}</h1>
                        <p class="tagline">{project.tagline}</p>
                    </header>

                    <section class="project-about">
                        <h2>"About the Project"</h2>
                        {project
                            .paragraphs
                            .iter()
                            .map(|paragraph| view! { <p>{paragraph_view(paragraph)}</p> })
                            .collect_view()}
                    </section>

                    {(!project.sub_projects.is_empty()).then(|| view! {
                        <section class="project-related">
                            <h2>"Related Projects"</h2>
                            {project
                                .sub_projects
                                .iter()
                                .map(|sub| {
                                    view! {
                                        <div class="sub-project">
                                            <h3>{sub.title}</h3>
                                            <p>{sub.description}</p>
                                            {pill_list(sub.tech)}
                                            <a href=sub.github target="_blank" rel="noopener noreferrer" class="outline-button">
                                                "View Repository"
                                            </a>
                                        </div>
                                    }
                                })
                                .collect_view()}
                        </section>
                    })}

                    <section class="project-tech">
                        <h2>"Technologies Used"</h2>
                        {pill_list(project.tech)}
                    </section>

                    <section class="project-links">
                        {project.github.map(|url| view! {
                            <a href=url target="_blank" rel="noopener noreferrer" class="solid-button">
                                "View on GitHub"
                            </a>
                        })}
                        {project.devpost.map(|url| view! {
                            <a href=url target="_blank" rel="noopener noreferrer" class="outline-button">
                                "View on DevPost"
                            </a>
                        })}
                    </section>
                </div>
            </main>
            <Footer />
        </div>
    }
}

/// `/project/:project_id`. Unknown slugs get a "not found" card with a
/// Back button rather than the site-wide 404 page.
#[component]
pub fn ProjectDetailPage() -> impl IntoView {
    let params = use_params_map();
    let project = Memo::new(move |_| {
        params
            .read()
            .get("project_id")
            .and_then(|slug| find_project(&slug))
    });
    scroll_to_top();

    move || match project.get() {
        Some(project) => view! { <ProjectArticle project=project /> }.into_any(),
        None => view! {
            <main class="not-found">
                <div class="not-found-message">
                    <h1>"Project Not Found"</h1>
                    <button class="back-button" on:click=move |_| go_back()>"← Back"</button>
                </div>
            </main>
        }
        .into_any(),
    }
}
