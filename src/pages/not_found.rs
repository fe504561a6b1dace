use leptos::html;
use leptos::prelude::*;
use leptos_router::hooks::use_location;

use crate::components::terrain_overlay::TerrainOverlay;
use crate::viewport::use_viewport;

#[component]
pub fn NotFoundPage() -> impl IntoView {
    let location = use_location();
    let message = NodeRef::<html::Div>::new();
    let viewport = use_viewport(message);

    Effect::new(move |_| {
        let path = location.pathname.get();
        web_sys::console::error_1(
            &format!("404 Error: User attempted to access non-existent route: {}", path).into(),
        );
    });

    view! {
        <div class="page">
            <TerrainOverlay viewport=viewport />
            <main class="not-found">
                <div node_ref=message class="not-found-message">
                    <h1>"404"</h1>
                    <p>"Oops! Page not found"</p>
                    <a href="/">"Return to Home"</a>
                </div>
            </main>
        </div>
    }
}
