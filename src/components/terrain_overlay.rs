use leptos::prelude::*;

use crate::telemetry::TerrainOverlay as Overlay;
use crate::viewport::Viewport;

/// Terrain-coloured fill that follows the foreground terrain up the page
/// once the page's anchor section scrolls into view.
#[component]
pub fn TerrainOverlay(viewport: Viewport) -> impl IntoView {
    let overlay = Memo::new(move |_| Overlay::derive(viewport.snapshot.get(), viewport.height.get()));

    view! {
        <div
            class="terrain-overlay"
            class:visible=move || overlay.get().visible
            style:top=move || format!("{}px", overlay.get().top_px)
            aria-hidden="true"
        ></div>
    }
}
