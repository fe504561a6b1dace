use leptos::prelude::*;
use leptos_router::components::*;
use leptos_router::hooks::use_location;
use leptos_router::path;

use crate::components::parallax_background::ParallaxBackground;
use crate::pages::about::AboutPage;
use crate::pages::all_projects::AllProjectsPage;
use crate::pages::home::HomePage;
use crate::pages::not_found::NotFoundPage;
use crate::pages::project_detail::ProjectDetailPage;
use crate::rewards::RewardsContext;
use crate::viewport::use_viewport;

#[component]
pub fn App() -> impl IntoView {
    provide_context(RewardsContext::new());

    let viewport = use_viewport(NodeRef::new());

    view! {
        <Router>
            <EarningsRefresh />
            <ParallaxBackground viewport=viewport />
            <Routes fallback=|| view! { <NotFoundPage /> }>
                <Route path=path!("/") view=HomePage />
                <Route path=path!("/projects") view=AllProjectsPage />
                <Route path=path!("/about") view=AboutPage />
                <Route path=path!("/project/:project_id") view=ProjectDetailPage />
            </Routes>
        </Router>
    }
}

/// Re-reads the ledger on every navigation, starting with the first page.
#[component]
fn EarningsRefresh() -> impl IntoView {
    let rewards = expect_context::<RewardsContext>();
    let location = use_location();

    Effect::new(move |_| {
        location.pathname.track();
        rewards.load();
    });
}
