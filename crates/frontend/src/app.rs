use crate::layout::tabs::{TabBar, TabsContext};
use crate::layout::Shell;
use crate::sections::{section_tabs, IntroPanel, ProjectsPanel};
use crate::shared::demo_player::{DemoModal, DemoPlayerService};
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    // Provide the tab controller to the whole page via context.
    provide_context(TabsContext::new(section_tabs()));

    // Provide DemoPlayerService for the project demo links.
    provide_context(DemoPlayerService::new());

    view! { <PortfolioPage /> }
}

#[component]
fn PortfolioPage() -> impl IntoView {
    let tabs_store = leptos::context::use_context::<TabsContext>()
        .expect("TabsContext context not found");

    // Resolve the deep link and start mirroring the selection into the URL
    // fragment. This runs once when the page component is created.
    tabs_store.init_hash_integration();

    view! {
        <Shell>
            <TabBar />
            <IntroPanel />
            <ProjectsPanel />
        </Shell>
        <DemoModal />
    }
}
