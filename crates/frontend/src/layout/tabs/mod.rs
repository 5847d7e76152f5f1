//! Accessible tab widget: a `role="tablist"` bar of buttons plus
//! `role="tabpanel"` sections, all driven by [`TabsContext`].

mod context;
mod strip;

pub use context::TabsContext;
pub use strip::{short_form, TabSpec, TabStrip, TAB_ID_PREFIX};

use leptos::ev;
use leptos::prelude::*;

#[component]
pub fn TabBar() -> impl IntoView {
    let tabs_store =
        use_context::<TabsContext>().expect("TabsContext not provided in context");

    view! {
        <div class="tabs" role="tablist" aria-label="Sections">
            <For
                each=move || tabs_store.tabs()
                key=|spec| spec.id.clone()
                children=move |spec| {
                    view! { <TabButton spec=spec /> }
                }
            />
        </div>
    }
}

#[component]
fn TabButton(spec: TabSpec) -> impl IntoView {
    let tabs_store =
        use_context::<TabsContext>().expect("TabsContext not provided in context");

    let spec_for_selected = spec.clone();
    let is_selected = Memo::new(move |_| tabs_store.is_selected(&spec_for_selected.id));

    let spec_for_click = spec.clone();
    let on_click = move |_| tabs_store.activate(&spec_for_click.id);

    let on_keydown = move |ev: ev::KeyboardEvent| match ev.key().as_str() {
        "ArrowRight" => {
            ev.prevent_default();
            tabs_store.focus_adjacent(1);
        }
        "ArrowLeft" => {
            ev.prevent_default();
            tabs_store.focus_adjacent(-1);
        }
        "Home" => {
            ev.prevent_default();
            tabs_store.focus_index(0);
        }
        "End" => {
            ev.prevent_default();
            tabs_store.focus_last();
        }
        _ => {}
    };

    view! {
        <button
            class="tabs__tab"
            role="tab"
            id=spec.id.clone()
            aria-controls=spec.panel.clone()
            aria-selected=move || if is_selected.get() { "true" } else { "false" }
            on:click=on_click
            on:keydown=on_keydown
        >
            {spec.title.clone()}
        </button>
    }
}

/// Panel shell for one section. Visibility is derived from the controller, so
/// a panel nothing points at simply never becomes visible.
#[component]
pub fn TabPanel(#[prop(into)] id: String, children: Children) -> impl IntoView {
    let tabs_store =
        use_context::<TabsContext>().expect("TabsContext not provided in context");

    let id_for_hidden = id.clone();
    let is_hidden = Memo::new(move |_| !tabs_store.is_panel_visible(&id_for_hidden));

    view! {
        <section
            class="tabs__panel"
            role="tabpanel"
            id=id
            prop:hidden=move || is_hidden.get()
        >
            {children()}
        </section>
    }
}
