use leptos::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::window;

use super::strip::{TabSpec, TabStrip};

/// Tab controller for the page. Constructed once at startup with the static
/// section registry, then provided to the component tree via context; the
/// lifecycle is construct → provide → wire listeners → resolve initial
/// selection, with no re-discovery afterwards.
#[derive(Clone, Copy)]
pub struct TabsContext {
    strip: RwSignal<TabStrip>,
}

impl TabsContext {
    pub fn new(tabs: Vec<TabSpec>) -> Self {
        Self {
            strip: RwSignal::new(TabStrip::new(tabs)),
        }
    }

    /// The tab collection never changes after construction.
    pub fn tabs(&self) -> Vec<TabSpec> {
        self.strip.with_untracked(|strip| strip.tabs().to_vec())
    }

    pub fn is_selected(&self, id: &str) -> bool {
        self.strip.with(|strip| strip.is_selected(id))
    }

    pub fn is_panel_visible(&self, panel_id: &str) -> bool {
        self.strip.with(|strip| strip.panel_visible(panel_id))
    }

    pub fn activate(&self, id: &str) {
        self.strip.update(|strip| {
            strip.activate(id);
        });
    }

    /// Moves focus and selection one tab over, wrapping at both ends.
    pub fn focus_adjacent(&self, direction: isize) {
        let next = self
            .strip
            .with_untracked(|strip| strip.adjacent_index(direction));
        if let Some(index) = next {
            self.focus_index(index);
        }
    }

    pub fn focus_index(&self, index: usize) {
        let id = self
            .strip
            .with_untracked(|strip| strip.tabs().get(index).map(|tab| tab.id.clone()));
        if let Some(id) = id {
            focus_tab_button(&id);
            self.activate(&id);
        }
    }

    pub fn focus_last(&self) {
        let last = self.strip.with_untracked(|strip| strip.last_index());
        if let Some(index) = last {
            self.focus_index(index);
        }
    }

    /// Reads `location.hash` once, activates the tab it resolves to, then
    /// starts mirroring the selection back into the fragment. Call this once
    /// when the page component is created.
    pub fn init_hash_integration(&self) {
        let hash = window()
            .and_then(|w| w.location().hash().ok())
            .unwrap_or_default();
        let initial = self
            .strip
            .with_untracked(|strip| strip.resolve_initial(&hash).map(str::to_string));
        if let Some(id) = initial {
            leptos::logging::log!("initial tab: {}", id);
            self.activate(&id);
        }

        let this = *self;
        Effect::new(move |_| {
            let short = this
                .strip
                .with(|strip| strip.selected_short().map(str::to_string));
            let Some(short) = short else { return };
            if short.is_empty() {
                return;
            }

            let new_hash = format!("#{}", short);
            let current_hash = window()
                .and_then(|w| w.location().hash().ok())
                .unwrap_or_default();

            // Only rewrite the fragment if it actually changed, and replace
            // rather than push so activations add no history entries.
            if current_hash != new_hash {
                if let Some(w) = window() {
                    if let Ok(history) = w.history() {
                        let _ = history.replace_state_with_url(
                            &wasm_bindgen::JsValue::NULL,
                            "",
                            Some(&new_hash),
                        );
                    }
                }
            }
        });
    }
}

/// Missing elements degrade to activation without focus movement.
fn focus_tab_button(id: &str) {
    let element = window()
        .and_then(|w| w.document())
        .and_then(|document| document.get_element_by_id(id));
    if let Some(element) = element {
        if let Ok(button) = element.dyn_into::<web_sys::HtmlElement>() {
            let _ = button.focus();
        }
    }
}
