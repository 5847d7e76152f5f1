//! Headless model of the tab strip: an ordered tab collection with a single
//! selection. No DOM, no signals: the selection math lives here so it can be
//! exercised against a plain `Vec<TabSpec>` in tests.

/// Fixed prefix shared by every tab identifier. The URL fragment carries the
/// identifier with this prefix stripped.
pub const TAB_ID_PREFIX: &str = "tab-";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TabSpec {
    pub id: String,
    pub panel: String,
    pub title: String,
}

impl TabSpec {
    pub fn new(id: impl Into<String>, panel: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            panel: panel.into(),
            title: title.into(),
        }
    }

    /// Identifier with the `tab-` prefix stripped; this is what the URL
    /// fragment carries.
    pub fn short_id(&self) -> &str {
        short_form(&self.id)
    }
}

pub fn short_form(id: &str) -> &str {
    id.strip_prefix(TAB_ID_PREFIX).unwrap_or(id)
}

/// Ordered tab collection with at most one selected entry. After the initial
/// activation exactly one entry stays selected for the lifetime of the page.
#[derive(Debug, Clone)]
pub struct TabStrip {
    tabs: Vec<TabSpec>,
    selected: Option<usize>,
}

impl TabStrip {
    pub fn new(tabs: Vec<TabSpec>) -> Self {
        Self {
            tabs,
            selected: None,
        }
    }

    pub fn tabs(&self) -> &[TabSpec] {
        &self.tabs
    }

    pub fn len(&self) -> usize {
        self.tabs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tabs.is_empty()
    }

    pub fn selected_index(&self) -> Option<usize> {
        self.selected
    }

    pub fn selected_tab(&self) -> Option<&TabSpec> {
        self.selected.and_then(|i| self.tabs.get(i))
    }

    /// Short form of the selected tab's identifier, i.e. the value the URL
    /// fragment should carry.
    pub fn selected_short(&self) -> Option<&str> {
        self.selected_tab().map(|tab| tab.short_id())
    }

    pub fn is_selected(&self, id: &str) -> bool {
        self.selected_tab().is_some_and(|tab| tab.id == id)
    }

    /// A panel is visible exactly when its tab is selected.
    pub fn panel_visible(&self, panel_id: &str) -> bool {
        self.selected_tab().is_some_and(|tab| tab.panel == panel_id)
    }

    /// Makes `id` the single selection. Unknown identifiers leave the
    /// selection unchanged; callers only pass identifiers they got from
    /// `tabs()`.
    pub fn activate(&mut self, id: &str) -> bool {
        match self.tabs.iter().position(|tab| tab.id == id) {
            Some(index) => {
                self.selected = Some(index);
                true
            }
            None => false,
        }
    }

    pub fn activate_index(&mut self, index: usize) -> bool {
        if index < self.tabs.len() {
            self.selected = Some(index);
            true
        } else {
            false
        }
    }

    /// Index the selection moves to for `direction` ∈ {+1, −1}, wrapping
    /// circularly at both ends. With nothing selected the current position
    /// counts as −1, matching the linear scan coming up empty.
    pub fn adjacent_index(&self, direction: isize) -> Option<usize> {
        let count = self.tabs.len() as isize;
        if count == 0 {
            return None;
        }
        let current = self.selected.map(|i| i as isize).unwrap_or(-1);
        Some((current + direction + count).rem_euclid(count) as usize)
    }

    pub fn last_index(&self) -> Option<usize> {
        self.tabs.len().checked_sub(1)
    }

    /// Tab to select for the fragment the page was loaded with. Only the
    /// secondary tab's short form is a recognized deep-link token; anything
    /// else, including an empty fragment, falls back to the first tab.
    pub fn resolve_initial(&self, fragment: &str) -> Option<&str> {
        let value = fragment.trim_start_matches('#');
        match self.tabs.get(1) {
            Some(tab) if tab.short_id() == value => Some(tab.id.as_str()),
            _ => self.tabs.first().map(|tab| tab.id.as_str()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn three_tabs() -> TabStrip {
        TabStrip::new(vec![
            TabSpec::new("tab-intro", "panel-intro", "Intro"),
            TabSpec::new("tab-projects", "panel-projects", "Projects"),
            TabSpec::new("tab-extra", "panel-extra", "Extra"),
        ])
    }

    fn selected_count(strip: &TabStrip) -> usize {
        strip
            .tabs()
            .iter()
            .filter(|tab| strip.is_selected(&tab.id))
            .count()
    }

    #[test]
    fn test_exactly_one_selected_after_any_activation_sequence() {
        let mut strip = three_tabs();
        for id in ["tab-projects", "tab-intro", "tab-extra", "tab-intro"] {
            assert!(strip.activate(id));
            assert_eq!(selected_count(&strip), 1);
            assert!(strip.is_selected(id));
        }
    }

    #[test]
    fn test_panel_visibility_mirrors_selection() {
        let mut strip = three_tabs();
        strip.activate("tab-projects");
        assert!(strip.panel_visible("panel-projects"));
        assert!(!strip.panel_visible("panel-intro"));
        assert!(!strip.panel_visible("panel-extra"));

        strip.activate("tab-extra");
        assert!(strip.panel_visible("panel-extra"));
        assert!(!strip.panel_visible("panel-projects"));
    }

    #[test]
    fn test_activate_unknown_id_leaves_selection_unchanged() {
        let mut strip = three_tabs();
        strip.activate("tab-projects");
        assert!(!strip.activate("tab-missing"));
        assert!(strip.is_selected("tab-projects"));
        assert_eq!(selected_count(&strip), 1);
    }

    #[test]
    fn test_adjacent_wraps_forward_from_last() {
        let mut strip = three_tabs();
        strip.activate_index(2);
        assert_eq!(strip.adjacent_index(1), Some(0));
    }

    #[test]
    fn test_adjacent_wraps_backward_from_first() {
        let mut strip = three_tabs();
        strip.activate_index(0);
        assert_eq!(strip.adjacent_index(-1), Some(2));
    }

    #[test]
    fn test_adjacent_full_cycle_returns_to_start() {
        let mut strip = three_tabs();
        strip.activate("tab-projects");
        let start = strip.selected_index();
        for _ in 0..strip.len() {
            let next = strip.adjacent_index(1).unwrap();
            strip.activate_index(next);
        }
        assert_eq!(strip.selected_index(), start);
    }

    #[test]
    fn test_adjacent_without_selection() {
        let strip = three_tabs();
        assert_eq!(strip.adjacent_index(1), Some(0));
        assert_eq!(strip.adjacent_index(-1), Some(1));
    }

    #[test]
    fn test_adjacent_on_empty_strip() {
        let strip = TabStrip::new(vec![]);
        assert_eq!(strip.adjacent_index(1), None);
        assert_eq!(strip.adjacent_index(-1), None);
    }

    #[test]
    fn test_short_form_strips_prefix() {
        assert_eq!(short_form("tab-projects"), "projects");
        assert_eq!(short_form("tab-intro"), "intro");
        assert_eq!(short_form("unprefixed"), "unprefixed");
    }

    #[test]
    fn test_fragment_value_after_activation() {
        let mut strip = three_tabs();
        strip.activate("tab-projects");
        assert_eq!(strip.selected_short(), Some("projects"));
        strip.activate("tab-intro");
        assert_eq!(strip.selected_short(), Some("intro"));
    }

    #[test]
    fn test_resolve_initial_reserved_token() {
        let strip = three_tabs();
        assert_eq!(strip.resolve_initial("#projects"), Some("tab-projects"));
        assert_eq!(strip.resolve_initial("projects"), Some("tab-projects"));
    }

    #[test]
    fn test_resolve_initial_falls_back_to_first() {
        let strip = three_tabs();
        assert_eq!(strip.resolve_initial(""), Some("tab-intro"));
        assert_eq!(strip.resolve_initial("#"), Some("tab-intro"));
        // Only the secondary tab's token is a recognized deep link.
        assert_eq!(strip.resolve_initial("#extra"), Some("tab-intro"));
        assert_eq!(strip.resolve_initial("#nonsense"), Some("tab-intro"));
    }

    #[test]
    fn test_resolve_initial_on_empty_strip() {
        let strip = TabStrip::new(vec![]);
        assert_eq!(strip.resolve_initial("#projects"), None);
    }

    #[test]
    fn test_last_index() {
        assert_eq!(three_tabs().last_index(), Some(2));
        assert_eq!(TabStrip::new(vec![]).last_index(), None);
    }
}
