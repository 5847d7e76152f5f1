//! Static content sections of the page.

mod intro;
mod projects;

pub use intro::IntroPanel;
pub use projects::ProjectsPanel;

use crate::layout::tabs::TabSpec;

/// Ordered section registry. The first entry is the default tab; the second
/// one carries the reserved `#projects` deep-link token.
pub fn section_tabs() -> Vec<TabSpec> {
    vec![
        TabSpec::new("tab-intro", "panel-intro", "Intro"),
        TabSpec::new("tab-projects", "panel-projects", "Projects"),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::tabs::TAB_ID_PREFIX;

    #[test]
    fn test_registry_shape() {
        let tabs = section_tabs();
        assert_eq!(tabs.len(), 2);
        assert_eq!(tabs[0].id, "tab-intro");
        assert_eq!(tabs[1].id, "tab-projects");

        for tab in &tabs {
            assert!(tab.id.starts_with(TAB_ID_PREFIX));
            assert!(!tab.panel.is_empty());
            assert!(!tab.title.is_empty());
        }
    }

    #[test]
    fn test_registry_ids_unique() {
        let tabs = section_tabs();
        for (i, a) in tabs.iter().enumerate() {
            for b in tabs.iter().skip(i + 1) {
                assert_ne!(a.id, b.id);
                assert_ne!(a.panel, b.panel);
            }
        }
    }
}
