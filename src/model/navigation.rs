//! Navigation Model
//!
//! This sub-model owns where the user is inside the filter overlay:
//! the current view, the search term scoped to that view, and the make
//! being drilled into for the models list.

use super::types::{BackOutcome, View};

/// Navigation session for one overlay open/close cycle
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct NavigationModel {
    /// View currently shown
    pub current_view: View,

    /// Free-text filter applied within the current view
    pub search_term: String,

    /// Make whose models are listed in `View::Models`
    pub selected_make_for_models: Option<String>,
}

impl NavigationModel {
    /// Create a fresh session at the root view
    pub fn new() -> Self {
        Self::default()
    }

    /// Switch to `target`, optionally carrying the make to drill into.
    ///
    /// The make is only stored when `target` is `View::Models`. The search
    /// term is cleared when the view actually changes and kept when
    /// `target` is already current. A previously stored make is left alone
    /// when no new one is given.
    pub fn navigate_to_view(&mut self, target: View, make: Option<&str>) {
        let previous = self.current_view;

        if target == View::Models {
            if let Some(make) = make {
                self.selected_make_for_models = Some(make.to_string());
            }
        }

        self.current_view = target;

        if target != previous {
            self.search_term.clear();
        }

        tracing::debug!(
            "navigate {:?} -> {:?} (make: {:?})",
            previous,
            target,
            self.selected_make_for_models
        );
    }

    /// Step back one level in the view hierarchy.
    ///
    /// Back-navigation sets the view directly and leaves `search_term` as is.
    /// From the root nothing changes and `BackOutcome::ExitedOverlay` is
    /// returned so the caller can close the overlay.
    pub fn go_back(&mut self) -> BackOutcome {
        let target = match self.current_view {
            View::Filters => return BackOutcome::ExitedOverlay,
            View::Makes | View::MakeSelection => View::Filters,
            View::Models => {
                self.selected_make_for_models = None;
                View::MakeSelection
            }
        };

        tracing::debug!("back {:?} -> {:?}", self.current_view, target);
        self.current_view = target;
        BackOutcome::Navigated(target)
    }

    /// Whether a back control (rather than a close control) applies
    pub fn can_go_back(&self) -> bool {
        self.current_view != View::Filters
    }

    /// Reinitialize the session in place
    pub fn reset_navigation(&mut self) {
        self.current_view = View::Filters;
        self.search_term.clear();
        self.selected_make_for_models = None;
    }

    pub fn set_search_term(&mut self, term: impl Into<String>) {
        self.search_term = term.into();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_navigation_model_creation() {
        let nav = NavigationModel::new();
        assert_eq!(nav.current_view, View::Filters);
        assert!(nav.search_term.is_empty());
        assert!(nav.selected_make_for_models.is_none());
        assert!(!nav.can_go_back());
    }

    #[test]
    fn test_navigate_sets_current_view() {
        let mut nav = NavigationModel::new();
        for view in [View::Makes, View::Models, View::Filters, View::MakeSelection] {
            nav.navigate_to_view(view, None);
            assert_eq!(nav.current_view, view);
        }
    }

    #[test]
    fn test_navigate_to_same_view_keeps_search() {
        let mut nav = NavigationModel::new();
        nav.navigate_to_view(View::Makes, None);
        nav.set_search_term("bmw");

        nav.navigate_to_view(View::Makes, None);
        assert_eq!(nav.search_term, "bmw");
    }

    #[test]
    fn test_navigate_to_other_view_clears_search() {
        let mut nav = NavigationModel::new();
        nav.set_search_term("suv");

        nav.navigate_to_view(View::Makes, None);
        assert!(nav.search_term.is_empty());
    }

    #[test]
    fn test_navigate_to_models_with_make() {
        let mut nav = NavigationModel::new();
        nav.navigate_to_view(View::Models, Some("Audi"));
        assert_eq!(nav.current_view, View::Models);
        assert_eq!(nav.selected_make_for_models.as_deref(), Some("Audi"));
    }

    #[test]
    fn test_make_ignored_for_other_views() {
        let mut nav = NavigationModel::new();
        nav.navigate_to_view(View::Makes, Some("Audi"));
        nav.navigate_to_view(View::MakeSelection, Some("Audi"));
        nav.navigate_to_view(View::Filters, Some("Audi"));
        assert!(nav.selected_make_for_models.is_none());
    }

    #[test]
    fn test_stale_make_not_cleared_by_forward_navigation() {
        let mut nav = NavigationModel::new();
        nav.navigate_to_view(View::Models, Some("Audi"));
        nav.navigate_to_view(View::Makes, None);
        assert_eq!(nav.selected_make_for_models.as_deref(), Some("Audi"));

        // Re-entering without a make reuses the stale value
        nav.navigate_to_view(View::Models, None);
        assert_eq!(nav.selected_make_for_models.as_deref(), Some("Audi"));
    }

    #[test]
    fn test_go_back_from_models() {
        let mut nav = NavigationModel::new();
        nav.navigate_to_view(View::Models, Some("Audi"));

        assert_eq!(nav.go_back(), BackOutcome::Navigated(View::MakeSelection));
        assert_eq!(nav.current_view, View::MakeSelection);
        assert!(nav.selected_make_for_models.is_none());
    }

    #[test]
    fn test_go_back_to_filters() {
        for start in [View::Makes, View::MakeSelection] {
            let mut nav = NavigationModel::new();
            nav.navigate_to_view(start, None);
            assert_eq!(nav.go_back(), BackOutcome::Navigated(View::Filters));
            assert_eq!(nav.current_view, View::Filters);
        }
    }

    #[test]
    fn test_go_back_from_filters_exits() {
        let mut nav = NavigationModel::new();
        nav.set_search_term("diesel");

        assert_eq!(nav.go_back(), BackOutcome::ExitedOverlay);
        assert_eq!(nav.current_view, View::Filters);
        assert_eq!(nav.search_term, "diesel");
    }

    #[test]
    fn test_go_back_keeps_search_term() {
        let mut nav = NavigationModel::new();
        nav.navigate_to_view(View::Models, Some("Audi"));
        nav.set_search_term("a4");

        nav.go_back();
        assert_eq!(nav.current_view, View::MakeSelection);
        assert_eq!(nav.search_term, "a4");

        nav.go_back();
        assert_eq!(nav.current_view, View::Filters);
        assert_eq!(nav.search_term, "a4");
    }

    #[test]
    fn test_can_go_back() {
        let mut nav = NavigationModel::new();
        for view in View::ALL {
            nav.navigate_to_view(view, Some("Audi"));
            assert_eq!(nav.can_go_back(), view != View::Filters);
        }
    }

    #[test]
    fn test_reset_navigation() {
        let mut nav = NavigationModel::new();
        nav.navigate_to_view(View::Models, Some("Volvo"));
        nav.set_search_term("xc");

        nav.reset_navigation();
        assert_eq!(nav, NavigationModel::new());

        nav.reset_navigation();
        assert_eq!(nav, NavigationModel::new());
    }

    #[test]
    fn test_set_search_term_touches_nothing_else() {
        let mut nav = NavigationModel::new();
        nav.navigate_to_view(View::Models, Some("Kia"));
        nav.set_search_term("ev");

        assert_eq!(nav.current_view, View::Models);
        assert_eq!(nav.selected_make_for_models.as_deref(), Some("Kia"));
        assert_eq!(nav.search_term, "ev");
    }
}
