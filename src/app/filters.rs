//! Filter orchestration methods

use crate::App;

impl App {
    /// Drop every chosen filter value
    pub(crate) fn clear_filters(&mut self) {
        if self.model.filters.is_empty() {
            return;
        }
        let count = self.model.filters.active_count();
        self.model.filters.clear();
        self.model.show_toast(format!("Cleared {} filter(s)", count));
        tracing::debug!("cleared {} filters", count);
    }
}

#[cfg(test)]
mod tests {
    use crate::test_support::test_app;

    #[test]
    fn test_clear_filters_shows_toast() {
        let (mut app, _requests) = test_app();
        app.model.filters.toggle_make("Audi");
        app.model.filters.toggle_fuel_type("Electric");

        app.clear_filters();

        assert!(app.model.filters.is_empty());
        let (message, _) = app.model.ui.toast_message.clone().unwrap();
        assert_eq!(message, "Cleared 2 filter(s)");
    }

    #[test]
    fn test_clear_without_filters_is_silent() {
        let (mut app, _requests) = test_app();
        app.clear_filters();
        assert!(app.model.ui.toast_message.is_none());
    }
}
