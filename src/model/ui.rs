//! UI Model
//!
//! This sub-model contains all state related to the terminal front end:
//! overlay visibility, search input mode, list cursor, and toasts.

use std::time::Instant;

/// UI preferences and transient visual state
#[derive(Clone, Debug)]
pub struct UiModel {
    // ============================================
    // PREFERENCES
    // ============================================
    /// Whether vim keybindings are enabled
    pub vim_mode: bool,

    // ============================================
    // OVERLAY
    // ============================================
    /// Whether the filter overlay is shown
    pub overlay_open: bool,

    /// Whether the search input is receiving keystrokes
    pub search_mode: bool,

    /// Cursor row in the current list
    pub selection: Option<usize>,

    /// First visible row of the current list
    pub list_offset: usize,

    // ============================================
    // NOTIFICATIONS
    // ============================================
    /// Toast message (text, timestamp)
    pub toast_message: Option<(String, Instant)>,

    /// Whether app should quit
    pub should_quit: bool,
}

impl UiModel {
    pub fn new(vim_mode: bool) -> Self {
        Self {
            vim_mode,
            overlay_open: false,
            search_mode: false,
            selection: None,
            list_offset: 0,
            toast_message: None,
            should_quit: false,
        }
    }

    /// Reset the list cursor for a newly shown list
    pub fn reset_cursor(&mut self, offset: usize, row_count: usize) {
        self.selection = if row_count == 0 { None } else { Some(offset.min(row_count - 1)) };
        self.list_offset = offset;
    }

    pub fn show_toast(&mut self, message: String) {
        self.toast_message = Some((message, Instant::now()));
    }

    pub fn should_dismiss_toast(&self) -> bool {
        self.toast_message
            .as_ref()
            .map_or(false, |(_, at)| crate::logic::ui::should_dismiss_toast(at.elapsed().as_millis()))
    }

    pub fn dismiss_toast(&mut self) {
        self.toast_message = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ui_model_creation() {
        let ui = UiModel::new(true);
        assert!(ui.vim_mode);
        assert!(!ui.overlay_open);
        assert!(!ui.search_mode);
        assert!(ui.selection.is_none());
    }

    #[test]
    fn test_reset_cursor() {
        let mut ui = UiModel::new(false);
        ui.reset_cursor(4, 10);
        assert_eq!(ui.selection, Some(4));
        assert_eq!(ui.list_offset, 4);

        ui.reset_cursor(12, 3);
        assert_eq!(ui.selection, Some(2));

        ui.reset_cursor(0, 0);
        assert_eq!(ui.selection, None);
    }

    #[test]
    fn test_toast() {
        let mut ui = UiModel::new(false);
        ui.show_toast("Filters cleared".to_string());
        assert!(ui.toast_message.is_some());
        assert!(!ui.should_dismiss_toast());

        ui.dismiss_toast();
        assert!(ui.toast_message.is_none());
    }
}
