//! Navigation orchestration methods
//!
//! Methods for moving through the filter overlay:
//! - Opening and closing the overlay
//! - Drilling into views and stepping back
//! - Moving the cursor and activating rows

use leasefilter::logic;
use leasefilter::model::{BackOutcome, Row, View};
use std::time::Instant;

use crate::App;

impl App {
    /// Show the overlay at its root view
    pub(crate) fn open_overlay(&mut self) {
        self.model.navigation.reset_navigation();
        self.model.ui.overlay_open = true;
        self.model.ui.search_mode = false;
        self.enter_current_view();
        tracing::debug!("overlay opened");
    }

    /// Hide the overlay. Scroll offsets stay recorded for the next session.
    pub(crate) fn close_overlay(&mut self) {
        self.remember_scroll_offset();
        self.model.ui.overlay_open = false;
        self.model.ui.search_mode = false;
        tracing::debug!("overlay closed");
    }

    pub(crate) fn navigate_to(&mut self, view: View, make: Option<&str>) {
        self.remember_scroll_offset();
        let before = (self.model.navigation.current_view, self.model.scroll_key());

        self.model.navigation.navigate_to_view(view, make);

        let after = (self.model.navigation.current_view, self.model.scroll_key());
        if before != after {
            self.enter_current_view();
        }
    }

    /// Step back one level; at the root this closes the overlay
    pub(crate) fn go_back(&mut self) {
        self.remember_scroll_offset();
        match self.model.navigation.go_back() {
            BackOutcome::Navigated(_) => self.enter_current_view(),
            BackOutcome::ExitedOverlay => self.close_overlay(),
        }
    }

    /// Reset the cursor and restore the stored offset for the current list
    fn enter_current_view(&mut self) {
        let key = self.model.scroll_key();
        let offset = self.scroll.restore(&self.cache, &key);
        let row_count = self.model.visible_rows().len();
        self.model.ui.reset_cursor(offset, row_count);
    }

    /// Record the current list offset under the current route key
    pub(crate) fn remember_scroll_offset(&mut self) {
        if !self.model.ui.overlay_open {
            return;
        }
        let key = self.model.scroll_key();
        self.scroll.record(&key, self.model.ui.list_offset, Instant::now());
    }

    pub(crate) fn select_next(&mut self) {
        let count = self.model.visible_rows().len();
        self.model.ui.selection = logic::navigation::next_selection(self.model.ui.selection, count);
    }

    pub(crate) fn select_previous(&mut self) {
        let count = self.model.visible_rows().len();
        self.model.ui.selection = logic::navigation::prev_selection(self.model.ui.selection, count);
    }

    /// Drill into or toggle the row under the cursor
    pub(crate) fn activate_selected(&mut self) {
        let Some(row) = self.model.selected_row() else {
            return;
        };

        match row {
            Row::Section(view) => self.navigate_to(view, None),
            Row::BodyType(value) => {
                self.model.filters.toggle_body_type(&value);
            }
            Row::FuelType(value) => {
                self.model.filters.toggle_fuel_type(&value);
            }
            Row::Transmission(value) => {
                self.model.filters.toggle_transmission(&value);
            }
            Row::Make(name) if self.model.navigation.current_view == View::MakeSelection => {
                self.navigate_to(View::Models, Some(&name));
            }
            Row::Make(name) => {
                self.model.filters.toggle_make(&name);
            }
            Row::Model { make, name } => {
                self.model.filters.toggle_model(&make, &name);
            }
        }
    }

    pub(crate) fn set_search_term(&mut self, term: String) {
        self.model.navigation.set_search_term(term);
        self.clamp_selection();
    }

    pub(crate) fn push_search_char(&mut self, c: char) {
        let mut term = self.model.navigation.search_term.clone();
        term.push(c);
        self.set_search_term(term);
    }

    pub(crate) fn pop_search_char(&mut self) {
        let mut term = self.model.navigation.search_term.clone();
        term.pop();
        self.set_search_term(term);
    }

    /// Keep the cursor inside the current list after it changed size
    pub(crate) fn clamp_selection(&mut self) {
        let count = self.model.visible_rows().len();
        self.model.ui.selection = logic::navigation::clamp_selection(self.model.ui.selection, count);
    }
}
