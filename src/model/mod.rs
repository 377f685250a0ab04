//! Pure Application Model - Elm Architecture
//!
//! This module defines the pure, cloneable state for the application.
//! The Model is organized into focused sub-models:
//!
//! - **NavigationModel**: Current overlay view, search term, drilled make
//! - **FilterSelection**: Filter values the user has chosen
//! - **CatalogModel**: Reference data and its load state
//! - **UiModel**: Overlay visibility, cursor, toasts
//!
//! Key principles:
//! - Clone + Debug: Can snapshot and compare state
//! - No services: All I/O lives in the App runtime
//! - Pure accessors: Helper methods are side-effect free

pub mod catalog;
pub mod filters;
pub mod navigation;
pub mod types;
pub mod ui;

pub use catalog::CatalogModel;
pub use filters::FilterSelection;
pub use navigation::NavigationModel;
pub use types::*;
pub use ui::UiModel;

use crate::logic::search::search_matches;

/// Root application model composed of focused sub-models
#[derive(Clone, Debug)]
pub struct Model {
    /// Where the user is inside the overlay
    pub navigation: NavigationModel,

    /// Chosen filter values
    pub filters: FilterSelection,

    /// Reference data
    pub catalog: CatalogModel,

    /// UI state
    pub ui: UiModel,
}

impl Model {
    /// Create initial model with default settings
    pub fn new(vim_mode: bool) -> Self {
        Self {
            navigation: NavigationModel::new(),
            filters: FilterSelection::new(),
            catalog: CatalogModel::new(),
            ui: UiModel::new(vim_mode),
        }
    }

    /// All rows of the current view before search filtering
    fn all_rows(&self) -> Vec<Row> {
        let catalog = &self.catalog.catalog;
        match self.navigation.current_view {
            View::Filters => {
                let mut rows = vec![Row::Section(View::Makes), Row::Section(View::MakeSelection)];
                rows.extend(catalog.body_types.iter().cloned().map(Row::BodyType));
                rows.extend(catalog.fuel_types.iter().cloned().map(Row::FuelType));
                rows.extend(catalog.transmissions.iter().cloned().map(Row::Transmission));
                rows
            }
            View::Makes | View::MakeSelection => catalog
                .make_names()
                .map(|name| Row::Make(name.to_string()))
                .collect(),
            View::Models => match self.navigation.selected_make_for_models.as_deref() {
                Some(make) => catalog
                    .models_for(make)
                    .iter()
                    .map(|name| Row::Model {
                        make: make.to_string(),
                        name: name.clone(),
                    })
                    .collect(),
                None => Vec::new(),
            },
        }
    }

    /// Rows of the current view matching the search term
    pub fn visible_rows(&self) -> Vec<Row> {
        let query = self.navigation.search_term.trim();
        self.all_rows()
            .into_iter()
            .filter(|row| search_matches(query, &row.label()))
            .collect()
    }

    /// Row under the cursor (if any)
    pub fn selected_row(&self) -> Option<Row> {
        self.ui
            .selection
            .and_then(|idx| self.visible_rows().into_iter().nth(idx))
    }

    /// Whether a toggle row is currently selected as a filter
    pub fn row_is_checked(&self, row: &Row) -> bool {
        let filters = &self.filters;
        match row {
            Row::Section(_) => false,
            Row::BodyType(v) => filters.body_types.contains(v),
            Row::FuelType(v) => filters.fuel_types.contains(v),
            Row::Transmission(v) => filters.transmissions.contains(v),
            Row::Make(name) => match self.navigation.current_view {
                View::MakeSelection => filters.models_of(name).next().is_some(),
                _ => filters.makes.contains(name),
            },
            Row::Model { make, name } => filters.has_model(make, name),
        }
    }

    /// Storage key for the current list's scroll offset
    pub fn scroll_key(&self) -> String {
        crate::logic::scroll::route_key(
            self.navigation.current_view,
            self.navigation.selected_make_for_models.as_deref(),
        )
    }

    /// Show toast message
    pub fn show_toast(&mut self, message: String) {
        self.ui.show_toast(message);
    }
}
