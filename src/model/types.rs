//! Shared Model Types
//!
//! Small value types used across the sub-models.

/// One step of the filter overlay
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum View {
    /// Root list of filter sections (initial view)
    #[default]
    Filters,
    /// All makes, multi-select
    Makes,
    /// Pick a make to drill into its models
    MakeSelection,
    /// Models of the drilled make
    Models,
}

impl View {
    pub const ALL: [View; 4] = [View::Filters, View::Makes, View::MakeSelection, View::Models];

    /// Title shown in the overlay header
    pub fn label(self) -> &'static str {
        match self {
            View::Filters => "Filters",
            View::Makes => "Makes",
            View::MakeSelection => "Choose make",
            View::Models => "Models",
        }
    }

    /// Stable key for per-view storage (scroll offsets)
    pub fn route_key(self) -> &'static str {
        match self {
            View::Filters => "filters",
            View::Makes => "makes",
            View::MakeSelection => "make-selection",
            View::Models => "models",
        }
    }
}

/// Result of a back-navigation request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BackOutcome {
    /// Moved to the given view inside the overlay
    Navigated(View),
    /// Already at the root; the overlay should close
    ExitedOverlay,
}

/// One row of the list shown for the current view
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Row {
    /// Drill-in entry on the root view
    Section(View),
    BodyType(String),
    FuelType(String),
    Transmission(String),
    Make(String),
    Model { make: String, name: String },
}

impl Row {
    /// Text the row is displayed and searched by
    pub fn label(&self) -> String {
        match self {
            Row::Section(View::Makes) => "Makes".to_string(),
            Row::Section(View::MakeSelection) => "Models".to_string(),
            Row::Section(view) => view.label().to_string(),
            Row::BodyType(v) => format!("Body type: {}", v),
            Row::FuelType(v) => format!("Fuel type: {}", v),
            Row::Transmission(v) => format!("Transmission: {}", v),
            Row::Make(name) => name.clone(),
            Row::Model { name, .. } => name.clone(),
        }
    }
}

/// Reference data load state
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum LoadState {
    #[default]
    Idle,
    Loading,
    Ready,
    Failed(String),
}

impl LoadState {
    pub fn is_loading(&self) -> bool {
        matches!(self, LoadState::Loading)
    }
}
