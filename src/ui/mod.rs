// UI module - handles all TUI rendering using Ratatui
//
// Architecture:
// - layout: Calculates screen layout (header, search, list, legend, status)
// - render: Main orchestration function that coordinates all rendering
// - header: Renders the overlay title with the back/close marker
// - filter_list: Renders the rows of the current view
// - summary: Renders the active filters while the overlay is closed
// - legend: Renders hotkey legend
// - search: Renders search input box with query and match count
// - status_bar: Renders bottom status bar with catalog state
// - toast: Renders toast notifications (brief pop-up messages)

pub mod filter_list;
pub mod header;
pub mod layout;
pub mod legend;
pub mod render;
pub mod search;
pub mod status_bar;
pub mod summary;
pub mod toast;

// Re-export main render function for convenience
pub use render::render;
