use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Status bar: top border, text, bottom border
const STATUS_HEIGHT: u16 = 3;

/// Layout information for rendering
pub struct LayoutInfo {
    /// Overlay title bar (only while the overlay is open)
    pub header_area: Option<Rect>,
    /// Search input area (only while the overlay is open)
    pub search_area: Option<Rect>,
    /// Filter list, or the summary screen when the overlay is closed
    pub body_area: Rect,
    /// Hotkey legend area (full width)
    pub legend_area: Rect,
    /// Bottom status bar area
    pub status_area: Rect,
}

/// Calculate the screen layout for all UI components
pub fn calculate_layout(terminal_size: Rect, legend_height: u16, overlay_open: bool) -> LayoutInfo {
    if !overlay_open {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Min(3),                // Summary
                Constraint::Length(legend_height), // Legend (exact fit for wrapped content)
                Constraint::Length(STATUS_HEIGHT), // Status bar
            ])
            .split(terminal_size);

        return LayoutInfo {
            header_area: None,
            search_area: None,
            body_area: chunks[0],
            legend_area: chunks[1],
            status_area: chunks[2],
        };
    }

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),             // Header
            Constraint::Length(3),             // Search input
            Constraint::Min(3),                // Filter list
            Constraint::Length(legend_height), // Legend
            Constraint::Length(STATUS_HEIGHT), // Status bar
        ])
        .split(terminal_size);

    LayoutInfo {
        header_area: Some(chunks[0]),
        search_area: Some(chunks[1]),
        body_area: chunks[2],
        legend_area: chunks[3],
        status_area: chunks[4],
    }
}
