//! Search Input UI
//!
//! Renders the search input box with query, match count, and blinking cursor.

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Box title for the current search state
fn search_title(query: &str, active: bool, match_count: usize, vim_mode: bool) -> String {
    if active {
        format!(" Search ({} matches) - Enter to accept, Esc to cancel ", match_count)
    } else if !query.is_empty() {
        // Search accepted (Enter pressed)
        format!(" Search ({} matches) - Esc to clear ", match_count)
    } else {
        let search_key = if vim_mode { "/" } else { "Ctrl-F" };
        format!(" Search ({}) ", search_key)
    }
}

/// Render the search box above the filter list
///
/// # Arguments
/// - `query`: Current search term of the view
/// - `active`: Whether input is actively receiving keystrokes
/// - `match_count`: Rows of the current view matching `query`
pub fn render_search_input(
    f: &mut Frame,
    area: Rect,
    query: &str,
    active: bool,
    match_count: usize,
    vim_mode: bool,
) {
    let border_color = if active { Color::Cyan } else { Color::Gray };

    let block = Block::default()
        .borders(Borders::ALL)
        .title(search_title(query, active, match_count, vim_mode))
        .style(Style::default().fg(border_color));

    let input_line = if active {
        let cursor_style = Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::SLOW_BLINK);
        Line::from(vec![
            Span::raw("Find: "),
            Span::raw(query.to_string()),
            Span::styled("█", cursor_style),
        ])
    } else {
        Line::from(vec![Span::styled(
            format!("Find: {}", query),
            Style::default().fg(Color::Gray),
        )])
    };

    f.render_widget(Paragraph::new(vec![input_line]).block(block), area);
}
