//! Overlay Header
//!
//! Title of the current view with a back marker when one level up exists,
//! or a close marker at the root.

use leasefilter::model::View;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Title text for a view, naming the drilled make on the models list
pub fn header_title(view: View, make: Option<&str>) -> String {
    match (view, make) {
        (View::Models, Some(make)) => format!("{}: {}", view.label(), make),
        _ => view.label().to_string(),
    }
}

fn control_marker(can_go_back: bool) -> &'static str {
    if can_go_back {
        "← Back"
    } else {
        "✕ Close"
    }
}

pub fn render_header(
    f: &mut Frame,
    area: Rect,
    view: View,
    make: Option<&str>,
    can_go_back: bool,
) {
    let line = Line::from(vec![
        Span::styled(
            control_marker(can_go_back),
            Style::default().fg(Color::Yellow),
        ),
        Span::raw("   "),
        Span::styled(
            header_title(view, make),
            Style::default().add_modifier(Modifier::BOLD),
        ),
    ]);

    let header = Paragraph::new(vec![line]).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan)),
    );

    f.render_widget(header, area);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_header_title() {
        assert_eq!(header_title(View::Filters, None), "Filters");
        assert_eq!(header_title(View::Models, Some("Audi")), "Models: Audi");
        // A stale make is not shown outside the models list
        assert_eq!(header_title(View::Makes, Some("Audi")), "Makes");
    }

    #[test]
    fn test_control_marker() {
        assert_eq!(control_marker(true), "← Back");
        assert_eq!(control_marker(false), "✕ Close");
    }
}
