use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};
use unicode_width::UnicodeWidthStr;

/// Area for a toast centered near the top of `area`
fn toast_area(area: Rect, message: &str) -> Rect {
    let max_width = area.width.min(80) as usize;
    // icon(2) + borders(2) + padding(2)
    let width = (message.width() + 6).min(max_width) as u16;
    let height = 4.min(area.height);

    Rect {
        x: area.x + area.width.saturating_sub(width) / 2,
        y: area.y + 3.min(area.height.saturating_sub(height)),
        width,
        height,
    }
}

/// Render a toast notification (brief pop-up message)
pub fn render_toast(f: &mut Frame, area: Rect, message: &str) {
    let toast_area = toast_area(area, message);

    // Clear the area first to prevent background bleed-through
    f.render_widget(Clear, toast_area);

    let is_error = message.starts_with("Error:");
    let (icon, color) = if is_error {
        ("✗ ", Color::Red)
    } else {
        ("✓ ", Color::Green)
    };

    let toast_line = Line::from(vec![
        Span::styled(icon, Style::default().fg(color).add_modifier(Modifier::BOLD)),
        Span::raw(message.to_string()),
    ]);

    let toast_block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(color).add_modifier(Modifier::BOLD));

    let toast = Paragraph::new(vec![toast_line])
        .block(toast_block)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: false });

    f.render_widget(toast, toast_area);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toast_area_centered() {
        let area = toast_area(Rect::new(0, 0, 100, 30), "Cleared 2 filter(s)");
        assert_eq!(area.width, 25);
        assert_eq!(area.x, 37);
        assert_eq!(area.y, 3);
    }

    #[test]
    fn test_toast_area_fits_small_terminal() {
        let area = toast_area(Rect::new(0, 0, 20, 5), &"x".repeat(200));
        assert_eq!(area.width, 20);
        assert_eq!(area.x, 0);
        assert!(area.y + area.height <= 5);
    }
}
