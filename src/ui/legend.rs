use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

fn key(label: &'static str) -> Span<'static> {
    Span::styled(label, Style::default().fg(Color::Yellow))
}

/// Build hotkey spans (extracted for testability)
fn build_hotkey_spans(
    vim_mode: bool,
    overlay_open: bool,
    can_go_back: bool,
    search_mode: bool,
    has_search_term: bool,
) -> Vec<Span<'static>> {
    if !overlay_open {
        return vec![
            key("f"),
            Span::raw(":Filters  "),
            key("x"),
            Span::raw(":Clear  "),
            key("r"),
            Span::raw(":Refresh  "),
            key("q"),
            Span::raw(":Quit"),
        ];
    }

    if search_mode {
        return vec![
            key("Enter"),
            Span::raw(":Accept  "),
            key("Esc"),
            Span::raw(":Exit Search  "),
            key("↑/↓"),
            Span::raw(":Nav"),
        ];
    }

    let mut hotkey_spans = vec![];

    // Navigation keys (different for vim mode)
    if vim_mode {
        hotkey_spans.extend(vec![key("jk"), Span::raw(":Nav  "), key("l"), Span::raw(":Select  ")]);
    } else {
        hotkey_spans.extend(vec![key("↑/↓"), Span::raw(":Nav  "), key("Enter"), Span::raw(":Select  ")]);
    }

    // Esc clears an accepted search before it navigates
    if has_search_term {
        hotkey_spans.extend(vec![key("Esc"), Span::raw(":Clear Search  ")]);
    } else {
        let search_key = if vim_mode { "/" } else { "^F" };
        hotkey_spans.extend(vec![key(search_key), Span::raw(":Search  ")]);
    }

    let back_key = if vim_mode { "h" } else { "←" };
    if can_go_back {
        hotkey_spans.extend(vec![key(back_key), Span::raw(":Back  ")]);
    } else {
        hotkey_spans.extend(vec![key(back_key), Span::raw(":Close  ")]);
    }

    hotkey_spans.extend(vec![
        key("x"),
        Span::raw(":Clear  "),
        key("r"),
        Span::raw(":Refresh  "),
        key("q"),
        Span::raw(":Close"),
    ]);

    hotkey_spans
}

/// Render the hotkey legend
pub fn render_legend(
    f: &mut Frame,
    area: Rect,
    vim_mode: bool,
    overlay_open: bool,
    can_go_back: bool,
    search_mode: bool,
    has_search_term: bool,
) {
    let hotkey_line = Line::from(build_hotkey_spans(
        vim_mode,
        overlay_open,
        can_go_back,
        search_mode,
        has_search_term,
    ));

    let legend = Paragraph::new(vec![hotkey_line])
        .block(Block::default().borders(Borders::ALL).title("Hotkeys"))
        .style(Style::default().fg(Color::Gray))
        .wrap(ratatui::widgets::Wrap { trim: false });

    f.render_widget(legend, area);
}

/// Calculate required height for legend based on terminal width and content
pub fn calculate_legend_height(
    terminal_width: u16,
    vim_mode: bool,
    overlay_open: bool,
    can_go_back: bool,
    search_mode: bool,
    has_search_term: bool,
) -> u16 {
    // Count lines without the block; line_count() ignores borders
    let hotkey_line = Line::from(build_hotkey_spans(
        vim_mode,
        overlay_open,
        can_go_back,
        search_mode,
        has_search_term,
    ));
    let paragraph = Paragraph::new(vec![hotkey_line]).wrap(ratatui::widgets::Wrap { trim: false });

    let available_width = terminal_width.saturating_sub(2);
    let line_count = paragraph.line_count(available_width);

    // Add top + bottom borders, ensure minimum of 3
    (line_count as u16).saturating_add(2).max(3)
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Helper function to convert spans to plain text for assertions
    fn spans_to_text(spans: &[Span]) -> String {
        spans
            .iter()
            .map(|span| span.content.as_ref())
            .collect::<Vec<_>>()
            .join("")
    }

    #[test]
    fn test_closed_legend_offers_open_and_quit() {
        let text = spans_to_text(&build_hotkey_spans(false, false, false, false, false));
        assert!(text.contains("f:Filters"), "got: {}", text);
        assert!(text.contains("q:Quit"), "got: {}", text);
    }

    #[test]
    fn test_root_view_shows_close() {
        let text = spans_to_text(&build_hotkey_spans(false, true, false, false, false));
        assert!(text.contains("←:Close"), "got: {}", text);
        assert!(!text.contains(":Back"), "got: {}", text);
    }

    #[test]
    fn test_nested_view_shows_back() {
        let text = spans_to_text(&build_hotkey_spans(true, true, true, false, false));
        assert!(text.contains("h:Back"), "got: {}", text);
        assert!(text.contains("/:Search"), "got: {}", text);
    }

    #[test]
    fn test_search_states() {
        let typing = spans_to_text(&build_hotkey_spans(false, true, true, true, true));
        assert!(typing.contains("Esc:Exit Search"), "got: {}", typing);

        let accepted = spans_to_text(&build_hotkey_spans(false, true, true, false, true));
        assert!(accepted.contains("Esc:Clear Search"), "got: {}", accepted);
        assert!(!accepted.contains("^F:Search"), "got: {}", accepted);
    }

    #[test]
    fn test_legend_height_grows_when_narrow() {
        let wide = calculate_legend_height(200, false, true, true, false, false);
        let narrow = calculate_legend_height(30, false, true, true, false, false);
        assert_eq!(wide, 3);
        assert!(narrow > wide);
    }
}
