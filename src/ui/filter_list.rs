use leasefilter::logic::formatting::summarize_values;
use leasefilter::model::{Model, Row, View};
use ratatui::{
    layout::{Margin, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{
        Block, Borders, List, ListItem, ListState, Scrollbar, ScrollbarOrientation,
        ScrollbarState,
    },
    Frame,
};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Selected values shown next to a drill-in row
const SUMMARY_VALUES: usize = 2;

/// Cut `text` to `max_width` columns, ending in "…" when shortened
pub fn truncate_to_width(text: &str, max_width: usize) -> String {
    if text.width() <= max_width {
        return text.to_string();
    }
    if max_width == 0 {
        return String::new();
    }

    let mut out = String::new();
    let mut used = 0;
    for c in text.chars() {
        let w = c.width().unwrap_or(0);
        if used + w > max_width - 1 {
            break;
        }
        out.push(c);
        used += w;
    }
    out.push('…');
    out
}

/// Checkbox state of a row, None for drill-in rows
fn row_checkbox(model: &Model, row: &Row) -> Option<bool> {
    match row {
        Row::Section(_) => None,
        Row::Make(_) if model.navigation.current_view == View::MakeSelection => None,
        _ => Some(model.row_is_checked(row)),
    }
}

/// Right-aligned summary of what a drill-in row has selected
fn row_detail(model: &Model, row: &Row) -> Option<String> {
    let filters = &model.filters;
    match row {
        Row::Section(View::Makes) => {
            let makes: Vec<&str> = filters.makes.iter().map(String::as_str).collect();
            Some(summarize_values(&makes, SUMMARY_VALUES))
        }
        Row::Section(View::MakeSelection) => {
            let models: Vec<String> = filters
                .models
                .iter()
                .map(|(make, name)| format!("{} {}", make, name))
                .collect();
            Some(summarize_values(&models, SUMMARY_VALUES))
        }
        Row::Make(name) if model.navigation.current_view == View::MakeSelection => {
            let models: Vec<&str> = filters.models_of(name).collect();
            (!models.is_empty()).then(|| summarize_values(&models, SUMMARY_VALUES))
        }
        _ => None,
    }
}

/// Lay out one row: checkbox, label, drill marker, then the detail pushed
/// to the right edge. The detail is dropped before the label is truncated.
pub fn build_row_line(
    label: &str,
    checkbox: Option<bool>,
    detail: Option<&str>,
    available_width: usize,
) -> Line<'static> {
    let prefix = match checkbox {
        Some(true) => "[x] ",
        Some(false) => "[ ] ",
        None => "",
    };
    let suffix = if checkbox.is_none() { " ›" } else { "" };

    let fixed = prefix.width() + suffix.width();
    let label = truncate_to_width(label, available_width.saturating_sub(fixed));
    let left_width = fixed + label.width();

    let mut spans = vec![
        Span::styled(prefix, Style::default().fg(Color::Green)),
        Span::raw(label),
        Span::styled(suffix, Style::default().fg(Color::DarkGray)),
    ];

    if let Some(detail) = detail {
        let spacing = 2;
        let detail_width = detail.width();
        if left_width + spacing + detail_width <= available_width {
            let padding = available_width - left_width - detail_width;
            spans.push(Span::raw(" ".repeat(padding)));
            spans.push(Span::styled(
                detail.to_string(),
                Style::default().fg(Color::Rgb(120, 120, 120)),
            ));
        }
    }

    Line::from(spans)
}

/// Render the rows of the current view
pub fn render_filter_list(
    f: &mut Frame,
    area: Rect,
    model: &Model,
    rows: &[Row],
    state: &mut ListState,
) {
    // panel width - borders(2) - highlight(2)
    let available_width = area.width.saturating_sub(4) as usize;

    let items: Vec<ListItem> = rows
        .iter()
        .map(|row| {
            let detail = row_detail(model, row);
            ListItem::new(build_row_line(
                &row.label(),
                row_checkbox(model, row),
                detail.as_deref(),
                available_width,
            ))
        })
        .collect();

    let empty_text = if model.catalog.load_state.is_loading() && !model.catalog.has_data() {
        "Loading…"
    } else if !model.navigation.search_term.is_empty() {
        "No matches"
    } else {
        "Nothing to choose"
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));

    if items.is_empty() {
        let list = List::new(vec![ListItem::new(Span::styled(
            empty_text,
            Style::default().fg(Color::DarkGray),
        ))])
        .block(block);
        f.render_widget(list, area);
        return;
    }

    let list = List::new(items)
        .block(block)
        .highlight_style(
            Style::default()
                .bg(Color::DarkGray)
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol("> ");
    f.render_stateful_widget(list, area, state);

    let viewport_height = area.height.saturating_sub(2) as usize;
    if rows.len() > viewport_height {
        let mut scrollbar_state =
            ScrollbarState::new(rows.len().saturating_sub(viewport_height)).position(state.offset());

        let scrollbar = Scrollbar::new(ScrollbarOrientation::VerticalRight)
            .begin_symbol(Some("↑"))
            .end_symbol(Some("↓"))
            .track_symbol(Some("│"))
            .thumb_symbol("█");

        f.render_stateful_widget(
            scrollbar,
            area.inner(Margin {
                horizontal: 0,
                vertical: 1,
            }),
            &mut scrollbar_state,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn line_text(line: &Line) -> String {
        line.spans.iter().map(|s| s.content.as_ref()).collect()
    }

    #[test]
    fn test_truncate_to_width() {
        assert_eq!(truncate_to_width("Volvo", 10), "Volvo");
        assert_eq!(truncate_to_width("Volkswagen", 5), "Volk…");
        assert_eq!(truncate_to_width("Škoda", 0), "");
    }

    #[test]
    fn test_truncate_wide_characters() {
        // Each CJK character is two columns wide
        assert_eq!(truncate_to_width("日産自動車", 5), "日産…");
    }

    #[test]
    fn test_checkbox_rows() {
        let line = build_row_line("Fuel type: Electric", Some(true), None, 40);
        assert_eq!(line_text(&line), "[x] Fuel type: Electric");

        let line = build_row_line("Fuel type: Petrol", Some(false), None, 40);
        assert_eq!(line_text(&line), "[ ] Fuel type: Petrol");
    }

    #[test]
    fn test_drill_row_right_aligns_detail() {
        let line = build_row_line("Makes", None, Some("Audi, BMW"), 20);
        let text = line_text(&line);
        assert_eq!(text.width(), 20);
        assert!(text.starts_with("Makes ›"));
        assert!(text.ends_with("Audi, BMW"));
    }

    #[test]
    fn test_detail_dropped_when_narrow() {
        let line = build_row_line("Makes", None, Some("Audi, BMW +3"), 12);
        assert_eq!(line_text(&line), "Makes ›");
    }
}
