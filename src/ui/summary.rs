//! Closed-overlay screen
//!
//! Shows the filter button caption and one line per filter group.

use leasefilter::logic::formatting::{filter_button_label, summarize_values};
use leasefilter::model::FilterSelection;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

/// Values listed per group before counting the rest
const SUMMARY_VALUES: usize = 4;

/// (group, summary) pairs in display order
pub fn summary_lines(filters: &FilterSelection) -> Vec<(&'static str, String)> {
    let models: Vec<String> = filters
        .models
        .iter()
        .map(|(make, name)| format!("{} {}", make, name))
        .collect();

    vec![
        ("Makes", summarize_values(&collect(&filters.makes), SUMMARY_VALUES)),
        ("Models", summarize_values(&models, SUMMARY_VALUES)),
        ("Body type", summarize_values(&collect(&filters.body_types), SUMMARY_VALUES)),
        ("Fuel type", summarize_values(&collect(&filters.fuel_types), SUMMARY_VALUES)),
        ("Transmission", summarize_values(&collect(&filters.transmissions), SUMMARY_VALUES)),
    ]
}

fn collect<'a>(values: impl IntoIterator<Item = &'a String>) -> Vec<&'a str> {
    values.into_iter().map(String::as_str).collect()
}

pub fn render_summary(f: &mut Frame, area: Rect, filters: &FilterSelection) {
    let mut lines = vec![
        Line::from(Span::styled(
            format!("[ {} ]", filter_button_label(filters.active_count())),
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
        )),
        Line::raw(""),
    ];

    for (group, summary) in summary_lines(filters) {
        let value_style = if summary == "Any" {
            Style::default().fg(Color::DarkGray)
        } else {
            Style::default()
        };
        lines.push(Line::from(vec![
            Span::styled(format!("{:<14}", group), Style::default().fg(Color::Yellow)),
            Span::styled(summary, value_style),
        ]));
    }

    let paragraph = Paragraph::new(lines)
        .block(Block::default().borders(Borders::ALL).title(" Lease offers "))
        .wrap(Wrap { trim: false });

    f.render_widget(paragraph, area);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_summary_of_empty_selection() {
        let filters = FilterSelection::new();
        let lines = summary_lines(&filters);
        assert_eq!(lines.len(), 5);
        assert!(lines.iter().all(|(_, summary)| summary == "Any"));
    }

    #[test]
    fn test_summary_lists_models_with_make() {
        let mut filters = FilterSelection::new();
        filters.toggle_model("Audi", "A4");
        filters.toggle_model("BMW", "i4");
        filters.toggle_fuel_type("Electric");

        let lines = summary_lines(&filters);
        assert_eq!(lines[1], ("Models", "Audi A4, BMW i4".to_string()));
        assert_eq!(lines[3], ("Fuel type", "Electric".to_string()));
        assert_eq!(lines[0].1, "Any");
    }
}
