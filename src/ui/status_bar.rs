use chrono::{DateTime, Local, Utc};
use leasefilter::model::{CatalogModel, LoadState};
use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

fn format_fetched_at(fetched_at: Option<DateTime<Utc>>) -> String {
    match fetched_at {
        Some(at) => at.with_timezone(&Local).format("%Y-%m-%d %H:%M").to_string(),
        None => "never".to_string(),
    }
}

/// Catalog state text for the status bar
pub fn catalog_status_text(catalog: &CatalogModel) -> String {
    match &catalog.load_state {
        LoadState::Idle => "Catalog: not loaded".to_string(),
        LoadState::Loading if catalog.has_data() => format!(
            "Catalog: refreshing (showing {})",
            format_fetched_at(catalog.fetched_at)
        ),
        LoadState::Loading => "Catalog: loading…".to_string(),
        LoadState::Ready => format!("Catalog: updated {}", format_fetched_at(catalog.fetched_at)),
        LoadState::Failed(_) if catalog.has_data() => format!(
            "Catalog: refresh failed (showing {})",
            format_fetched_at(catalog.fetched_at)
        ),
        LoadState::Failed(_) => "Catalog: unavailable".to_string(),
    }
}

/// Render the bottom status bar
/// - Left: catalog load state
/// - Right: row count of the open list and active filter count
pub fn render_status_bar(
    f: &mut Frame,
    area: Rect,
    catalog: &CatalogModel,
    row_count: Option<usize>,
    active_filters: usize,
) {
    let status_color = match catalog.load_state {
        LoadState::Failed(_) => Color::Red,
        LoadState::Loading => Color::Yellow,
        _ => Color::Gray,
    };

    let mut spans = vec![Span::styled(
        catalog_status_text(catalog),
        Style::default().fg(status_color),
    )];

    if let Some(count) = row_count {
        spans.push(Span::raw(format!(" │ {} rows", count)));
    }
    spans.push(Span::raw(format!(" │ {} active", active_filters)));

    let status = Paragraph::new(vec![Line::from(spans)])
        .block(Block::default().borders(Borders::ALL));

    f.render_widget(status, area);
}
