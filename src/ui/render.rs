use crate::App;
use ratatui::{widgets::ListState, Frame};

use super::{filter_list, header, layout, legend, search, status_bar, summary, toast};

/// Main render function - orchestrates all UI rendering
pub fn render(f: &mut Frame, app: &mut App) {
    let size = f.area();
    let model = &mut app.model;

    let overlay_open = model.ui.overlay_open;
    let vim_mode = model.ui.vim_mode;
    let search_mode = model.ui.search_mode;
    let can_go_back = model.navigation.can_go_back();
    let has_search_term = !model.navigation.search_term.is_empty();

    let legend_height = legend::calculate_legend_height(
        size.width,
        vim_mode,
        overlay_open,
        can_go_back,
        search_mode,
        has_search_term,
    );
    let layout_info = layout::calculate_layout(size, legend_height, overlay_open);

    let mut row_count = None;

    if overlay_open {
        let rows = model.visible_rows();
        row_count = Some(rows.len());

        if let Some(area) = layout_info.header_area {
            header::render_header(
                f,
                area,
                model.navigation.current_view,
                model.navigation.selected_make_for_models.as_deref(),
                can_go_back,
            );
        }

        if let Some(area) = layout_info.search_area {
            search::render_search_input(
                f,
                area,
                &model.navigation.search_term,
                search_mode,
                rows.len(),
                vim_mode,
            );
        }

        // Temporary ListState; the list may move the offset to keep the cursor visible
        let mut list_state = ListState::default()
            .with_offset(model.ui.list_offset)
            .with_selected(model.ui.selection);
        filter_list::render_filter_list(f, layout_info.body_area, model, &rows, &mut list_state);

        // Sync back so the offset can be remembered per route
        model.ui.selection = list_state.selected();
        model.ui.list_offset = list_state.offset();
    } else {
        summary::render_summary(f, layout_info.body_area, &model.filters);
    }

    legend::render_legend(
        f,
        layout_info.legend_area,
        vim_mode,
        overlay_open,
        can_go_back,
        search_mode,
        has_search_term,
    );

    status_bar::render_status_bar(
        f,
        layout_info.status_area,
        &model.catalog,
        row_count,
        model.filters.active_count(),
    );

    if let Some((message, _timestamp)) = &model.ui.toast_message {
        toast::render_toast(f, size, message);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::test_app;
    use leasefilter::model::View;
    use ratatui::{backend::TestBackend, Terminal};

    fn screen_text(terminal: &Terminal<TestBackend>) -> String {
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    #[test]
    fn test_closed_screen_shows_summary() {
        let (mut app, _requests) = test_app();
        app.model.filters.toggle_make("Audi");

        let mut terminal = Terminal::new(TestBackend::new(80, 24)).unwrap();
        terminal.draw(|f| render(f, &mut app)).unwrap();

        let text = screen_text(&terminal);
        assert!(text.contains("Filters (1)"));
        assert!(text.contains("Audi"));
    }

    #[test]
    fn test_open_overlay_renders_rows_and_close_marker() {
        let (mut app, _requests) = test_app();
        app.open_overlay();

        let mut terminal = Terminal::new(TestBackend::new(80, 24)).unwrap();
        terminal.draw(|f| render(f, &mut app)).unwrap();

        let text = screen_text(&terminal);
        assert!(text.contains("Close"));
        assert!(text.contains("Body type: SUV"));
    }

    #[test]
    fn test_list_offset_synced_from_render() {
        let (mut app, _requests) = test_app();
        app.open_overlay();
        app.navigate_to(View::Makes, None);
        app.model.ui.selection = Some(2);

        // Room for a single row forces the list to scroll
        let mut terminal = Terminal::new(TestBackend::new(80, 15)).unwrap();
        terminal.draw(|f| render(f, &mut app)).unwrap();

        assert_eq!(app.model.ui.selection, Some(2));
        assert_eq!(app.model.ui.list_offset, 2);
    }
}
