//! Keyboard Input Handler
//!
//! Handles all keyboard input. Keys are dispatched in three layers:
//! search typing first, then the open overlay, then the closed screen.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::App;

/// Handle keyboard input
pub fn handle_key(app: &mut App, key: KeyEvent) {
    // Windows terminals also report releases
    if key.kind != KeyEventKind::Press {
        return;
    }

    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        app.model.ui.should_quit = true;
        return;
    }

    if !app.model.ui.overlay_open {
        handle_closed_key(app, key);
    } else if app.model.ui.search_mode {
        handle_search_key(app, key);
    } else {
        handle_overlay_key(app, key);
    }
}

/// Summary screen with the overlay hidden
fn handle_closed_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Char('f') | KeyCode::Enter => app.open_overlay(),
        KeyCode::Char('x') => app.clear_filters(),
        KeyCode::Char('r') => app.request_catalog_refresh(true),
        KeyCode::Char('q') | KeyCode::Esc => app.model.ui.should_quit = true,
        _ => {}
    }
}

/// Typing into the search box
fn handle_search_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Esc => {
            // Cancel: drop the term and stop typing
            app.model.ui.search_mode = false;
            app.set_search_term(String::new());
        }
        KeyCode::Enter => {
            // Accept: keep the term, keys navigate again
            app.model.ui.search_mode = false;
        }
        KeyCode::Backspace => app.pop_search_char(),
        KeyCode::Up => app.select_previous(),
        KeyCode::Down => app.select_next(),
        KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
            app.push_search_char(c);
        }
        _ => {}
    }
}

fn handle_overlay_key(app: &mut App, key: KeyEvent) {
    let vim_mode = app.model.ui.vim_mode;
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

    match key.code {
        KeyCode::Char('f') if ctrl => app.model.ui.search_mode = true,
        KeyCode::Char('/') if vim_mode => app.model.ui.search_mode = true,
        KeyCode::Up => app.select_previous(),
        KeyCode::Down => app.select_next(),
        KeyCode::Char('k') if vim_mode => app.select_previous(),
        KeyCode::Char('j') if vim_mode => app.select_next(),
        KeyCode::Enter | KeyCode::Right => app.activate_selected(),
        KeyCode::Char('l') if vim_mode => app.activate_selected(),
        KeyCode::Esc => {
            // An accepted search is cleared before Esc navigates
            if app.model.navigation.search_term.is_empty() {
                app.go_back();
            } else {
                app.set_search_term(String::new());
            }
        }
        KeyCode::Backspace | KeyCode::Left => app.go_back(),
        KeyCode::Char('h') if vim_mode => app.go_back(),
        KeyCode::Char('x') => app.clear_filters(),
        KeyCode::Char('r') => app.request_catalog_refresh(true),
        KeyCode::Char('q') => app.close_overlay(),
        _ => {}
    }
}
