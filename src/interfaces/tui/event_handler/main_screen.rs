//! Event handlers for the main screen
//!
//! The main screen hosts the shorten form and the session list;
//! which half reacts to a key depends on the current focus.

use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use tokio::sync::mpsc;

use crate::interfaces::tui::app::{App, CurrentScreen, Focus};
use crate::interfaces::tui::events::TuiEvent;
use crate::interfaces::tui::input_handler::{
    handle_backspace, handle_tab_navigation, handle_text_input,
};

/// Handle main screen input
pub fn handle_main_screen(
    app: &mut App,
    key: KeyEvent,
    tx: &mpsc::UnboundedSender<TuiEvent>,
) -> bool {
    // Ctrl+O toggles the alias field regardless of focus
    if key.code == KeyCode::Char('o') && key.modifiers.contains(KeyModifiers::CONTROL) {
        app.toggle_alias_field();
        return false;
    }

    if app.is_editing() {
        handle_form_input(app, key, tx)
    } else {
        handle_list_input(app, key, tx)
    }
}

/// Keys while a form field has focus
fn handle_form_input(app: &mut App, key: KeyEvent, tx: &mpsc::UnboundedSender<TuiEvent>) -> bool {
    match key.code {
        KeyCode::Enter => app.submit(tx),
        KeyCode::Tab => handle_tab_navigation(app),
        KeyCode::Backspace => handle_backspace(app),
        KeyCode::Down => {
            if !app.session.is_empty() {
                app.focus = Focus::LinkList;
            }
        }
        KeyCode::Esc => {
            // First Esc clears the form, second one asks to quit
            if app.form.is_empty() {
                app.current_screen = CurrentScreen::Exiting;
            } else {
                app.form.clear();
                app.flow.input_edited();
            }
        }
        KeyCode::Char(c) => handle_text_input(app, c),
        _ => {}
    }
    false
}

/// Keys while the session list has focus
fn handle_list_input(app: &mut App, key: KeyEvent, tx: &mpsc::UnboundedSender<TuiEvent>) -> bool {
    match key.code {
        KeyCode::Up | KeyCode::Char('k') | KeyCode::Char('K') => app.move_selection_up(),
        KeyCode::Down | KeyCode::Char('j') | KeyCode::Char('J') => app.move_selection_down(),
        KeyCode::Home | KeyCode::Char('g') => app.jump_to_top(),
        KeyCode::End | KeyCode::Char('G') => app.jump_to_bottom(),
        // Open in browser (remote backend only)
        KeyCode::Enter | KeyCode::Char('o') | KeyCode::Char('O') => app.visit_selected(),
        KeyCode::Char('c') | KeyCode::Char('y') => app.copy_selected(tx),
        KeyCode::Char('d') | KeyCode::Char('D') => app.delete_selected(),
        KeyCode::Char('x') | KeyCode::Char('X') => app.clear_all(),
        KeyCode::Tab | KeyCode::Char('i') => handle_tab_navigation(app),
        KeyCode::Char('?') | KeyCode::Char('h') | KeyCode::Char('H') => {
            app.current_screen = CurrentScreen::Help;
        }
        KeyCode::Char('q') | KeyCode::Char('Q') => {
            app.current_screen = CurrentScreen::Exiting;
        }
        KeyCode::Esc => app.focus = Focus::UrlField,
        _ => {}
    }
    false
}
