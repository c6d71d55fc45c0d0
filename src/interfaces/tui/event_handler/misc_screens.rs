//! Event handlers for overlay screens
//!
//! Handles: Help, Exiting

use ratatui::crossterm::event::{KeyCode, KeyEvent};

use crate::interfaces::tui::app::{App, CurrentScreen};

/// Handle help screen input
pub fn handle_help_screen(app: &mut App, key: KeyEvent) -> bool {
    match key.code {
        KeyCode::Esc | KeyCode::Char('q') | KeyCode::Char('?') => {
            app.current_screen = CurrentScreen::Main;
        }
        _ => {}
    }
    false
}

/// Handle exit confirmation screen input
pub fn handle_exiting_screen(app: &mut App, key: KeyEvent) -> bool {
    match key.code {
        KeyCode::Char('y') | KeyCode::Char('Y') | KeyCode::Enter => return true,
        KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => {
            app.current_screen = CurrentScreen::Main;
        }
        _ => {}
    }
    false
}
