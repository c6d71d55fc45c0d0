//! Event handling for TUI
//!
//! Handles keyboard events and delegates to appropriate handlers
//!
//! This module is organized by screen type:
//! - main_screen: the shorten form and the session list
//! - misc_screens: Help, Exiting

use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use tokio::sync::mpsc;

use crate::interfaces::tui::app::{App, CurrentScreen};
use crate::interfaces::tui::events::TuiEvent;

mod main_screen;
mod misc_screens;

use main_screen::*;
use misc_screens::*;

/// Handle keyboard input based on current screen
///
/// Returns true when the application should exit.
pub fn handle_key_event(
    app: &mut App,
    key: KeyEvent,
    tx: &mpsc::UnboundedSender<TuiEvent>,
) -> bool {
    // Ctrl+C quits from any screen
    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        return true;
    }

    match app.current_screen {
        CurrentScreen::Main => handle_main_screen(app, key, tx),
        CurrentScreen::Help => handle_help_screen(app, key),
        CurrentScreen::Exiting => handle_exiting_screen(app, key),
    }
}
