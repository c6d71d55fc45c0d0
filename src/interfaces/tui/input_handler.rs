//! Input handling utilities
//!
//! Provides unified input handling for the form's text fields

use super::app::{App, Focus};

/// Handle text character input
pub fn handle_text_input(app: &mut App, c: char) {
    match app.focus {
        Focus::UrlField => {
            app.form.url.push(c);
            // URL keystrokes clear the displayed error
            app.flow.input_edited();
        }
        Focus::AliasField => app.form.alias.push(c),
        Focus::LinkList => {}
    }
}

/// Handle backspace input
pub fn handle_backspace(app: &mut App) {
    match app.focus {
        Focus::UrlField => {
            app.form.url.pop();
            app.flow.input_edited();
        }
        Focus::AliasField => {
            app.form.alias.pop();
        }
        Focus::LinkList => {}
    }
}

/// Handle tab key for focus navigation
pub fn handle_tab_navigation(app: &mut App) {
    app.cycle_focus();
}
