// UI submodules
mod common;
mod exiting;
mod form;
mod help;
mod link_list;
pub mod widgets;

// Re-export common utilities
pub use common::{draw_footer, draw_status_bar, draw_title_bar};

// Re-export screen drawing functions
pub use exiting::draw_exiting_screen;
pub use form::{draw_form, form_height};
pub use help::draw_help_screen;
pub use link_list::draw_link_list;

use super::app::{App, CurrentScreen};
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout},
};

/// Main UI rendering entry point
pub fn ui(frame: &mut Frame, app: &mut App) {
    let main_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Title
            Constraint::Min(10),   // Main content
            Constraint::Length(3), // Status
            Constraint::Length(2), // Footer
        ])
        .split(frame.area());

    // Enhanced title with version and stats
    draw_title_bar(frame, app, main_chunks[0]);

    // Main content based on current screen
    match app.current_screen {
        CurrentScreen::Main => {
            // Submit form on top, session list below
            let content_chunks = Layout::default()
                .direction(Direction::Vertical)
                .constraints([
                    Constraint::Length(form_height(app)),
                    Constraint::Min(5),
                ])
                .split(main_chunks[1]);

            draw_form(frame, app, content_chunks[0]);
            draw_link_list(frame, app, content_chunks[1]);
        }
        CurrentScreen::Help => draw_help_screen(frame, app, main_chunks[1]),
        CurrentScreen::Exiting => draw_exiting_screen(frame, main_chunks[1]),
    }

    draw_status_bar(frame, app, main_chunks[2]);
    draw_footer(frame, app, main_chunks[3]);
}
