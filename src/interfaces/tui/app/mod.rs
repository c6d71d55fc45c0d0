//! TUI application state and operations

mod navigation;
mod operations;
mod state;

pub use state::{App, CurrentScreen, Focus, FormState};
