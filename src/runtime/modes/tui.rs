//! TUI mode
//!
//! This module contains the TUI (Terminal User Interface) mode startup logic.
//! It delegates to the actual TUI implementation.

use crate::runtime::lifetime;

/// Run TUI mode
///
/// This function:
/// 1. Builds the submission service from configuration
/// 2. Delegates to the actual TUI implementation
pub async fn run_tui() -> Result<(), Box<dyn std::error::Error>> {
    let service = lifetime::startup::build_submission_service();
    crate::interfaces::tui::run_tui(service).await
}
