//! CLI mode
//!
//! This module contains the CLI mode startup logic.
//! It delegates to the actual CLI implementation.

use crate::interfaces::cli::CliError;
use crate::runtime::lifetime;

/// Run CLI mode
///
/// This function:
/// 1. Builds the submission service from configuration
/// 2. Delegates to the actual CLI implementation
pub async fn run_cli() -> Result<(), CliError> {
    let service = lifetime::startup::build_submission_service();
    crate::interfaces::cli::run_cli(service).await
}
