//! CLI interface module
//!
//! This module provides command-line interface functionality for linksnip.

pub mod commands;

use std::fmt;

use clap::Parser;

use crate::cli::{Cli, Commands, ConfigCommands};
use crate::services::SubmissionService;
use commands::{config_management, shorten_link};

#[derive(Debug)]
pub enum CliError {
    SubmissionError(String),
    CommandError(String),
}

impl CliError {
    /// Format as simple output
    pub fn format_simple(&self) -> String {
        match self {
            CliError::SubmissionError(msg) => format!("Submission error: {}", msg),
            CliError::CommandError(msg) => format!("Command error: {}", msg),
        }
    }

    /// Format as colored output
    pub fn format_colored(&self) -> String {
        use colored::Colorize;
        match self {
            CliError::SubmissionError(msg) => {
                format!("{} {}", "Submission error:".red().bold(), msg.white())
            }
            CliError::CommandError(msg) => {
                format!("{} {}", "Command error:".red().bold(), msg.white())
            }
        }
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.format_simple())
    }
}

impl std::error::Error for CliError {}

impl From<crate::errors::LinksnipError> for CliError {
    fn from(err: crate::errors::LinksnipError) -> Self {
        CliError::SubmissionError(err.to_string())
    }
}

/// Parse the command line and run the requested command
pub async fn run_cli(service: SubmissionService) -> Result<(), CliError> {
    let cli = Cli::parse();

    match cli.command {
        Some(command) => run_cli_command(service, command).await,
        None => {
            use clap::CommandFactory;
            Cli::command()
                .print_help()
                .map_err(|e| CliError::CommandError(e.to_string()))?;
            Ok(())
        }
    }
}

/// Run a CLI command from clap-parsed input
pub async fn run_cli_command(service: SubmissionService, cmd: Commands) -> Result<(), CliError> {
    match cmd {
        Commands::Shorten { url, alias, json } => shorten_link(&service, url, alias, json).await,

        Commands::Config { action } => match action {
            ConfigCommands::Generate { output_path, force } => {
                config_management::config_generate(output_path, force).await
            }
            ConfigCommands::Show { json } => config_management::config_show(json).await,
        },

        #[cfg(feature = "tui")]
        Commands::Tui => unreachable!("TUI handled in main"),
    }
}
