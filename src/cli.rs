//! Command-line interface definitions using clap
//!
//! This module defines the CLI structure for linksnip using clap's derive macros.

use clap::{Parser, Subcommand};

/// Linksnip - shorten URLs from your terminal
#[derive(Parser)]
#[command(name = "linksnip")]
#[command(version)]
#[command(about = "Shorten URLs from your terminal", long_about = None)]
pub struct Cli {
    /// Path to the configuration file
    #[arg(long, short = 'c', global = true)]
    pub config: Option<String>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands
#[derive(Subcommand)]
pub enum Commands {
    /// Start TUI mode
    #[cfg(feature = "tui")]
    Tui,

    /// Shorten a URL
    ///
    /// Bare domains are accepted; "https://" is prepended automatically.
    Shorten {
        /// The URL to shorten
        url: String,

        /// Custom alias for the short code (local backend only)
        #[arg(long)]
        alias: Option<String>,

        /// Print the created record as JSON
        #[arg(long)]
        json: bool,
    },

    /// Manage configuration
    Config {
        #[command(subcommand)]
        action: ConfigCommands,
    },
}

/// Configuration management commands
#[derive(Subcommand)]
pub enum ConfigCommands {
    /// Generate example configuration file
    Generate {
        /// Output path (default: config.example.toml)
        output_path: Option<String>,

        /// Force overwrite without confirmation
        #[arg(long)]
        force: bool,
    },

    /// Show the active configuration
    Show {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
}
