//! Linksnip - a session-scoped URL shortener for the terminal
//!
//! This library provides the core functionality for linksnip: URL
//! validation and normalization, pluggable shortening backends, and the
//! in-memory session list shared by the interactive interfaces.
//!
//! # Features
//! - **tui**: Terminal user interface (default)
//! - **cli**: One-shot command-line interface (default)
//!
//! # Architecture
//! - `cli`: clap command definitions
//! - `config`: Configuration management
//! - `services`: Submission flow and shortening backends
//! - `session`: Session-scoped link list and copied marker
//! - `interfaces`: User interfaces (CLI, TUI)
//! - `runtime`: Application lifecycle and execution modes
//! - `system`: Logging, clipboard and browser helpers
//! - `utils`: URL and alias validation

pub mod cli;
pub mod config;
pub mod errors;
pub mod interfaces;
pub mod runtime;
pub mod services;
pub mod session;
pub mod system;
pub mod utils;
