//! Configuration management CLI commands
//!
//! Provides commands to generate and inspect the static configuration file.

mod config_gen;
mod show;

pub use config_gen::config_generate;
pub use show::config_show;
