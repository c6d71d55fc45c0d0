//! CLI command implementations
//!
//! This module re-exports all CLI command functions.

pub mod config_management;
mod shorten;

pub use shorten::*;
