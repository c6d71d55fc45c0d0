//! User interfaces
//!
//! Interactive surfaces built on the shared service layer.

#[cfg(feature = "cli")]
pub mod cli;

#[cfg(feature = "tui")]
pub mod tui;
