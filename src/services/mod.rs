//! Service layer for business logic
//!
//! This module provides unified business logic that can be shared between
//! different interfaces (TUI, CLI).

pub mod shortener;
mod submission;

pub use shortener::{ShortenResult, Shortener, ShortenerProvider};
pub use submission::*;
