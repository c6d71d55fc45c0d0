//! Application runtime
//!
//! Lifecycle helpers and execution mode routing.

pub mod lifetime;
pub mod modes;
