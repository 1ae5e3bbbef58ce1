//! Application configuration and constants.
//!
//! This module provides:
//! - Service endpoints and report naming constants
//! - CLI option types and parsing

mod constants;
mod types;

// Re-export all constants
pub use constants::*;
pub use types::{Config, LogFormat, LogLevel};
