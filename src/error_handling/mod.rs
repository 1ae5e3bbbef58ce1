//! Error handling.
//!
//! This module provides the error types used throughout the application:
//! - **Initialization errors**: logger or HTTP client setup failed (fatal)
//! - **Lookup errors**: the lookup or public-IP service could not produce a result
//! - **Export errors**: an HTML report could not be written
//!
//! Lookup and export errors only abandon the current iteration of the interactive
//! loop; they are reported to the user and the loop carries on.

mod categorization;
mod types;

// Re-export public API
pub use types::{ErrorType, ExportError, InitializationError, LookupError};
