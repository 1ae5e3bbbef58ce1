//! IP lookup against the remote lookup and public-IP services.
//!
//! This module provides the `LookupResult` record returned for one IP address and
//! the `LookupClient` that produces it.

mod client;
mod types;

// Re-export public API
pub use client::LookupClient;
pub use types::{Field, LookupResult};
