//! ip_report library: IP address lookup and reporting
//!
//! This library looks up public information about an IP address (geolocation,
//! network owner, timezone) through a remote lookup service, renders it as a
//! console table, and exports it as a static HTML report.
//!
//! # Example
//!
//! ```no_run
//! use ip_report::initialization::init_client;
//! use ip_report::{render_console, Config, LookupClient};
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let config = Config::default();
//! let client = LookupClient::new(init_client(&config)?, &config);
//!
//! let result = client.fetch_lookup("8.8.8.8").await?;
//! print!("{}", render_console(&result));
//! # Ok(())
//! # }
//! ```
//!
//! # Requirements
//!
//! Network calls are async and need a Tokio runtime. Requests are awaited one at
//! a time; the library never has two requests in flight.

#![warn(missing_docs)]

pub mod config;
mod error_handling;
pub mod export;
pub mod initialization;
mod lookup;
mod render;
mod session;

// Re-export public API
pub use config::{Config, LogFormat, LogLevel};
pub use error_handling::{ErrorType, ExportError, InitializationError, LookupError};
pub use export::export_to_html;
pub use lookup::{Field, LookupClient, LookupResult};
pub use render::{map_link, render_console, render_html};
pub use session::{
    is_affirmative, parse_ip_input, run_session, IpInput, SessionReport, SessionState,
};
