//! Presentation of a `LookupResult`.
//!
//! Both renderers are pure functions from a `LookupResult` to a `String`; the
//! caller decides where the text goes (terminal or report file).

mod console;
mod html;

// Re-export public API
pub use console::render_console;
pub use html::render_html;

use crate::config::MAPS_BASE_URL;
use crate::lookup::LookupResult;

/// Builds the map link for the result's coordinates.
///
/// Returns `None` unless `loc` splits into exactly two comma-separated parts.
pub fn map_link(result: &LookupResult) -> Option<String> {
    let (lat, lon) = result.coordinates()?;
    Some(format!("{}{},{}", MAPS_BASE_URL, lat, lon))
}
