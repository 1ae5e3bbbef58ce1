//! Export of lookup results to report files.
//!
//! Reports are self-contained HTML documents named after the local time of the
//! export, written into the configured output directory.

mod html;

pub use html::{export_to_html, report_file_name};
