//! Configuration constants.
//!
//! This module defines the service endpoints, placeholders and report naming
//! conventions used throughout the application.

/// Default base URL of the IP lookup service.
///
/// Lookups are issued as `GET <base>/<ip>/json`.
pub const DEFAULT_LOOKUP_URL: &str = "https://ipinfo.io";

/// Default URL of the public-IP service (plain-text body).
pub const DEFAULT_PUBLIC_IP_URL: &str = "https://api.ipify.org";

/// Default User-Agent string for HTTP requests.
pub const DEFAULT_USER_AGENT: &str = concat!("ip_report/", env!("CARGO_PKG_VERSION"));

/// Default directory for exported HTML reports (current working directory).
pub const DEFAULT_OUTPUT_DIR: &str = ".";

/// Value displayed for fields the lookup service did not return.
pub const PLACEHOLDER: &str = "N/A";

/// Base URL of the map link derived from a `loc` field.
pub const MAPS_BASE_URL: &str = "https://www.google.com/maps?q=";

// Report file naming
/// Prefix of exported HTML report files
pub const REPORT_FILE_PREFIX: &str = "ip_report_";
/// Extension of exported HTML report files
pub const REPORT_FILE_EXTENSION: &str = "html";
/// `chrono` format of the timestamp embedded in report filenames
pub const REPORT_TIMESTAMP_FORMAT: &str = "%Y%m%d_%H%M%S";
/// `chrono` format of the "Generated on" line inside the report
pub const REPORT_GENERATED_FORMAT: &str = "%Y-%m-%d %H:%M:%S";
/// Upper bound on `_N` suffixes tried when a report filename is taken
pub const MAX_REPORT_SUFFIX: u32 = 999;
