//! Error categorization.
//!
//! This module turns transport errors into the short descriptions shown to the user.

/// Describes a `reqwest::Error` in user-facing terms.
///
/// The description leads with the failure category (timeout, connect, decode, ...)
/// and keeps the underlying error text so the cause is still visible.
///
/// # Arguments
///
/// * `error` - The `reqwest::Error` to describe
///
/// # Returns
///
/// A one-line description of the failure.
pub fn describe_reqwest_error(error: &reqwest::Error) -> String {
    let category = if error.is_builder() {
        "invalid request"
    } else if error.is_timeout() {
        "request timed out"
    } else if error.is_connect() {
        "could not connect"
    } else if error.is_redirect() {
        "too many redirects"
    } else if error.is_body() {
        "failed to read response body"
    } else if error.is_decode() {
        "unexpected response format"
    } else if error.is_status() {
        "unexpected HTTP status"
    } else {
        "request failed"
    };

    match error.url() {
        Some(url) => format!("{} ({}): {}", category, url, error),
        None => format!("{}: {}", category, error),
    }
}
