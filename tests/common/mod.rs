// Shared test helpers for mock services and scripted sessions.
//
// This module provides common utilities used across multiple test files to reduce duplication.

use std::io::Cursor;
use std::path::Path;

use ip_report::{run_session, Config, LookupClient, SessionReport};
use wiremock::MockServer;

/// Creates a lookup client whose lookup and public-IP URLs point at `server`.
/// The public-IP service is served from `/public-ip`.
pub fn client_for(server: &MockServer) -> LookupClient {
    let config = Config {
        lookup_url: server.uri(),
        public_ip_url: format!("{}/public-ip", server.uri()),
        timeout_seconds: Some(5),
        ..Default::default()
    };
    let http = reqwest::Client::builder()
        .timeout(std::time::Duration::from_secs(5))
        .build()
        .expect("Failed to build test HTTP client");
    LookupClient::new(http, &config)
}

/// A full lookup response body.
#[allow(dead_code)] // Used by other test files
pub fn google_dns_body() -> serde_json::Value {
    serde_json::json!({
        "ip": "8.8.8.8",
        "hostname": "dns.google",
        "city": "Mountain View",
        "region": "California",
        "country": "US",
        "loc": "37.4056,-122.0775",
        "org": "AS15169 Google LLC",
        "postal": "94043",
        "timezone": "America/Los_Angeles"
    })
}

/// Runs a session over scripted `answers` and returns the report and transcript.
#[allow(dead_code)] // Used by other test files
pub async fn run_scripted(
    client: &LookupClient,
    output_dir: &Path,
    answers: &str,
) -> (SessionReport, String) {
    let mut output = Vec::new();
    let report = run_session(client, output_dir, Cursor::new(answers.as_bytes()), &mut output)
        .await
        .expect("Session should not fail on in-memory I/O");
    let transcript = String::from_utf8(output).expect("Transcript should be UTF-8");
    (report, transcript)
}
