//! Lookup service client.
//!
//! Issues the two requests the tool needs: the caller's public IP, and the
//! lookup for a given IP address. Requests are awaited one at a time.

use log::debug;
use serde::{Deserialize, Deserializer};
use serde_json::Value;

use super::types::LookupResult;
use crate::config::Config;
use crate::error_handling::LookupError;

/// Message used when the service reports an error without any text.
const UNKNOWN_SERVICE_ERROR: &str = "unknown error";

/// Body of a lookup response: either the result, or an `error` member.
#[derive(Debug, Deserialize)]
struct LookupResponse {
    /// `Some` whenever the key is present, including `"error": null`
    #[serde(default, deserialize_with = "deserialize_present")]
    error: Option<Value>,
    #[serde(flatten)]
    result: LookupResult,
}

/// Keeps a present value as `Some`, even when it is JSON `null`.
fn deserialize_present<'de, D>(deserializer: D) -> Result<Option<Value>, D::Error>
where
    D: Deserializer<'de>,
{
    Value::deserialize(deserializer).map(Some)
}

/// Extracts the message from the `error` member.
///
/// The service normally sends `{"title": .., "message": ..}`; a bare string is
/// accepted as well. Anything else has no usable text.
fn service_error_message(error: &Value) -> String {
    let text = match error {
        Value::String(message) => Some(message.as_str()),
        Value::Object(fields) => fields
            .get("message")
            .and_then(Value::as_str)
            .or_else(|| fields.get("title").and_then(Value::as_str)),
        _ => None,
    };
    text.unwrap_or(UNKNOWN_SERVICE_ERROR).to_string()
}

impl LookupResponse {
    fn into_result(self) -> Result<LookupResult, LookupError> {
        match self.error {
            Some(error) => Err(LookupError::Service {
                message: service_error_message(&error),
            }),
            None => Ok(self.result),
        }
    }
}

/// Client for the lookup and public-IP services.
#[derive(Debug, Clone)]
pub struct LookupClient {
    client: reqwest::Client,
    lookup_url: String,
    public_ip_url: String,
}

impl LookupClient {
    /// Creates a client using the service URLs from `config`.
    pub fn new(client: reqwest::Client, config: &Config) -> Self {
        Self {
            client,
            lookup_url: config.lookup_url.trim_end_matches('/').to_string(),
            public_ip_url: config.public_ip_url.clone(),
        }
    }

    /// Returns the lookup URL for `ip`: `<base>/<ip>/json`.
    ///
    /// The IP string is inserted verbatim; validating it is left to the service.
    pub fn lookup_endpoint(&self, ip: &str) -> String {
        format!("{}/{}/json", self.lookup_url, ip)
    }

    /// Asks the public-IP service for the caller's public address.
    ///
    /// # Errors
    ///
    /// Returns `LookupError::Connection` on transport failure or a non-success
    /// status, and `LookupError::PublicIp` if the body is empty.
    pub async fn resolve_public_ip(&self) -> Result<String, LookupError> {
        debug!("Resolving public IP via {}", self.public_ip_url);
        let body = self
            .client
            .get(&self.public_ip_url)
            .send()
            .await?
            .error_for_status()?
            .text()
            .await?;

        let ip = body.trim();
        if ip.is_empty() {
            return Err(LookupError::PublicIp {
                message: "an empty body".to_string(),
            });
        }
        debug!("Public IP resolved to {}", ip);
        Ok(ip.to_string())
    }

    /// Looks up `ip` on the lookup service.
    ///
    /// The HTTP status is not inspected: the service reports failures (invalid
    /// address, rate limiting) as an `error` object in the JSON body.
    ///
    /// # Errors
    ///
    /// - `LookupError::Service` with the service's message if the body has an
    ///   `error` member
    /// - `LookupError::Connection` on transport failure or a non-JSON body
    pub async fn fetch_lookup(&self, ip: &str) -> Result<LookupResult, LookupError> {
        let url = self.lookup_endpoint(ip);
        debug!("Fetching lookup from {}", url);
        let response = self.client.get(&url).send().await?;
        debug!("Lookup response status: {}", response.status());
        let body: LookupResponse = response.json().await?;
        body.into_result()
    }
}
