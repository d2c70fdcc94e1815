//! HTTP timeline fetching.

use reqwest::blocking::Client;
use reqwest::StatusCode;
use std::time::Duration;

use crate::config::TimelineConfig;
use crate::error::{Result, TimelineError};
use crate::identity::{Credentials, Identity};

/// Placeholder substituted with the identity in endpoint templates.
pub const IDENTITY_PLACEHOLDER: &str = "{identity}";

/// Outcome category of a fetch attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Classification {
    /// 200 OK.
    Success,
    /// 401, credentials missing or rejected.
    Unauthorized,
    /// 404, no such identity.
    NotFound,
    /// Any other status, or the request never completed.
    Unavailable,
}

impl Classification {
    /// Classify an HTTP status code.
    pub fn from_status(status: u16) -> Self {
        match StatusCode::from_u16(status) {
            Ok(StatusCode::OK) => Classification::Success,
            Ok(StatusCode::UNAUTHORIZED) => Classification::Unauthorized,
            Ok(StatusCode::NOT_FOUND) => Classification::NotFound,
            _ => Classification::Unavailable,
        }
    }
}

/// Raw result of one fetch.
#[derive(Debug, Clone)]
pub struct FetchResponse {
    /// Response body, unmodified.
    pub body: Vec<u8>,
    /// Outcome category.
    pub classification: Classification,
    /// HTTP status, if a response arrived.
    pub status: Option<u16>,
    /// Transport error text, if the request failed.
    pub detail: Option<String>,
}

impl FetchResponse {
    /// A response that arrived with `status`.
    pub fn from_status(status: u16, body: impl Into<Vec<u8>>) -> Self {
        Self {
            body: body.into(),
            classification: Classification::from_status(status),
            status: Some(status),
            detail: None,
        }
    }

    /// A request that failed before a usable response arrived.
    pub fn transport_failure(detail: impl Into<String>) -> Self {
        Self {
            body: Vec::new(),
            classification: Classification::Unavailable,
            status: None,
            detail: Some(detail.into()),
        }
    }

    /// Human-readable reason for an unavailable outcome.
    pub fn reason(&self) -> String {
        match (&self.detail, self.status) {
            (Some(detail), _) => detail.clone(),
            (None, Some(status)) => format!("HTTP {}", status),
            (None, None) => "no response".to_string(),
        }
    }
}

/// Something that can fetch a raw timeline for an identity.
pub trait Fetch: Send + Sync {
    /// Issue one request. Never retries.
    fn fetch(&self, identity: &Identity, credentials: Option<&Credentials>) -> FetchResponse;
}

/// Build the request URL for `identity`.
///
/// `{identity}` in the template is replaced; otherwise the identity is
/// appended. The identity is percent-encoded either way.
pub fn resolve_url(template: &str, identity: &Identity) -> String {
    let encoded = urlencoding::encode(identity.as_str());
    if template.contains(IDENTITY_PLACEHOLDER) {
        template.replace(IDENTITY_PLACEHOLDER, &encoded)
    } else {
        format!("{}{}", template, encoded)
    }
}

/// Fetches timelines over HTTP/HTTPS.
pub struct HttpFetcher {
    client: Client,
    endpoint: String,
    timeout: Duration,
}

impl HttpFetcher {
    /// Create a fetcher for `endpoint` with the given timeout and user agent.
    pub fn new(endpoint: impl Into<String>, timeout: Duration, user_agent: &str) -> Result<Self> {
        let client = Client::builder()
            .user_agent(user_agent)
            .timeout(timeout)
            .build()
            .map_err(|e| TimelineError::Other(anyhow::anyhow!("Failed to build HTTP client: {}", e)))?;

        Ok(Self {
            client,
            endpoint: endpoint.into(),
            timeout,
        })
    }

    /// Create a fetcher from configuration.
    pub fn from_config(config: &TimelineConfig) -> Result<Self> {
        Self::new(
            config.endpoint.clone(),
            config.request_timeout(),
            &config.user_agent,
        )
    }

    /// Get the endpoint template.
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Get the configured timeout.
    pub fn timeout(&self) -> Duration {
        self.timeout
    }
}

impl Fetch for HttpFetcher {
    fn fetch(&self, identity: &Identity, credentials: Option<&Credentials>) -> FetchResponse {
        let url = resolve_url(&self.endpoint, identity);
        tracing::info!("Fetching timeline for '{}' from {}", identity, url);

        let mut request = self.client.get(&url);
        if let Some(credentials) = credentials {
            request = request.basic_auth(credentials.username(), Some(credentials.password()));
        }

        let response = match request.send() {
            Ok(response) => response,
            Err(e) => return FetchResponse::transport_failure(e.to_string()),
        };

        let status = response.status().as_u16();
        match response.bytes() {
            Ok(body) => FetchResponse::from_status(status, body.to_vec()),
            Err(e) => FetchResponse::transport_failure(format!(
                "HTTP {}: failed to read response body: {}",
                status, e
            )),
        }
    }
}
