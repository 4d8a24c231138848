//! I/O boundary traits for testability
//!
//! The network call is abstracted behind `HttpClient`, allowing services
//! to be tested with mock implementations.

use std::io;
use std::time::Duration;

use tracing::debug;

use crate::config::Settings;
use crate::infrastructure::{InfraError, InfraResult};

/// Status and body of a completed HTTP exchange.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u16,
    pub body: String,
}

impl HttpResponse {
    /// True for any 2xx status.
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// HTTP abstraction for testability.
///
/// Transport failures (DNS, TLS, timeouts, unreadable body) are reported as
/// `io::Error`; a response with a non-success status is still `Ok`.
pub trait HttpClient: Send + Sync {
    /// Issue a GET request expecting a JSON body.
    fn get(&self, url: &str) -> io::Result<HttpResponse>;
}

/// Real HTTP client backed by `reqwest::blocking`.
pub struct RealHttpClient {
    client: reqwest::blocking::Client,
}

impl RealHttpClient {
    /// Build a client honouring the configured timeout and user agent.
    pub fn new(settings: &Settings) -> InfraResult<Self> {
        let client = reqwest::blocking::Client::builder()
            .timeout(Duration::from_secs(settings.timeout_secs))
            .user_agent(settings.user_agent.clone())
            .build()
            .map_err(|e| InfraError::Http {
                message: format!("build client: {e}"),
            })?;
        Ok(Self { client })
    }
}

impl HttpClient for RealHttpClient {
    fn get(&self, url: &str) -> io::Result<HttpResponse> {
        debug!("GET {}", url);
        let response = self
            .client
            .get(url)
            .header(reqwest::header::ACCEPT, "application/json")
            .send()
            .map_err(io::Error::other)?;

        let status = response.status().as_u16();
        let body = response.text().map_err(io::Error::other)?;
        debug!("GET {} -> {} ({} bytes)", url, status, body.len());

        Ok(HttpResponse { status, body })
    }
}
