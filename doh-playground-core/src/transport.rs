//! HTTP transport for DoH JSON requests.
//!
//! The pipeline only needs "GET this URL, give me the status and body", so the
//! HTTP client sits behind [`DohTransport`]. [`ReqwestTransport`] is the real
//! implementation; tests plug in an in-memory one.

use async_trait::async_trait;
use reqwest::header::ACCEPT;
use reqwest::Client;
use url::Url;

use crate::error::{QueryError, QueryResult};

/// Media type of the JSON DNS API.
pub const DNS_JSON: &str = "application/dns-json";

/// Maximum number of bytes of a response body written to the log.
const LOG_TRUNCATE_LIMIT: usize = 256;

/// Raw HTTP reply: status code and body text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpReply {
    pub status: u16,
    pub body: String,
}

impl HttpReply {
    /// Whether the status is in the 2xx range.
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Issues GET requests against a DoH resolver.
#[async_trait]
pub trait DohTransport: Send + Sync {
    /// GET `url` with `accept: application/dns-json`.
    ///
    /// Only failures to obtain a response are errors; any HTTP status is
    /// returned as-is.
    async fn get(&self, url: Url) -> QueryResult<HttpReply>;
}

/// [`DohTransport`] backed by a shared `reqwest` client.
#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    client: Client,
}

impl ReqwestTransport {
    /// Build a transport with its own connection pool.
    pub fn new() -> QueryResult<Self> {
        let client = Client::builder()
            .user_agent(concat!("doh-playground/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| QueryError::NetworkError(format!("Failed to build HTTP client: {e}")))?;
        Ok(Self { client })
    }

    /// Reuse an existing client.
    pub fn with_client(client: Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl DohTransport for ReqwestTransport {
    async fn get(&self, url: Url) -> QueryResult<HttpReply> {
        log::debug!("GET {url}");

        let response = self
            .client
            .get(url)
            .header(ACCEPT, DNS_JSON)
            .send()
            .await
            .map_err(|e| QueryError::NetworkError(e.to_string()))?;

        let status = response.status().as_u16();
        let body = response
            .text()
            .await
            .map_err(|e| QueryError::NetworkError(format!("Failed to read response body: {e}")))?;

        log::debug!("Response Status: {status}, Body: {}", truncate_for_log(&body));

        Ok(HttpReply { status, body })
    }
}

/// Shorten a response body for logging, on a char boundary.
pub(crate) fn truncate_for_log(s: &str) -> String {
    if s.len() <= LOG_TRUNCATE_LIMIT {
        return s.to_string();
    }
    let mut end = LOG_TRUNCATE_LIMIT;
    while !s.is_char_boundary(end) {
        end -= 1;
    }
    format!("{}... [truncated, total {} bytes]", &s[..end], s.len())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_success_range() {
        let reply = |status| HttpReply {
            status,
            body: String::new(),
        };
        assert!(reply(200).is_success());
        assert!(reply(204).is_success());
        assert!(!reply(301).is_success());
        assert!(!reply(500).is_success());
    }

    #[test]
    fn test_short_body_unchanged() {
        assert_eq!(truncate_for_log("{\"Status\":0}"), "{\"Status\":0}");
    }

    #[test]
    fn test_long_body_truncated_on_char_boundary() {
        let body = "é".repeat(LOG_TRUNCATE_LIMIT);
        let out = truncate_for_log(&body);
        assert!(out.contains("[truncated, total 512 bytes]"));
    }

    #[test]
    fn test_reqwest_transport_builds() {
        assert!(ReqwestTransport::new().is_ok());
    }
}
