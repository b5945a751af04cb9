//! Unified error type definition

use serde::Serialize;
use thiserror::Error;

/// Error raised while querying a DoH resolver.
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "code", content = "details")]
pub enum QueryError {
    /// The resolver answered with a non-success HTTP status.
    #[error("Error response from resolver: {0}")]
    HttpStatus(u16),

    /// The request never produced a response (DNS, TLS, connection reset ...).
    #[error("Network error: {0}")]
    NetworkError(String),

    /// The response body was not a DNS JSON document.
    #[error("Invalid response from resolver: {0}")]
    ParseError(String),

    /// The resolver endpoint is not a valid URL.
    #[error("Invalid resolver URL: {0}")]
    InvalidUrl(String),
}

/// Query Result type alias
pub type QueryResult<T> = std::result::Result<T, QueryError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn http_status_message_contains_code() {
        assert_eq!(
            QueryError::HttpStatus(500).to_string(),
            "Error response from resolver: 500"
        );
    }

    #[test]
    fn serializes_with_code_tag() {
        let json = serde_json::to_value(QueryError::HttpStatus(404)).unwrap_or_default();
        assert_eq!(json["code"], "HttpStatus");
        assert_eq!(json["details"], 404);
    }
}
