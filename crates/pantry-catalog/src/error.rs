//! Catalog error types.

use thiserror::Error;

/// Errors that can occur when loading products or categories.
#[derive(Error, Debug)]
pub enum CatalogError {
    /// Failed to send the request.
    #[error("Request failed: {0}")]
    Request(String),

    /// Request timeout.
    #[error("Request timed out: {0}")]
    Timeout(String),

    /// HTTP error response.
    #[error("HTTP {status}: {message}")]
    Http { status: u16, message: String },

    /// The Storefront API answered with GraphQL errors.
    #[error("Storefront API errors: {}", .0.join("; "))]
    Graphql(Vec<String>),

    /// Failed to parse response body.
    #[error("Failed to parse response: {0}")]
    Decode(String),

    /// Missing or invalid settings.
    #[error("Invalid catalog configuration: {0}")]
    Config(String),
}

impl From<serde_json::Error> for CatalogError {
    fn from(e: serde_json::Error) -> Self {
        CatalogError::Decode(e.to_string())
    }
}

impl From<reqwest::Error> for CatalogError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_timeout() {
            CatalogError::Timeout(e.to_string())
        } else if e.is_decode() {
            CatalogError::Decode(e.to_string())
        } else if let Some(status) = e.status() {
            CatalogError::Http {
                status: status.as_u16(),
                message: e.to_string(),
            }
        } else {
            CatalogError::Request(e.to_string())
        }
    }
}
