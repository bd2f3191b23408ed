//! Catalog errors.

use serde::Deserialize;
use serde_json::Value;
use thiserror::Error;

/// Message shown when a failure carries no backend detail.
pub const FALLBACK_ERROR_MESSAGE: &str = "Something went wrong";

/// Errors that can occur when talking to the storefront backend.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// The configured backend URL could not be parsed.
    #[error("invalid backend url {url}: {reason}")]
    InvalidBaseUrl {
        /// Configured URL
        url: String,

        /// Parser message
        reason: String,
    },

    /// An HTTP transport or deserialization error occurred.
    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),

    /// The backend answered with a non-2xx status.
    #[error("backend responded with status {status}")]
    Backend {
        /// HTTP status code
        status: u16,

        /// `detail` field of the response body, when present
        detail: Option<String>,
    },
}

impl CatalogError {
    /// Human-readable message for display: the backend `detail`, or a generic fallback.
    pub fn user_message(&self) -> String {
        match self {
            CatalogError::Backend {
                detail: Some(detail),
                ..
            } => detail.clone(),
            CatalogError::Backend { detail: None, .. }
            | CatalogError::Http(_)
            | CatalogError::InvalidBaseUrl { .. } => FALLBACK_ERROR_MESSAGE.to_string(),
        }
    }
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    #[serde(default)]
    detail: Option<Value>,
}

/// Extract a non-empty string `detail` field from an error response body.
pub(crate) fn error_detail(body: &str) -> Option<String> {
    let body: ErrorBody = serde_json::from_str(body).ok()?;

    match body.detail? {
        Value::String(detail) if !detail.trim().is_empty() => Some(detail),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detail_string_is_extracted() {
        assert_eq!(
            error_detail(r#"{ "detail": "Product not found" }"#).as_deref(),
            Some("Product not found")
        );
    }

    #[test]
    fn structured_detail_is_ignored() {
        assert_eq!(
            error_detail(r#"{ "detail": [{ "loc": ["query", "q"], "msg": "field required" }] }"#),
            None
        );
    }

    #[test]
    fn blank_or_missing_detail_is_ignored() {
        assert_eq!(error_detail(r#"{ "detail": "  " }"#), None);
        assert_eq!(error_detail(r#"{ "message": "nope" }"#), None);
        assert_eq!(error_detail("<html>Bad Gateway</html>"), None);
        assert_eq!(error_detail(""), None);
    }

    #[test]
    fn user_message_prefers_backend_detail() {
        let error = CatalogError::Backend {
            status: 404,
            detail: Some("No products match".to_string()),
        };

        assert_eq!(error.user_message(), "No products match");
    }

    #[test]
    fn user_message_falls_back_without_detail() {
        let backend = CatalogError::Backend {
            status: 500,
            detail: None,
        };
        let url = CatalogError::InvalidBaseUrl {
            url: "nope".to_string(),
            reason: "relative URL without a base".to_string(),
        };

        assert_eq!(backend.user_message(), "Something went wrong");
        assert_eq!(url.user_message(), "Something went wrong");
    }
}
