//! Error types for Paack API calls

use std::fmt;

use serde::Deserialize;
use thiserror::Error;

/// Server-supplied detail attached to a failed call.
///
/// The platform reports failures as a small JSON document; `message` is the
/// only field it guarantees. `raw` preserves the body exactly as received so
/// callers can log or inspect fields this type does not model.
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
pub struct ErrorDetail {
    /// Human-readable message returned by the platform.
    #[serde(default)]
    pub message: Option<String>,

    /// Raw response body as received.
    #[serde(skip)]
    pub raw: String,
}

impl ErrorDetail {
    /// Parse the detail document out of a failed response body.
    ///
    /// # Errors
    /// Returns the serde error when the body is not a JSON object.
    pub fn from_body(body: &[u8]) -> Result<Self, serde_json::Error> {
        let mut detail: Self = serde_json::from_slice(body)?;
        detail.raw = String::from_utf8_lossy(body).into_owned();
        Ok(detail)
    }
}

impl fmt::Display for ErrorDetail {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.message {
            Some(message) => write!(f, "{message}"),
            None => write!(f, "{}", self.raw),
        }
    }
}

/// Classified failure of a Paack API call.
///
/// Every variant produced from an HTTP response carries the server's body;
/// `Transport` and `Decode` carry the rendered underlying cause instead.
#[derive(Debug, Error)]
pub enum ApiError {
    /// HTTP 400: the platform rejected the payload.
    #[error("bad request: {0}")]
    BadRequest(ErrorDetail),

    /// HTTP 403: authenticated but not allowed.
    #[error("forbidden: {0}")]
    Forbidden(ErrorDetail),

    /// HTTP 404: no such resource.
    #[error("not found: {0}")]
    NotFound(ErrorDetail),

    /// Two consecutive 401s: re-authentication did not help.
    #[error("unauthorized after re-authentication: {0}")]
    UnauthorizedAfterRetry(ErrorDetail),

    /// Connection, DNS, TLS, or timeout failure below the HTTP layer.
    #[error("transport error: {0}")]
    Transport(String),

    /// A request or response body could not be encoded or decoded.
    #[error("decode error: {0}")]
    Decode(String),

    /// Any other non-2xx status.
    #[error("unexpected status {status}: {detail}")]
    Undefined {
        /// HTTP status code as received.
        status: u16,
        /// Parsed server detail.
        detail: ErrorDetail,
    },
}

impl ApiError {
    /// Raw response body carried by this error, when one was available.
    pub fn raw_body(&self) -> Option<&str> {
        match self {
            Self::BadRequest(d)
            | Self::Forbidden(d)
            | Self::NotFound(d)
            | Self::UnauthorizedAfterRetry(d)
            | Self::Undefined { detail: d, .. } => Some(d.raw.as_str()),
            Self::Transport(_) | Self::Decode(_) => None,
        }
    }

    /// Server-provided message, when the platform supplied one.
    pub fn message(&self) -> Option<&str> {
        match self {
            Self::BadRequest(d)
            | Self::Forbidden(d)
            | Self::NotFound(d)
            | Self::UnauthorizedAfterRetry(d)
            | Self::Undefined { detail: d, .. } => d.message.as_deref(),
            Self::Transport(_) | Self::Decode(_) => None,
        }
    }
}

/// Result alias for Paack API operations
pub type ApiResult<T> = std::result::Result<T, ApiError>;
