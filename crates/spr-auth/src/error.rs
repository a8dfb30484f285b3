//! Error types for sprinklr-auth.
//!
//! Error messages avoid including credential values.

/// Result type alias for sprinklr-auth operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error type for sprinklr-auth operations.
#[derive(Debug, thiserror::Error)]
#[error("{kind}")]
pub struct Error {
    /// The kind of error that occurred.
    pub kind: ErrorKind,
    /// Optional source error.
    #[source]
    pub source: Option<Box<dyn std::error::Error + Send + Sync>>,
}

impl Error {
    /// Create a new error with the given kind.
    pub fn new(kind: ErrorKind) -> Self {
        Self { kind, source: None }
    }

    /// Create a new error with the given kind and source.
    pub fn with_source(
        kind: ErrorKind,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self {
            kind,
            source: Some(Box::new(source)),
        }
    }
}

/// The kind of error that occurred.
#[derive(Debug, thiserror::Error)]
pub enum ErrorKind {
    /// OAuth error response from Sprinklr.
    #[error("OAuth error: {error} - {description}")]
    OAuth { error: String, description: String },

    /// Token endpoint returned a non-success status with an unstructured
    /// body.
    #[error("Token request failed: {status} {body}")]
    TokenRequest { status: u16, body: String },

    /// HTTP error during authentication.
    #[error("HTTP error: {0}")]
    Http(String),

    /// JSON error.
    #[error("JSON error: {0}")]
    Json(String),

    /// Invalid configuration.
    #[error("Configuration error: {0}")]
    Config(String),
}

impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        Error::with_source(ErrorKind::Http(err.to_string()), err)
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::with_source(ErrorKind::Json(err.to_string()), err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_messages() {
        let err = Error::new(ErrorKind::OAuth {
            error: "invalid_grant".into(),
            description: "expired authorization code".into(),
        });
        assert_eq!(
            err.to_string(),
            "OAuth error: invalid_grant - expired authorization code"
        );

        let err = Error::new(ErrorKind::TokenRequest {
            status: 500,
            body: "oops".into(),
        });
        assert_eq!(err.to_string(), "Token request failed: 500 oops");
    }
}
