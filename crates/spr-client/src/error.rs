//! Error types for sprinklr-client.
//!
//! No public operation in this workspace panics or throws past the caller:
//! every failure is a value. Callers branch on the returned `Result` the way
//! the Sprinklr API docs suggest branching on a success flag.

/// Result type alias for sprinklr-client operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Synthetic status code reported for failures that never reached HTTP.
pub const TRANSPORT_STATUS: i32 = -1;

/// Error type for sprinklr-client operations.
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

    /// The status code associated with this failure.
    ///
    /// Protocol-level failures carry the real HTTP status; anything that
    /// failed before a response arrived (connection refused, timeout,
    /// malformed request) reports [`TRANSPORT_STATUS`] (-1).
    pub fn status_code(&self) -> i32 {
        match &self.kind {
            ErrorKind::Http { status, .. } => i32::from(*status),
            ErrorKind::Connection(_) | ErrorKind::Timeout | ErrorKind::Request(_) => {
                TRANSPORT_STATUS
            }
            _ => TRANSPORT_STATUS,
        }
    }

    /// Returns true if this failure never reached the Sprinklr backend.
    pub fn is_transport(&self) -> bool {
        matches!(
            self.kind,
            ErrorKind::Connection(_) | ErrorKind::Timeout | ErrorKind::Request(_)
        )
    }

    /// The raw response body for HTTP failures, if any.
    pub fn response_body(&self) -> Option<&str> {
        match &self.kind {
            ErrorKind::Http { message, .. } => Some(message),
            _ => None,
        }
    }
}

/// The kind of error that occurred.
#[derive(Debug, thiserror::Error)]
pub enum ErrorKind {
    /// Non-success HTTP status. The message is the raw response body.
    #[error("HTTP error: {status} {message}")]
    Http { status: u16, message: String },

    /// Could not connect to the Sprinklr host.
    #[error("Connection error: {0}")]
    Connection(String),

    /// The request timed out before a response arrived.
    #[error("Timeout error")]
    Timeout,

    /// Any other failure raised by the HTTP transport.
    #[error("Request error: {0}")]
    Request(String),

    /// JSON serialization/deserialization error.
    #[error("JSON error: {0}")]
    Json(String),

    /// Invalid URL.
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    /// Invalid client configuration.
    #[error("Configuration error: {0}")]
    Config(String),
}

impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        let kind = if err.is_timeout() {
            ErrorKind::Timeout
        } else if err.is_connect() {
            ErrorKind::Connection(err.to_string())
        } else {
            ErrorKind::Request(err.to_string())
        };

        Error::with_source(kind, err)
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::with_source(ErrorKind::Json(err.to_string()), err)
    }
}

impl From<url::ParseError> for Error {
    fn from(err: url::ParseError) -> Self {
        Error::with_source(ErrorKind::InvalidUrl(err.to_string()), err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn transport_failures_report_minus_one() {
        let err = Error::new(ErrorKind::Connection("refused".into()));
        assert_eq!(err.status_code(), TRANSPORT_STATUS);
        assert!(err.is_transport());

        let err = Error::new(ErrorKind::Timeout);
        assert_eq!(err.status_code(), -1);
        assert!(err.is_transport());

        let err = Error::new(ErrorKind::Request("bad handshake".into()));
        assert_eq!(err.status_code(), -1);
        assert!(err.is_transport());
    }

    #[test]
    fn http_failures_carry_the_real_status_and_body() {
        let err = Error::new(ErrorKind::Http {
            status: 403,
            message: r#"{"error":"permission denied"}"#.into(),
        });
        assert_eq!(err.status_code(), 403);
        assert!(!err.is_transport());
        assert_eq!(err.response_body(), Some(r#"{"error":"permission denied"}"#));
    }

    #[test]
    fn error_kind_display_messages() {
        let cases: Vec<(ErrorKind, &str)> = vec![
            (
                ErrorKind::Http {
                    status: 500,
                    message: "Internal Server Error".into(),
                },
                "HTTP error: 500 Internal Server Error",
            ),
            (
                ErrorKind::Connection("refused".into()),
                "Connection error: refused",
            ),
            (ErrorKind::Timeout, "Timeout error"),
            (
                ErrorKind::Request("stream closed".into()),
                "Request error: stream closed",
            ),
            (
                ErrorKind::Json("unexpected EOF".into()),
                "JSON error: unexpected EOF",
            ),
            (
                ErrorKind::InvalidUrl("no scheme".into()),
                "Invalid URL: no scheme",
            ),
            (
                ErrorKind::Config("missing key".into()),
                "Configuration error: missing key",
            ),
        ];

        for (kind, expected) in cases {
            let display = kind.to_string();
            assert!(
                display.contains(expected),
                "Expected '{display}' to contain '{expected}'"
            );
        }
    }

    #[test]
    fn from_serde_json_error() {
        let json_err = serde_json::from_str::<String>("not valid json").unwrap_err();
        let err: Error = json_err.into();
        assert!(matches!(err.kind, ErrorKind::Json(_)));
        assert!(err.source.is_some());
    }

    #[test]
    fn from_url_parse_error() {
        let url_err = url::Url::parse("not a url").unwrap_err();
        let err: Error = url_err.into();
        assert!(matches!(err.kind, ErrorKind::InvalidUrl(_)));
    }
}
