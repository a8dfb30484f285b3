//! Error types for sprinklr-rest.

/// Result type alias for sprinklr-rest operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error type for sprinklr-rest operations.
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

    /// The status code for this failure: the HTTP status for protocol
    /// errors, -1 for transport failures, and -1 for anything local that
    /// never produced a request.
    pub fn status_code(&self) -> i32 {
        match &self.kind {
            ErrorKind::Client(err) => err.status_code(),
            _ => sprinklr_client::TRANSPORT_STATUS,
        }
    }

    /// Returns true if this is the no-active-cursor pagination failure.
    pub fn is_no_active_cursor(&self) -> bool {
        matches!(self.kind, ErrorKind::NoActiveCursor)
    }
}

/// The kind of error that occurred.
#[derive(Debug, thiserror::Error)]
pub enum ErrorKind {
    /// Failure from the underlying HTTP layer (transport or protocol).
    #[error(transparent)]
    Client(#[from] sprinklr_client::Error),

    /// `search_next` was called on a page with no cursor.
    #[error("Search cursor not set")]
    NoActiveCursor,

    /// An engine name outside {AD, PLATFORM, INBOUND_MESSAGE, LISTENING}.
    #[error("Invalid reporting engine: {0}")]
    InvalidEngine(String),

    /// A non-positive report page number.
    #[error("Invalid report page: {0}")]
    InvalidPage(i64),

    /// JSON error.
    #[error("JSON error: {0}")]
    Json(String),
}

impl From<sprinklr_client::Error> for Error {
    fn from(err: sprinklr_client::Error) -> Self {
        Error::new(ErrorKind::Client(err))
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::with_source(ErrorKind::Json(err.to_string()), err)
    }
}
