//! HTTP response normalization.
//!
//! Every call collapses to one [`ApiResponse`]: the status code, the raw
//! response text, and a best-effort parsed body. The Sprinklr API is not
//! strict about content types, so the body is treated as JSON only when the
//! raw text starts with `{`; anything else is carried through as plain text.

use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::error::{Error, ErrorKind, Result};

/// HTTP status codes Sprinklr treats as success.
pub const SUCCESS_STATUSES: [u16; 2] = [200, 204];

/// A normalized Sprinklr API response.
#[derive(Debug, Clone)]
pub struct ApiResponse {
    status: u16,
    raw: String,
    body: Body,
}

/// A best-effort parsed response body.
#[derive(Debug, Clone)]
pub enum Body {
    /// The raw text started with `{` and parsed as a JSON object.
    Json(Value),
    /// Anything else: plain text, empty bodies, non-object JSON.
    Text(String),
}

impl ApiResponse {
    /// Normalize a status code and raw body into an `ApiResponse`.
    pub fn from_raw(status: u16, raw: String) -> Self {
        let body = if raw.starts_with('{') {
            match serde_json::from_str::<Value>(&raw) {
                Ok(value) => Body::Json(value),
                Err(_) => Body::Text(raw.clone()),
            }
        } else {
            Body::Text(raw.clone())
        };

        Self { status, raw, body }
    }

    /// The HTTP status code.
    pub fn status(&self) -> u16 {
        self.status
    }

    /// Returns true if the status is one Sprinklr treats as success
    /// (200 or 204).
    pub fn is_ok(&self) -> bool {
        SUCCESS_STATUSES.contains(&self.status)
    }

    /// The raw response text, untouched.
    pub fn raw(&self) -> &str {
        &self.raw
    }

    /// The best-effort parsed body.
    pub fn body(&self) -> &Body {
        &self.body
    }

    /// The parsed JSON body, if the response was a JSON object.
    pub fn json_value(&self) -> Option<&Value> {
        match &self.body {
            Body::Json(value) => Some(value),
            Body::Text(_) => None,
        }
    }

    /// Deserialize the body into a typed value.
    pub fn json<T: DeserializeOwned>(&self) -> Result<T> {
        serde_json::from_str(&self.raw).map_err(Into::into)
    }

    /// Convert a non-success response into an error carrying the raw body.
    pub fn into_result(self) -> Result<ApiResponse> {
        if self.is_ok() {
            Ok(self)
        } else {
            Err(Error::new(ErrorKind::Http {
                status: self.status,
                message: self.raw,
            }))
        }
    }
}
