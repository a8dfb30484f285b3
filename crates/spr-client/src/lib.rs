//! # sprinklr-client
//!
//! Core HTTP client infrastructure for the Sprinklr API.
//!
//! This crate provides the foundational HTTP client with:
//! - Bearer-token plus `key`-header authentication on every request
//! - One HTTP call per invocation, no retries (retry decisions belong to
//!   the caller)
//! - Response normalization: status code, raw text, best-effort parsed JSON
//! - A "never throws" calling convention: every outcome is a returned
//!   `Result`, transport failures mapped to a synthetic status of -1
//! - Connection pooling and request/response tracing
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                    Application Layer                        │
//! │              (sprinklr-rest, sprinklr-auth)                 │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │                     SprinklrClient                          │
//! │  - Holds API key, access token, environment                 │
//! │  - Builds environment-aware URLs                            │
//! │  - Provides typed JSON methods (get_json, post_json, ...)   │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │                      SprHttpClient                          │
//! │  - Raw HTTP, one call per invocation                        │
//! │  - Request building, response normalization                 │
//! └─────────────────────────────────────────────────────────────┘
//! ```

mod client;
mod config;
mod environment;
mod error;
mod request;
mod response;
mod sprinklr_client;

pub use client::SprHttpClient;
pub use config::{ClientConfig, ClientConfigBuilder};
pub use environment::{Environment, DEFAULT_API_HOST};
pub use error::{Error, ErrorKind, Result, TRANSPORT_STATUS};
pub use request::{RequestBody, RequestBuilder, RequestMethod};
pub use response::{ApiResponse, Body, SUCCESS_STATUSES};
pub use sprinklr_client::SprinklrClient;

/// User-Agent string for the client
pub const USER_AGENT: &str = concat!("sprinklr-api/", env!("CARGO_PKG_VERSION"));
