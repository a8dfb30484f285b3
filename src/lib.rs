//! # sprinklr-api
//!
//! A Sprinklr REST API client library for Rust.
//!
//! This library provides type-safe access to the Sprinklr platform APIs with
//! built-in OAuth 2.0 authentication, cursor-based search pagination, and a
//! declarative reporting query builder.
//!
//! ## Security
//!
//! This library is designed with security in mind:
//! - Sensitive data (tokens, secrets) are redacted in Debug output
//! - Tracing/logging skips credential parameters
//! - Error messages sanitize any credential data
//!
//! ## Crates
//!
//! - **sprinklr-client** - Core HTTP client infrastructure: request building,
//!   response normalization, API environments
//! - **sprinklr-auth** - Authentication: OAuth 2.0 authorization-code flow,
//!   token refresh, credentials management
//! - **sprinklr-rest** - REST API: resource CRUD, paginated search, reporting
//!   queries, asset management
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use sprinklr_auth::{OAuthClient, SprinklrCredentials};
//! use sprinklr_rest::{EntityType, SearchRequest, SprinklrRestClient};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     // Exchange an authorization code for tokens
//!     let oauth = OAuthClient::new("my-api-key");
//!     let tokens = oauth
//!         .exchange_code("my-secret", "https://example.com/callback", "auth-code")
//!         .await?;
//!     let creds = SprinklrCredentials::from_token_response("my-api-key", &tokens);
//!
//!     // Create REST client
//!     let client = SprinklrRestClient::from_credentials(&creds)?;
//!
//!     // Search cases, one page at a time
//!     let request = SearchRequest::new(serde_json::json!({}));
//!     let mut page = client.search(EntityType::Case, &request).await?;
//!     while page.has_next() {
//!         page = client.search_next(&page).await?;
//!     }
//!
//!     Ok(())
//! }
//! ```

// Re-export all crates for convenient access
pub use sprinklr_auth as auth;
pub use sprinklr_client as client;
pub use sprinklr_rest as rest;

// Re-export commonly used types at the top level
pub use sprinklr_auth::{OAuthClient, SprinklrCredentials};
pub use sprinklr_client::{ClientConfig, Environment, SprinklrClient};
pub use sprinklr_rest::{ReportBuilder, SprinklrRestClient};
