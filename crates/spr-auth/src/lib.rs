//! # sprinklr-auth
//!
//! Sprinklr authentication: OAuth 2.0 authorization-code and refresh-token
//! grants, and credential management.
//!
//! ## Security
//!
//! - Tokens and secrets are redacted in Debug output
//! - Tracing spans skip credential parameters
//! - Error messages never echo credential values
//!
//! ## Example
//!
//! ```rust,ignore
//! use sprinklr_auth::OAuthClient;
//!
//! let oauth = OAuthClient::new("app-api-key");
//!
//! // 1. Send the user here; the redirect carries a temporary code.
//! let url = oauth.authorization_url("https://example.com/callback");
//!
//! // 2. Exchange the code for tokens.
//! let token = oauth
//!     .exchange_code("app-secret", "https://example.com/callback", &code)
//!     .await?;
//!
//! // 3. Later, renew without user interaction.
//! let token = oauth
//!     .refresh_token("app-secret", "https://example.com/callback",
//!                    token.refresh_token.as_deref().unwrap())
//!     .await?;
//! ```

mod credentials;
mod error;
mod oauth;

pub use credentials::SprinklrCredentials;
pub use error::{Error, ErrorKind, Result};
pub use oauth::{OAuthClient, TokenResponse};
