//! OAuth 2.0 flows against the Sprinklr token endpoints.
//!
//! Sprinklr uses the standard authorization-code grant: the application
//! sends the user to `oauth/authorize`, receives a temporary code on its
//! redirect URI, and exchanges it at `oauth/token`. Expired access tokens
//! are renewed with the refresh-token grant. Unusually, the token endpoint
//! takes its parameters in the query string of a POST with a
//! form-urlencoded content type and an empty body; this module reproduces
//! that wire shape exactly.

use serde::{Deserialize, Serialize};
use sprinklr_client::{Environment, DEFAULT_API_HOST};
use tracing::instrument;

use crate::error::{Error, ErrorKind, Result};

/// OAuth client for the Sprinklr token endpoints.
///
/// Holds the application API key (the OAuth `client_id`) and the target
/// environment. The client secret is passed per call and never stored.
#[derive(Clone)]
pub struct OAuthClient {
    api_key: String,
    host: String,
    environment: Environment,
    http_client: reqwest::Client,
}

impl std::fmt::Debug for OAuthClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OAuthClient")
            .field("api_key", &self.api_key)
            .field("host", &self.host)
            .field("environment", &self.environment)
            .finish_non_exhaustive()
    }
}

impl OAuthClient {
    /// Create a new OAuth client for production.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            host: DEFAULT_API_HOST.to_string(),
            environment: Environment::Production,
            http_client: reqwest::Client::new(),
        }
    }

    /// Target a non-production deployment.
    pub fn with_environment(mut self, environment: Environment) -> Self {
        self.environment = environment;
        self
    }

    /// Override the API host. Intended for tests and proxies.
    pub fn with_host(mut self, host: impl Into<String>) -> Self {
        self.host = host.into().trim_end_matches('/').to_string();
        self
    }

    /// The application API key (OAuth `client_id`).
    pub fn api_key(&self) -> &str {
        &self.api_key
    }

    /// Build the authorization URL to send users to.
    ///
    /// Sprinklr redirects the user back to `redirect_uri` with a temporary
    /// `code` query parameter, consumed by [`exchange_code`].
    ///
    /// [`exchange_code`]: OAuthClient::exchange_code
    pub fn authorization_url(&self, redirect_uri: &str) -> String {
        format!(
            "{}/{}oauth/authorize?client_id={}&response_type=code&redirect_uri={}",
            self.host,
            self.environment.path_segment(),
            urlencoding::encode(&self.api_key),
            urlencoding::encode(redirect_uri),
        )
    }

    /// Exchange an authorization code for tokens.
    ///
    /// The code and secret parameters are not logged to prevent credential
    /// exposure.
    #[instrument(skip(self, secret, code))]
    pub async fn exchange_code(
        &self,
        secret: &str,
        redirect_uri: &str,
        code: &str,
    ) -> Result<TokenResponse> {
        self.token_request(&[
            ("client_id", self.api_key.as_str()),
            ("client_secret", secret),
            ("redirect_uri", redirect_uri),
            ("grant_type", "authorization_code"),
            ("code", code),
        ])
        .await
    }

    /// Renew an access token with the refresh-token grant.
    ///
    /// Sprinklr issues a new refresh token alongside the new access token;
    /// the caller should persist both.
    #[instrument(skip(self, secret, refresh_token))]
    pub async fn refresh_token(
        &self,
        secret: &str,
        redirect_uri: &str,
        refresh_token: &str,
    ) -> Result<TokenResponse> {
        self.token_request(&[
            ("client_id", self.api_key.as_str()),
            ("client_secret", secret),
            ("redirect_uri", redirect_uri),
            ("grant_type", "refresh_token"),
            ("refresh_token", refresh_token),
        ])
        .await
    }

    /// Issue one POST against `oauth/token` with the grant parameters in
    /// the query string, and decode the outcome.
    async fn token_request(&self, params: &[(&str, &str)]) -> Result<TokenResponse> {
        let url = format!(
            "{}/{}oauth/token",
            self.host,
            self.environment.path_segment()
        );

        let response = self
            .http_client
            .post(&url)
            .query(params)
            .header("Content-Type", "application/x-www-form-urlencoded")
            .send()
            .await?;

        let status = response.status().as_u16();
        let body = response.text().await?;

        if !(200..300).contains(&status) {
            if let Ok(err) = serde_json::from_str::<OAuthErrorResponse>(&body) {
                return Err(Error::new(ErrorKind::OAuth {
                    error: err.error,
                    description: err.error_description,
                }));
            }
            return Err(Error::new(ErrorKind::TokenRequest { status, body }));
        }

        let token: TokenResponse = serde_json::from_str(&body)?;
        Ok(token)
    }
}

/// Token response from the Sprinklr token endpoint.
///
/// Sensitive fields are redacted in Debug output to prevent accidental
/// exposure in logs.
#[derive(Clone, Deserialize, Serialize)]
pub struct TokenResponse {
    /// Access token.
    pub access_token: String,
    /// Token type (usually "Bearer").
    #[serde(default)]
    pub token_type: Option<String>,
    /// Refresh token for renewing the access token.
    #[serde(default)]
    pub refresh_token: Option<String>,
}

impl std::fmt::Debug for TokenResponse {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TokenResponse")
            .field("access_token", &"[REDACTED]")
            .field("token_type", &self.token_type)
            .field(
                "refresh_token",
                &self.refresh_token.as_ref().map(|_| "[REDACTED]"),
            )
            .finish()
    }
}

/// OAuth error response.
#[derive(Debug, Deserialize)]
struct OAuthErrorResponse {
    error: String,
    #[serde(default)]
    error_description: String,
}
