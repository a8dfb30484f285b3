//! Credential bundle tying an application key to a user's tokens.

use sprinklr_client::Environment;

use crate::oauth::TokenResponse;

/// Everything a client needs to call the Sprinklr API on a user's behalf.
///
/// Sensitive fields are redacted in Debug output.
#[derive(Clone)]
pub struct SprinklrCredentials {
    api_key: String,
    access_token: String,
    refresh_token: Option<String>,
    environment: Environment,
}

impl std::fmt::Debug for SprinklrCredentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SprinklrCredentials")
            .field("api_key", &self.api_key)
            .field("access_token", &"[REDACTED]")
            .field(
                "refresh_token",
                &self.refresh_token.as_ref().map(|_| "[REDACTED]"),
            )
            .field("environment", &self.environment)
            .finish()
    }
}

impl SprinklrCredentials {
    /// Create credentials for production.
    pub fn new(api_key: impl Into<String>, access_token: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            access_token: access_token.into(),
            refresh_token: None,
            environment: Environment::Production,
        }
    }

    /// Build credentials from a token-endpoint response.
    pub fn from_token_response(api_key: impl Into<String>, token: &TokenResponse) -> Self {
        Self {
            api_key: api_key.into(),
            access_token: token.access_token.clone(),
            refresh_token: token.refresh_token.clone(),
            environment: Environment::Production,
        }
    }

    /// Target a non-production deployment.
    pub fn with_environment(mut self, environment: Environment) -> Self {
        self.environment = environment;
        self
    }

    /// Attach a refresh token.
    pub fn with_refresh_token(mut self, token: impl Into<String>) -> Self {
        self.refresh_token = Some(token.into());
        self
    }

    /// Replace the tokens after a refresh grant.
    pub fn update_from(&mut self, token: &TokenResponse) {
        self.access_token = token.access_token.clone();
        if token.refresh_token.is_some() {
            self.refresh_token = token.refresh_token.clone();
        }
    }

    /// The application API key.
    pub fn api_key(&self) -> &str {
        &self.api_key
    }

    /// The access token.
    pub fn access_token(&self) -> &str {
        &self.access_token
    }

    /// The refresh token, if one was issued.
    pub fn refresh_token(&self) -> Option<&str> {
        self.refresh_token.as_deref()
    }

    /// The deployment environment.
    pub fn environment(&self) -> &Environment {
        &self.environment
    }

    /// Returns true if the credentials appear usable (non-empty).
    pub fn is_valid(&self) -> bool {
        !self.api_key.is_empty() && !self.access_token.is_empty()
    }
}
