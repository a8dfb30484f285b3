//! High-level Sprinklr client holding long-lived credentials.
//!
//! `SprinklrClient` carries only configuration that outlives a call: the
//! application API key, the user's access token, the deployment
//! environment, and the API host. Every call returns its outcome as an
//! explicit value; nothing about a response is stored on the client, so one
//! instance can safely serve concurrent callers.
//!
//! ## Security
//!
//! The access token is redacted in Debug output, and request-issuing
//! methods skip credential parameters in tracing spans.

use serde::{de::DeserializeOwned, Serialize};
use tracing::instrument;

use crate::client::SprHttpClient;
use crate::config::ClientConfig;
use crate::environment::{Environment, DEFAULT_API_HOST};
use crate::error::Result;
use crate::request::RequestBuilder;
use crate::response::ApiResponse;

/// High-level Sprinklr API client.
///
/// # Example
///
/// ```rust,ignore
/// use sprinklr_client::SprinklrClient;
///
/// let client = SprinklrClient::new("app-key", "access-token")?;
///
/// // GET with typed response
/// let me: serde_json::Value = client.get_json(&client.api_url("v2", "me")).await?;
/// ```
#[derive(Clone)]
pub struct SprinklrClient {
    http: SprHttpClient,
    host: String,
    environment: Environment,
    api_key: String,
    access_token: String,
}

impl std::fmt::Debug for SprinklrClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SprinklrClient")
            .field("host", &self.host)
            .field("environment", &self.environment)
            .field("api_key", &self.api_key)
            .field("access_token", &"[REDACTED]")
            .finish_non_exhaustive()
    }
}

impl SprinklrClient {
    /// Create a new client for production with default HTTP configuration.
    pub fn new(api_key: impl Into<String>, access_token: impl Into<String>) -> Result<Self> {
        Self::with_config(api_key, access_token, ClientConfig::default())
    }

    /// Create a new client with custom HTTP configuration.
    pub fn with_config(
        api_key: impl Into<String>,
        access_token: impl Into<String>,
        config: ClientConfig,
    ) -> Result<Self> {
        let http = SprHttpClient::new(config)?;
        Ok(Self {
            http,
            host: DEFAULT_API_HOST.to_string(),
            environment: Environment::Production,
            api_key: api_key.into(),
            access_token: access_token.into(),
        })
    }

    /// Target a non-production deployment (`prod0`, `sandbox`, ...).
    pub fn with_environment(mut self, environment: Environment) -> Self {
        self.environment = environment;
        self
    }

    /// Override the API host. Intended for tests and proxies.
    pub fn with_host(mut self, host: impl Into<String>) -> Self {
        self.host = host.into().trim_end_matches('/').to_string();
        self
    }

    /// Replace the access token, e.g. after a refresh grant.
    pub fn with_access_token(mut self, token: impl Into<String>) -> Self {
        self.access_token = token.into();
        self
    }

    /// The API host.
    pub fn host(&self) -> &str {
        &self.host
    }

    /// The deployment environment.
    pub fn environment(&self) -> &Environment {
        &self.environment
    }

    /// The application API key.
    pub fn api_key(&self) -> &str {
        &self.api_key
    }

    /// The access token.
    pub fn access_token(&self) -> &str {
        &self.access_token
    }

    /// Build a full URL for an API path.
    ///
    /// Example: `api_url("v2", "search/CASE")` ->
    /// `https://api2.sprinklr.com/{env}api/v2/search/CASE`
    pub fn api_url(&self, version: &str, path: &str) -> String {
        let path = path.trim_start_matches('/');
        format!(
            "{}/{}api/{}/{}",
            self.host,
            self.environment.path_segment(),
            version,
            path
        )
    }

    /// Build a full URL for a non-`api/` path such as `oauth/token`.
    pub fn root_url(&self, path: &str) -> String {
        let path = path.trim_start_matches('/');
        format!("{}/{}{}", self.host, self.environment.path_segment(), path)
    }

    // =========================================================================
    // Base HTTP methods (with authentication headers)
    // =========================================================================

    /// Create a GET request builder with authentication headers.
    pub fn get(&self, url: &str) -> RequestBuilder {
        self.http
            .get(url)
            .bearer_auth(&self.access_token)
            .api_key(&self.api_key)
            .accept_json()
    }

    /// Create a POST request builder with authentication headers.
    ///
    /// POST requests additionally carry `cache-control: no-cache`, matching
    /// what the Sprinklr API expects.
    pub fn post(&self, url: &str) -> RequestBuilder {
        self.http
            .post(url)
            .bearer_auth(&self.access_token)
            .api_key(&self.api_key)
            .accept_json()
            .no_cache()
    }

    /// Create a PUT request builder with authentication headers.
    pub fn put(&self, url: &str) -> RequestBuilder {
        self.http
            .put(url)
            .bearer_auth(&self.access_token)
            .api_key(&self.api_key)
            .accept_json()
    }

    /// Create a DELETE request builder with authentication headers.
    pub fn delete(&self, url: &str) -> RequestBuilder {
        self.http
            .delete(url)
            .bearer_auth(&self.access_token)
            .api_key(&self.api_key)
            .accept_json()
            .no_cache()
    }

    /// Execute a prepared request.
    pub async fn execute(&self, request: RequestBuilder) -> Result<ApiResponse> {
        self.http.execute(request).await
    }

    /// Execute a prepared request without mapping non-success statuses to
    /// errors.
    pub async fn execute_raw(&self, request: RequestBuilder) -> Result<ApiResponse> {
        self.http.execute_raw(request).await
    }

    // =========================================================================
    // Typed JSON methods
    // =========================================================================

    /// GET request with JSON response deserialization.
    #[instrument(skip(self), fields(url = %url))]
    pub async fn get_json<T: DeserializeOwned>(&self, url: &str) -> Result<T> {
        let response = self.execute(self.get(url)).await?;
        response.json()
    }

    /// POST request with JSON body and typed response.
    #[instrument(skip(self, body), fields(url = %url))]
    pub async fn post_json<T: DeserializeOwned, B: Serialize>(
        &self,
        url: &str,
        body: &B,
    ) -> Result<T> {
        let request = self.post(url).json(body)?;
        let response = self.execute(request).await?;
        response.json()
    }

    /// PUT request with JSON body; status-only outcome.
    #[instrument(skip(self, body), fields(url = %url))]
    pub async fn put_json<B: Serialize>(&self, url: &str, body: &B) -> Result<ApiResponse> {
        let request = self.put(url).json(body)?;
        self.execute(request).await
    }

    /// DELETE request; status-only outcome.
    #[instrument(skip(self), fields(url = %url))]
    pub async fn delete_request(&self, url: &str) -> Result<ApiResponse> {
        self.execute(self.delete(url)).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client() -> SprinklrClient {
        SprinklrClient::new("app-key", "token").unwrap()
    }

    #[test]
    fn api_url_for_production() {
        let c = client();
        assert_eq!(
            c.api_url("v2", "search/CASE"),
            "https://api2.sprinklr.com/api/v2/search/CASE"
        );
        assert_eq!(
            c.api_url("v1", "/reports/query"),
            "https://api2.sprinklr.com/api/v1/reports/query"
        );
    }

    #[test]
    fn api_url_substitutes_environment_segment() {
        let c = client().with_environment(Environment::Sandbox);
        assert_eq!(
            c.api_url("v2", "campaign/42"),
            "https://api2.sprinklr.com/sandbox/api/v2/campaign/42"
        );
        assert_eq!(
            c.root_url("oauth/token"),
            "https://api2.sprinklr.com/sandbox/oauth/token"
        );
    }

    #[test]
    fn host_override_trims_trailing_slash() {
        let c = client().with_host("http://127.0.0.1:9999/");
        assert_eq!(c.api_url("v2", "me"), "http://127.0.0.1:9999/api/v2/me");
    }

    #[test]
    fn debug_redacts_access_token() {
        let c = SprinklrClient::new("app-key", "sekrit-value").unwrap();
        let debug = format!("{c:?}");
        assert!(
            !debug.contains("sekrit-value"),
            "debug output leaked the token: {debug}"
        );
        assert!(debug.contains("[REDACTED]"));
    }
}
