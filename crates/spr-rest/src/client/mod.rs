//! Sprinklr REST API client.
//!
//! Wraps `SprinklrClient` from `sprinklr-client` and provides the typed
//! surfaces: generic resource CRUD, cursor-based entity search, and report
//! queries.

use sprinklr_client::{ClientConfig, Environment, SprinklrClient};
use sprinklr_auth::SprinklrCredentials;

use crate::error::Result;

mod report;
mod resource;
mod search;

/// Sprinklr REST API client.
///
/// # Example
///
/// ```rust,ignore
/// use sprinklr_rest::{EntityType, SearchRequest, SprinklrRestClient};
/// use serde_json::json;
///
/// let client = SprinklrRestClient::new("app-key", "access-token")?;
///
/// // Search with cursor pagination
/// let mut page = client
///     .search(EntityType::Case, &SearchRequest::new(json!({"key": "status", "value": "OPEN"})))
///     .await?;
/// while page.has_next() {
///     page = client.search_next(&page).await?;
/// }
///
/// // Generic resource operations
/// let case = client.fetch(&sprinklr_rest::endpoints::CASE, "12345").await?;
/// ```
#[derive(Debug, Clone)]
pub struct SprinklrRestClient {
    client: SprinklrClient,
}

impl SprinklrRestClient {
    /// Create a new REST client for production.
    pub fn new(api_key: impl Into<String>, access_token: impl Into<String>) -> Result<Self> {
        let client = SprinklrClient::new(api_key, access_token)?;
        Ok(Self { client })
    }

    /// Create a new REST client with custom HTTP configuration.
    pub fn with_config(
        api_key: impl Into<String>,
        access_token: impl Into<String>,
        config: ClientConfig,
    ) -> Result<Self> {
        let client = SprinklrClient::with_config(api_key, access_token, config)?;
        Ok(Self { client })
    }

    /// Create a REST client from a credential bundle.
    pub fn from_credentials(credentials: &SprinklrCredentials) -> Result<Self> {
        let client = SprinklrClient::new(credentials.api_key(), credentials.access_token())?
            .with_environment(credentials.environment().clone());
        Ok(Self { client })
    }

    /// Create a REST client from an existing SprinklrClient.
    pub fn from_client(client: SprinklrClient) -> Self {
        Self { client }
    }

    /// Target a non-production deployment.
    pub fn with_environment(mut self, environment: Environment) -> Self {
        self.client = self.client.with_environment(environment);
        self
    }

    /// Override the API host. Intended for tests and proxies.
    pub fn with_host(mut self, host: impl Into<String>) -> Self {
        self.client = self.client.with_host(host);
        self
    }

    /// Get the underlying SprinklrClient.
    pub fn inner(&self) -> &SprinklrClient {
        &self.client
    }
}
