use serde::Serialize;
use sprinklr_client::ApiResponse;
use tracing::instrument;

use crate::endpoints::ResourceSpec;
use crate::error::Result;

impl super::SprinklrRestClient {
    fn resource_url(&self, resource: &ResourceSpec, path: &str) -> String {
        self.client.api_url(resource.version.as_str(), path)
    }

    /// Create a resource instance.
    #[instrument(skip(self, body), fields(resource = resource.name))]
    pub async fn create<B: Serialize>(
        &self,
        resource: &ResourceSpec,
        body: &B,
    ) -> Result<ApiResponse> {
        let url = self.resource_url(resource, &resource.collection_path());
        self.client
            .execute(self.client.post(&url).json(body)?)
            .await
            .map_err(Into::into)
    }

    /// Create a resource instance from a pre-serialized JSON payload,
    /// passed through unchanged.
    #[instrument(skip(self, body), fields(resource = resource.name))]
    pub async fn create_raw(
        &self,
        resource: &ResourceSpec,
        body: impl Into<String>,
    ) -> Result<ApiResponse> {
        let url = self.resource_url(resource, &resource.collection_path());
        self.client
            .execute(self.client.post(&url).raw_json(body))
            .await
            .map_err(Into::into)
    }

    /// Fetch a resource instance by id.
    #[instrument(skip(self), fields(resource = resource.name))]
    pub async fn fetch(&self, resource: &ResourceSpec, id: &str) -> Result<ApiResponse> {
        let url = self.resource_url(resource, &resource.item_path(id));
        self.client
            .execute(self.client.get(&url))
            .await
            .map_err(Into::into)
    }

    /// Update a resource instance.
    #[instrument(skip(self, body), fields(resource = resource.name))]
    pub async fn update<B: Serialize>(
        &self,
        resource: &ResourceSpec,
        id: &str,
        body: &B,
    ) -> Result<ApiResponse> {
        let url = self.resource_url(resource, &resource.item_path(id));
        self.client
            .execute(self.client.put(&url).json(body)?)
            .await
            .map_err(Into::into)
    }

    /// Delete a resource instance.
    #[instrument(skip(self), fields(resource = resource.name))]
    pub async fn delete(&self, resource: &ResourceSpec, id: &str) -> Result<ApiResponse> {
        let url = self.resource_url(resource, &resource.item_path(id));
        self.client
            .execute(self.client.delete(&url))
            .await
            .map_err(Into::into)
    }

    // =========================================================================
    // Standalone endpoints that don't fit the CRUD table
    // =========================================================================

    /// Fetch the authenticated user (`api/v2/me`).
    #[instrument(skip(self))]
    pub async fn current_user(&self) -> Result<ApiResponse> {
        let url = self.client.api_url("v2", "me");
        self.client
            .execute(self.client.get(&url))
            .await
            .map_err(Into::into)
    }

    /// Fetch bootstrap resources by type, e.g. `PARTNER_QUEUES` or
    /// `CLIENT_USERS` (comma-separated for more than one).
    #[instrument(skip(self))]
    pub async fn bootstrap_resources(&self, types: &str) -> Result<ApiResponse> {
        let url = self.client.api_url("v1", "bootstrap/resources");
        self.client
            .execute(self.client.get(&url).query("types", types))
            .await
            .map_err(Into::into)
    }

    /// List the webhook types available to the partner.
    #[instrument(skip(self))]
    pub async fn webhook_types(&self) -> Result<ApiResponse> {
        let url = self
            .client
            .api_url("v2", "webhook-subscriptions/webhook-types");
        self.client
            .execute(self.client.get(&url))
            .await
            .map_err(Into::into)
    }

    /// Import an asset from a URL into the SAM library.
    #[instrument(skip(self))]
    pub async fn import_asset(
        &self,
        import_type: &str,
        source_url: &str,
        upload_tracker_id: &str,
    ) -> Result<ApiResponse> {
        let url = self.client.api_url("v1", "sam/importUrl");
        self.client
            .execute(
                self.client
                    .post(&url)
                    .query("importType", import_type)
                    .query("url", source_url)
                    .query("uploadTrackerId", upload_tracker_id),
            )
            .await
            .map_err(Into::into)
    }

    /// Search the SAM library with a raw search request document.
    #[instrument(skip(self, request))]
    pub async fn search_assets<B: Serialize>(&self, request: &B) -> Result<ApiResponse> {
        let url = self.client.api_url("v1", "sam/search");
        self.client
            .execute(self.client.post(&url).json(request)?)
            .await
            .map_err(Into::into)
    }

    /// Upload a file to the SAM library as multipart form data.
    #[instrument(skip(self, data))]
    pub async fn upload_asset(
        &self,
        content_type: &str,
        upload_tracker_id: &str,
        file_name: &str,
        data: Vec<u8>,
    ) -> Result<ApiResponse> {
        let url = self.client.api_url("v1", "sam/upload");
        self.client
            .execute(
                self.client
                    .post(&url)
                    .query("contentType", content_type)
                    .query("uploadTrackerId", upload_tracker_id)
                    .file(file_name.to_string(), data),
            )
            .await
            .map_err(Into::into)
    }
}
