//! Core HTTP client: one call per invocation, normalized outcome.

use tracing::{debug, info, instrument};

use crate::config::ClientConfig;
use crate::error::{Error, ErrorKind, Result};
use crate::request::{RequestBody, RequestBuilder, RequestMethod};
use crate::response::ApiResponse;

/// HTTP client for the Sprinklr API.
///
/// Issues exactly one HTTP call per invocation. There is no retry or
/// backoff layer: the Sprinklr client contract leaves retry decisions to
/// the caller, which inspects the returned status and message.
#[derive(Debug, Clone)]
pub struct SprHttpClient {
    inner: reqwest::Client,
    config: ClientConfig,
}

impl SprHttpClient {
    /// Create a new HTTP client with the given configuration.
    pub fn new(config: ClientConfig) -> Result<Self> {
        let inner = reqwest::Client::builder()
            .timeout(config.timeout)
            .connect_timeout(config.connect_timeout)
            .pool_idle_timeout(config.pool_idle_timeout)
            .pool_max_idle_per_host(config.pool_max_idle_per_host)
            .user_agent(&config.user_agent)
            .gzip(true)
            .deflate(true)
            .build()
            .map_err(|e| Error::with_source(ErrorKind::Config(e.to_string()), e))?;

        Ok(Self { inner, config })
    }

    /// Create a new HTTP client with default configuration.
    pub fn default_client() -> Result<Self> {
        Self::new(ClientConfig::default())
    }

    /// Get the client configuration.
    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Create a GET request builder.
    pub fn get(&self, url: impl Into<String>) -> RequestBuilder {
        RequestBuilder::new(RequestMethod::Get, url)
    }

    /// Create a POST request builder.
    pub fn post(&self, url: impl Into<String>) -> RequestBuilder {
        RequestBuilder::new(RequestMethod::Post, url)
    }

    /// Create a PUT request builder.
    pub fn put(&self, url: impl Into<String>) -> RequestBuilder {
        RequestBuilder::new(RequestMethod::Put, url)
    }

    /// Create a DELETE request builder.
    pub fn delete(&self, url: impl Into<String>) -> RequestBuilder {
        RequestBuilder::new(RequestMethod::Delete, url)
    }

    /// Execute a request, treating any non-200/204 status as an error
    /// carrying the raw response body.
    #[instrument(skip(self, request), fields(method = ?request.method, url = %request.url))]
    pub async fn execute(&self, request: RequestBuilder) -> Result<ApiResponse> {
        self.execute_raw(request).await?.into_result()
    }

    /// Execute a request and return the normalized response regardless of
    /// status. Transport failures (connection, timeout, anything that never
    /// produced a response) are still errors.
    pub async fn execute_raw(&self, request: RequestBuilder) -> Result<ApiResponse> {
        let mut req = self
            .inner
            .request(request.method.to_reqwest(), &request.url);

        if let Some(ref token) = request.bearer_token {
            req = req.bearer_auth(token);
        }

        if let Some(ref key) = request.api_key {
            req = req.header("key", key.as_str());
        }

        for (name, value) in &request.headers {
            req = req.header(name.as_str(), value.as_str());
        }

        if !request.query_params.is_empty() {
            req = req.query(&request.query_params);
        }

        if let Some(body) = request.body {
            req = match body {
                RequestBody::Json(value) => req.json(&value),
                RequestBody::Text(text) => req.body(text),
                RequestBody::Form(data) => req.form(&data),
                RequestBody::Multipart { file_name, data } => {
                    let part = reqwest::multipart::Part::bytes(data.to_vec())
                        .file_name(file_name);
                    req.multipart(reqwest::multipart::Form::new().part("file", part))
                }
            };
        }

        if self.config.enable_tracing {
            debug!(method = ?request.method, url = %request.url, "Sending request");
        }

        let response = req.send().await?;
        let status = response.status().as_u16();
        let raw = response.text().await?;

        if self.config.enable_tracing {
            if (200..300).contains(&status) {
                debug!(status, "Response received");
            } else {
                info!(status, "Non-success response");
            }
        }

        Ok(ApiResponse::from_raw(status, raw))
    }
}
