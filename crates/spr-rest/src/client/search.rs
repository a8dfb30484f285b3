use tracing::instrument;

use crate::error::{Error, ErrorKind, Result};
use crate::search::{EntityType, SearchPage, SearchRequest};

impl super::SprinklrRestClient {
    /// Search an entity type with filters.
    ///
    /// Issues one POST against `api/v2/search/{TYPE}`. The returned page
    /// carries the cursor for the following page, if the backend sent one;
    /// follow it with [`search_next`]. Pagination terminates when a page
    /// comes back without a cursor; there is no client-side page limit.
    ///
    /// [`search_next`]: super::SprinklrRestClient::search_next
    #[instrument(skip(self, request))]
    pub async fn search(
        &self,
        entity: EntityType,
        request: &SearchRequest,
    ) -> Result<SearchPage> {
        let url = self
            .client
            .api_url("v2", &format!("search/{}", entity.as_str()));
        let response = self
            .client
            .execute(self.client.post(&url).json(request)?)
            .await?;

        let result = response
            .json_value()
            .cloned()
            .unwrap_or(serde_json::Value::Null);
        Ok(SearchPage::new(entity, result))
    }

    /// Fetch the page following `page`.
    ///
    /// Reuses the page's stored cursor against
    /// `api/v2/search/{TYPE}?id={cursor}`. Fails with a no-active-cursor
    /// error, without issuing a request, if the page has no cursor.
    #[instrument(skip(self, page), fields(entity = %page.entity()))]
    pub async fn search_next(&self, page: &SearchPage) -> Result<SearchPage> {
        let Some(cursor) = page.cursor() else {
            return Err(Error::new(ErrorKind::NoActiveCursor));
        };

        let url = self
            .client
            .api_url("v2", &format!("search/{}", page.entity().as_str()));
        let response = self
            .client
            .execute(self.client.get(&url).query("id", cursor))
            .await?;

        let result = response
            .json_value()
            .cloned()
            .unwrap_or(serde_json::Value::Null);
        Ok(SearchPage::new(page.entity(), result))
    }
}

#[cfg(test)]
mod tests {
    use super::super::SprinklrRestClient;
    use crate::search::{EntityType, SearchPage, SearchRequest};
    use serde_json::json;
    use wiremock::matchers::{method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    async fn client(server: &MockServer) -> SprinklrRestClient {
        SprinklrRestClient::new("app-key", "token")
            .unwrap()
            .with_host(server.uri())
    }

    #[tokio::test]
    async fn search_stores_the_returned_cursor() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/api/v2/search/CASE"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "data": {"cursor": "abc123", "results": [{"caseId": 1}]}
            })))
            .mount(&mock_server)
            .await;

        let client = client(&mock_server).await;
        let page = client
            .search(EntityType::Case, &SearchRequest::new(json!({})))
            .await
            .unwrap();

        assert_eq!(page.cursor(), Some("abc123"));
        assert!(page.has_next());
        assert_eq!(page.result()["data"]["results"][0]["caseId"], 1);
    }

    #[tokio::test]
    async fn search_next_targets_the_cursor_url() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/api/v2/search/CAMPAIGN"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "data": {"cursor": "abc123", "results": []}
            })))
            .mount(&mock_server)
            .await;

        // Second page: no cursor, pagination terminates.
        Mock::given(method("GET"))
            .and(path("/api/v2/search/CAMPAIGN"))
            .and(query_param("id", "abc123"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "data": {"results": [{"campaignId": 2}]}
            })))
            .mount(&mock_server)
            .await;

        let client = client(&mock_server).await;
        let first = client
            .search(EntityType::Campaign, &SearchRequest::new(json!({})))
            .await
            .unwrap();
        assert!(first.has_next());

        let second = client.search_next(&first).await.unwrap();
        assert_eq!(second.result()["data"]["results"][0]["campaignId"], 2);
        assert!(!second.has_next());
    }

    #[tokio::test]
    async fn search_next_without_cursor_fails_locally() {
        let mock_server = MockServer::start().await;
        let client = client(&mock_server).await;

        // A page that never had a cursor.
        let page = SearchPage::new(EntityType::Case, json!({"data": {"results": []}}));
        let err = client.search_next(&page).await.unwrap_err();

        assert!(err.is_no_active_cursor());
        assert_eq!(err.status_code(), -1);
        // No request reached the server.
        assert!(mock_server.received_requests().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn failed_search_surfaces_the_error_body() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/api/v2/search/SAM"))
            .respond_with(ResponseTemplate::new(400).set_body_string(r#"{"error":"bad filter"}"#))
            .mount(&mock_server)
            .await;

        let client = client(&mock_server).await;
        let err = client
            .search(EntityType::Sam, &SearchRequest::new(json!({})))
            .await
            .unwrap_err();

        assert_eq!(err.status_code(), 400);
        assert!(err.to_string().contains("bad filter"));
    }
}
