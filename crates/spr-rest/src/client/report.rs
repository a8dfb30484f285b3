use sprinklr_client::ApiResponse;
use tracing::instrument;

use crate::error::Result;
use crate::report::{ReportRequest, ReportingEngine};

impl super::SprinklrRestClient {
    /// Run a report query (API 2.0).
    #[instrument(skip(self, request), fields(engine = ?request.reporting_engine))]
    pub async fn fetch_report(&self, request: &ReportRequest) -> Result<ApiResponse> {
        let url = self.client.api_url("v2", "reports/query");
        self.client
            .execute(self.client.post(&url).json(request)?)
            .await
            .map_err(Into::into)
    }

    /// Run a report query against the legacy v1 endpoint.
    #[instrument(skip(self, request), fields(engine = ?request.reporting_engine))]
    pub async fn fetch_report_v1(&self, request: &ReportRequest) -> Result<ApiResponse> {
        let url = self.client.api_url("v1", "reports/query");
        self.client
            .execute(self.client.post(&url).json(request)?)
            .await
            .map_err(Into::into)
    }

    /// Fetch the custom metrics defined for a reporting engine.
    #[instrument(skip(self))]
    pub async fn report_custom_metrics(&self, engine: ReportingEngine) -> Result<ApiResponse> {
        let url = self
            .client
            .api_url("v1", &format!("reports/customMetric/{}", engine.as_str()));
        self.client
            .execute(self.client.get(&url))
            .await
            .map_err(Into::into)
    }

    /// Fetch the metrics and dimensions available to a report.
    #[instrument(skip(self))]
    pub async fn report_metrics_and_dimensions(
        &self,
        engine: ReportingEngine,
        report_type: &str,
    ) -> Result<ApiResponse> {
        let url = self
            .client
            .api_url("v1", &format!("reports/metadata/{}", engine.as_str()));
        self.client
            .execute(self.client.get(&url).query("reportType", report_type))
            .await
            .map_err(Into::into)
    }
}

#[cfg(test)]
mod tests {
    use super::super::SprinklrRestClient;
    use crate::report::{ReportBuilder, ReportingEngine};
    use serde_json::json;
    use wiremock::matchers::{body_partial_json, method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    async fn client(server: &MockServer) -> SprinklrRestClient {
        SprinklrRestClient::new("app-key", "token")
            .unwrap()
            .with_host(server.uri())
    }

    #[tokio::test]
    async fn fetch_report_posts_the_assembled_document() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/api/v2/reports/query"))
            .and(body_partial_json(json!({
                "reportingEngine": "LISTENING",
                "report": "SPRINKSIGHTS",
                "projections": [{
                    "heading": "Insights",
                    "measurementName": "NLP_DOC_INSIGHT_COUNT",
                    "aggregateFunction": "SUM"
                }]
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "data": {"rows": [["US", 42]]}
            })))
            .mount(&mock_server)
            .await;

        let mut builder = ReportBuilder::new();
        builder.set_engine("LISTENING").unwrap();
        builder.set_name("SPRINKSIGHTS");
        builder.add_column("Insights", "NLP_DOC_INSIGHT_COUNT", "SUM", None);
        builder.add_group_by("Location", "LOCATION_IDS", "FIELD", None);

        let client = client(&mock_server).await;
        let response = client.fetch_report(&builder.build()).await.unwrap();

        assert!(response.is_ok());
        assert_eq!(response.json_value().unwrap()["data"]["rows"][0][1], 42);
    }

    #[tokio::test]
    async fn report_metadata_endpoints_target_v1() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/api/v1/reports/customMetric/PLATFORM"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"data": []})))
            .mount(&mock_server)
            .await;

        Mock::given(method("GET"))
            .and(path("/api/v1/reports/metadata/LISTENING"))
            .and(query_param("reportType", "SPRINKSIGHTS"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"data": []})))
            .mount(&mock_server)
            .await;

        let client = client(&mock_server).await;
        assert!(client
            .report_custom_metrics(ReportingEngine::Platform)
            .await
            .unwrap()
            .is_ok());
        assert!(client
            .report_metrics_and_dimensions(ReportingEngine::Listening, "SPRINKSIGHTS")
            .await
            .unwrap()
            .is_ok());
    }

    #[tokio::test]
    async fn rejected_report_surfaces_the_backend_message() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/api/v2/reports/query"))
            .respond_with(
                ResponseTemplate::new(400)
                    .set_body_string(r#"{"error":"unknown measurement BOGUS"}"#),
            )
            .mount(&mock_server)
            .await;

        let mut builder = ReportBuilder::new();
        builder.set_engine("PLATFORM").unwrap();
        builder.add_column("Bogus", "BOGUS", "SUM", None);

        let client = client(&mock_server).await;
        let err = client.fetch_report(&builder.build()).await.unwrap_err();
        assert_eq!(err.status_code(), 400);
        assert!(err.to_string().contains("unknown measurement"));
    }
}
