use crate::models::{ListRecordsResponse, Record};
use crate::AirtableClient;

impl AirtableClient {
    /// List every record of a table, following pagination cursors.
    /// GET /{base_id}/{table_id}
    ///
    /// Airtable returns at most one page per call together with an `offset`
    /// cursor; the cursor is echoed back until a response omits it. Pages are
    /// concatenated in retrieval order. A non-success status fails the whole
    /// fetch; no partial page set is returned.
    pub async fn list_records(
        &self,
        base_id: &str,
        table_id: &str,
        view: Option<&str>,
    ) -> crate::Result<Vec<Record>> {
        let url = self.url(&format!("/{}/{}", base_id, table_id));
        tracing::debug!("Fetching records from: {}", url);

        let mut records = Vec::new();
        let mut offset: Option<String> = None;

        loop {
            let mut query: Vec<(&str, &str)> = Vec::new();
            if let Some(view) = view {
                query.push(("view", view));
            }
            if let Some(cursor) = offset.as_deref() {
                query.push(("offset", cursor));
            }

            let response = self
                .client()
                .get(&url)
                .bearer_auth(self.token())
                .query(&query)
                .send()
                .await?;
            let page: ListRecordsResponse = self.handle_response(response).await?;

            records.extend(page.records);

            match page.offset {
                Some(cursor) => offset = Some(cursor),
                None => break,
            }
        }

        Ok(records)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use wiremock::matchers::{header, method, path, query_param, query_param_is_missing};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn record(id: &str, idea: &str) -> serde_json::Value {
        json!({"id": id, "fields": {"A Idea": idea}})
    }

    fn client_for(server: &MockServer) -> AirtableClient {
        AirtableClient::with_api_url(reqwest::Client::new(), "test-token", server.uri())
    }

    #[tokio::test]
    async fn test_pagination_follows_offset_cursor() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/appTest/tbl1"))
            .and(query_param_is_missing("offset"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "records": [record("rec1", "first"), record("rec2", "second")],
                "offset": "p2"
            })))
            .expect(1)
            .mount(&server)
            .await;

        Mock::given(method("GET"))
            .and(path("/appTest/tbl1"))
            .and(query_param("offset", "p2"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "records": [record("rec3", "third")]
            })))
            .expect(1)
            .mount(&server)
            .await;

        let records = client_for(&server)
            .list_records("appTest", "tbl1", None)
            .await
            .unwrap();

        let ids: Vec<&str> = records.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, vec!["rec1", "rec2", "rec3"]);
        assert_eq!(server.received_requests().await.unwrap().len(), 2);
    }

    #[tokio::test]
    async fn test_bearer_token_and_view_are_sent() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/appTest/tbl1"))
            .and(header("Authorization", "Bearer test-token"))
            .and(query_param("view", "API Full"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "records": [record("rec1", "only")]
            })))
            .expect(1)
            .mount(&server)
            .await;

        let records = client_for(&server)
            .list_records("appTest", "tbl1", Some("API Full"))
            .await
            .unwrap();

        assert_eq!(records.len(), 1);
    }

    #[tokio::test]
    async fn test_non_success_status_aborts_fetch() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/appTest/tbl1"))
            .respond_with(ResponseTemplate::new(500).set_body_string("upstream broke"))
            .expect(1)
            .mount(&server)
            .await;

        let err = client_for(&server)
            .list_records("appTest", "tbl1", None)
            .await
            .unwrap_err();

        match err {
            crate::AirtableError::Api {
                status_code,
                message,
            } => {
                assert_eq!(status_code, 500);
                assert_eq!(message, "upstream broke");
            }
            other => panic!("expected Api error, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_empty_table_returns_no_records() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/appTest/tbl1"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"records": []})))
            .expect(1)
            .mount(&server)
            .await;

        let records = client_for(&server)
            .list_records("appTest", "tbl1", None)
            .await
            .unwrap();

        assert!(records.is_empty());
    }
}
