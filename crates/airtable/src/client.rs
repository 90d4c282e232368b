use reqwest::Client;

pub const DEFAULT_API_URL: &str = "https://api.airtable.com/v0";

pub struct AirtableClient {
    client: Client,
    token: String,
    api_url: String,
}

impl AirtableClient {
    /// Create an AirtableClient with a reqwest Client and a personal access token.
    pub fn new(client: Client, token: impl Into<String>) -> Self {
        Self::with_api_url(client, token, DEFAULT_API_URL)
    }

    /// Create an AirtableClient pointed at a non-default API endpoint.
    pub fn with_api_url(
        client: Client,
        token: impl Into<String>,
        api_url: impl Into<String>,
    ) -> Self {
        Self {
            client,
            token: token.into(),
            api_url: api_url.into(),
        }
    }

    /// Get the HTTP client for making requests.
    pub(crate) fn client(&self) -> &Client {
        &self.client
    }

    /// Get the bearer token sent with every request.
    pub(crate) fn token(&self) -> &str {
        &self.token
    }

    pub(crate) fn url(&self, path: &str) -> String {
        format!("{}{}", self.api_url, path)
    }

    pub(crate) async fn handle_response<T: serde::de::DeserializeOwned>(
        &self,
        response: reqwest::Response,
    ) -> crate::Result<T> {
        let status = response.status();
        let body = response.text().await?;
        if !status.is_success() {
            return Err(crate::AirtableError::Api {
                status_code: status.as_u16(),
                message: body,
            });
        }
        let deserializer = &mut serde_json::Deserializer::from_str(&body);
        serde_path_to_error::deserialize(deserializer).map_err(|e| crate::AirtableError::Json {
            path: e.path().to_string(),
            source: e.into_inner(),
        })
    }
}
