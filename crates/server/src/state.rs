use airtable::AirtableClient;
use reqwest::Client;
use std::sync::Arc;

use crate::config::Config;
use crate::services::FeedService;

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub http_client: Client,
    pub feed: Arc<FeedService>,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        let http_client = Client::new();
        let config = Arc::new(config);

        // Without a token there is no client; the feed service then rejects
        // every request before any fetch.
        let airtable = config.token.as_ref().map(|token| {
            Arc::new(AirtableClient::with_api_url(
                http_client.clone(),
                token.clone(),
                config.api_url.clone(),
            ))
        });

        let feed = Arc::new(FeedService::new(Arc::clone(&config), airtable));

        Self {
            config,
            http_client,
            feed,
        }
    }
}
