use airtable::{AirtableClient, Record};
use chrono::{SecondsFormat, Utc};
use rss::{ChannelBuilder, Item, ItemBuilder};
use std::sync::Arc;

use crate::config::{Config, Source};
use crate::error::{AppError, AppResult};

const FEED_TITLE: &str = "Idea Engine - All Content RSS Feed (Debug Mode)";
const FEED_LINK: &str = "https://airtable-rss-feed.vercel.app/rss-all.xml";
const FEED_TAGLINE: &str = "Live combined feed from Airtable Idea Engine";

/// Outcome of fetching one source. A failed source degrades to zero items
/// rather than aborting the feed; the failure text ends up in the channel's
/// debug description.
#[derive(Debug)]
pub enum SourceOutcome {
    Fetched(Vec<Record>),
    Failed(String),
}

#[derive(Debug)]
pub struct SourceFetch {
    pub source: Source,
    pub outcome: SourceOutcome,
}

/// Builds the combined feed: fetches every registry source in order and
/// renders the aggregate as an RSS 2.0 document.
pub struct FeedService {
    config: Arc<Config>,
    airtable: Option<Arc<AirtableClient>>,
}

impl FeedService {
    pub fn new(config: Arc<Config>, airtable: Option<Arc<AirtableClient>>) -> Self {
        Self { config, airtable }
    }

    pub async fn build_feed(&self) -> AppResult<String> {
        let Some(airtable) = &self.airtable else {
            return Err(AppError::TokenNotSet);
        };
        let fetches = self.fetch_all(airtable).await;
        Ok(render_feed(&fetches))
    }

    /// Fetch every source sequentially, one full paginated fetch completing
    /// before the next source begins.
    async fn fetch_all(&self, airtable: &AirtableClient) -> Vec<SourceFetch> {
        let mut fetches = Vec::with_capacity(self.config.sources.len());

        for source in &self.config.sources {
            let outcome = match airtable
                .list_records(&self.config.base_id, &source.table, source.view.as_deref())
                .await
            {
                Ok(records) => {
                    tracing::debug!(
                        "Fetched {} records for section '{}'",
                        records.len(),
                        source.name
                    );
                    SourceOutcome::Fetched(records)
                }
                Err(e) => {
                    tracing::warn!("Failed to fetch section '{}': {}", source.name, e);
                    SourceOutcome::Failed(e.to_string())
                }
            };
            fetches.push(SourceFetch {
                source: source.clone(),
                outcome,
            });
        }

        fetches
    }
}

fn render_feed(fetches: &[SourceFetch]) -> String {
    let mut debug_lines = Vec::new();
    let mut items = Vec::new();

    for fetch in fetches {
        let source = &fetch.source;
        debug_lines.push(format!(
            "Fetching section '{}' from table/ID '{}' (view: {})",
            source.name,
            source.table,
            source.view.as_deref().unwrap_or("None")
        ));
        match &fetch.outcome {
            SourceOutcome::Fetched(records) => {
                debug_lines.push(format!(
                    "Fetched {} records from '{}'",
                    records.len(),
                    source.table
                ));
                for record in records {
                    items.push(render_item(&source.name, record));
                }
            }
            SourceOutcome::Failed(message) => {
                debug_lines.push(format!("Error fetching '{}': {}", source.table, message));
            }
        }
    }

    let debug_text = if debug_lines.is_empty() {
        "No debug info".to_string()
    } else {
        debug_lines.join("\n")
    };

    let channel = ChannelBuilder::default()
        .title(FEED_TITLE)
        .link(FEED_LINK)
        .description(format!(
            "Debug info:\n{}\n\n{}",
            debug_text, FEED_TAGLINE
        ))
        .items(items)
        .build();

    channel.to_string()
}

fn render_item(section: &str, record: &Record) -> Item {
    let title = record.field_str("A Idea").unwrap_or("Untitled");
    let why = record.field_str("Why it works").unwrap_or("N/A");
    let created = record.field_str("Created");

    ItemBuilder::default()
        .title(format!("[{}] {}", section, title))
        .description(format!(
            "Why it works: {}\nCreated: {}",
            why,
            created.unwrap_or("N/A")
        ))
        .pub_date(created.map(str::to_owned).unwrap_or_else(|| {
            Utc::now().to_rfc3339_opts(SecondsFormat::Micros, true)
        }))
        .build()
}
