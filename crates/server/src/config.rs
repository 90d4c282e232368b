use serde::{Deserialize, Serialize};

/// Base the feed pulls its tables from, see airtable.com/{base_id}/...
pub const DEFAULT_BASE_ID: &str = "appW2SWPgF4UpXNlX";

/// One table contributing records to the feed, labeled by section name.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Source {
    pub name: String,
    pub table: String,
    pub view: Option<String>,
}

impl Source {
    pub fn new(name: &str, table: &str, view: Option<&str>) -> Self {
        Self {
            name: name.to_string(),
            table: table.to_string(),
            view: view.map(str::to_string),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Airtable personal access token. When unset the feed endpoint answers
    /// 500 without touching the network.
    pub token: Option<String>,
    pub base_id: String,
    pub api_url: String,
    /// Registry of feed sources, fetched in declaration order.
    pub sources: Vec<Source>,
}

impl Config {
    pub fn new(token: Option<String>) -> Self {
        Self {
            token,
            base_id: DEFAULT_BASE_ID.to_string(),
            api_url: airtable::DEFAULT_API_URL.to_string(),
            sources: default_sources(),
        }
    }
}

/// The section tabs republished into the feed. Table/view identifiers are not
/// validated here; a bad one only shows up as a fetch failure.
pub fn default_sources() -> Vec<Source> {
    vec![
        Source::new("Inspiration", "tbl7X4PErUG8qyhDz", Some("API Full")),
        // Further tabs, pending their API views:
        // Source::new("Tutorials", "Tutorials", None),
        // Source::new("Templates", "Templates", None),
        // Source::new("Behind the Scenes", "Behind the Scenes", None),
        // Source::new("Courses", "Courses", None),
        // Source::new("Quarterly Workshops", "Quarterly Workshops", None),
    ]
}
