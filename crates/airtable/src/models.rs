use serde::Deserialize;
use serde_json::{Map, Value};

/// One row fetched from an Airtable table.
#[derive(Debug, Clone, Deserialize)]
pub struct Record {
    pub id: String,
    /// Field values keyed by column name. Airtable omits empty cells
    /// entirely, so absence means "no value".
    #[serde(default)]
    pub fields: Map<String, Value>,
    #[serde(rename = "createdTime", default)]
    pub created_time: Option<String>,
}

impl Record {
    /// Get a field as a string, if present and string-valued.
    pub fn field_str(&self, name: &str) -> Option<&str> {
        self.fields.get(name).and_then(Value::as_str)
    }
}

/// Response body of the list-records endpoint.
/// `offset` is the pagination cursor; absent on the last page.
#[derive(Debug, Deserialize)]
pub struct ListRecordsResponse {
    #[serde(default)]
    pub records: Vec<Record>,
    #[serde(default)]
    pub offset: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_field_str() {
        let record: Record = serde_json::from_value(json!({
            "id": "rec1",
            "fields": {"A Idea": "Launch a newsletter", "Votes": 3},
            "createdTime": "2024-05-01T09:30:00.000Z"
        }))
        .unwrap();

        assert_eq!(record.field_str("A Idea"), Some("Launch a newsletter"));
        assert_eq!(record.field_str("Votes"), None);
        assert_eq!(record.field_str("Missing"), None);
    }

    #[test]
    fn test_empty_fields_default() {
        let record: Record = serde_json::from_value(json!({"id": "rec2"})).unwrap();
        assert!(record.fields.is_empty());
        assert!(record.created_time.is_none());
    }
}
