//! Arbeitnow adapter. The feed wraps its postings in a `data` field next
//! to pagination metadata.

use async_trait::async_trait;
use serde_json::Value;
use tracing::warn;

use super::JobSource;

pub const ARBEITNOW_URL: &str = "https://www.arbeitnow.com/api/job-board-api";

pub struct ArbeitnowSource {
    client: reqwest::Client,
    url: String,
}

impl ArbeitnowSource {
    pub fn new(client: reqwest::Client) -> Self {
        Self::with_url(client, ARBEITNOW_URL.to_string())
    }

    pub fn with_url(client: reqwest::Client, url: String) -> Self {
        Self { client, url }
    }

    async fn fetch_feed(&self) -> Result<Value, reqwest::Error> {
        self.client.get(&self.url).send().await?.json().await
    }
}

/// Extracts the `data` list; a missing or non-list field means the feed
/// shape changed upstream and yields an empty batch.
fn unwrap_feed(mut feed: Value) -> Vec<Value> {
    match feed.get_mut("data").map(Value::take) {
        Some(Value::Array(items)) => items,
        _ => Vec::new(),
    }
}

#[async_trait]
impl JobSource for ArbeitnowSource {
    fn name(&self) -> &'static str {
        "arbeitnow"
    }

    async fn fetch(&self) -> Vec<Value> {
        match self.fetch_feed().await {
            Ok(feed) => unwrap_feed(feed),
            Err(e) => {
                warn!("arbeitnow fetch failed: {e}");
                Vec::new()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_unwrap_feed_extracts_data_list() {
        let feed = json!({
            "data": [{"title": "Engineer", "company_name": "Acme"}],
            "links": {"next": null},
        });
        let postings = unwrap_feed(feed);
        assert_eq!(postings.len(), 1);
        assert_eq!(postings[0]["title"], "Engineer");
    }

    #[test]
    fn test_unwrap_feed_without_data_is_empty() {
        assert!(unwrap_feed(json!({"error": "maintenance"})).is_empty());
        assert!(unwrap_feed(json!({"data": "not a list"})).is_empty());
        assert!(unwrap_feed(json!([])).is_empty());
    }
}
