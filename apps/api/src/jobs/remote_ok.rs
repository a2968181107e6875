//! RemoteOK adapter. The feed is a JSON list whose first element is a
//! metadata object, not a posting.

use async_trait::async_trait;
use serde_json::Value;
use tracing::warn;

use super::JobSource;

pub const REMOTE_OK_URL: &str = "https://remoteok.com/api";

pub struct RemoteOkSource {
    client: reqwest::Client,
    url: String,
}

impl RemoteOkSource {
    pub fn new(client: reqwest::Client) -> Self {
        Self::with_url(client, REMOTE_OK_URL.to_string())
    }

    pub fn with_url(client: reqwest::Client, url: String) -> Self {
        Self { client, url }
    }

    async fn fetch_feed(&self) -> Result<Value, reqwest::Error> {
        self.client.get(&self.url).send().await?.json().await
    }
}

/// Drops the metadata prefix. Anything that is not a list means the feed
/// shape changed upstream; treat it as empty.
fn unwrap_feed(feed: Value) -> Vec<Value> {
    match feed {
        Value::Array(items) => items.into_iter().skip(1).collect(),
        _ => Vec::new(),
    }
}

#[async_trait]
impl JobSource for RemoteOkSource {
    fn name(&self) -> &'static str {
        "remoteok"
    }

    async fn fetch(&self) -> Vec<Value> {
        match self.fetch_feed().await {
            Ok(feed) => unwrap_feed(feed),
            Err(e) => {
                warn!("remoteok fetch failed: {e}");
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
    fn test_unwrap_feed_drops_metadata_prefix() {
        let feed = json!([
            {"legal": "API terms"},
            {"title": "Engineer", "company": "Acme"},
            {"title": "Designer", "company": "Initech"},
        ]);
        let postings = unwrap_feed(feed);
        assert_eq!(postings.len(), 2);
        assert_eq!(postings[0]["title"], "Engineer");
    }

    #[test]
    fn test_unwrap_feed_of_only_metadata_is_empty() {
        assert!(unwrap_feed(json!([{"legal": "API terms"}])).is_empty());
        assert!(unwrap_feed(json!([])).is_empty());
    }

    #[test]
    fn test_unwrap_feed_rejects_non_list() {
        assert!(unwrap_feed(json!({"error": "rate limited"})).is_empty());
        assert!(unwrap_feed(json!("downtime")).is_empty());
    }
}
