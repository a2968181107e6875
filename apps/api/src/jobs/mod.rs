// Upstream job source adapters. Each adapter owns one provider's envelope
// quirks and swallows its own failures: a broken source contributes an
// empty batch, never an error, so partial upstream outages cannot abort a
// match cycle.

pub mod arbeitnow;
pub mod handlers;
pub mod remote_ok;

use async_trait::async_trait;
use serde_json::Value;
use tracing::{debug, info};

use crate::matching::matcher::NormalizedPosting;

pub use arbeitnow::ArbeitnowSource;
pub use remote_ok::RemoteOkSource;

/// One upstream posting provider.
#[async_trait]
pub trait JobSource: Send + Sync {
    fn name(&self) -> &'static str;

    /// Fetches one batch of raw postings. Infallible by contract:
    /// transport and decode failures are logged inside the adapter and
    /// yield an empty batch.
    async fn fetch(&self) -> Vec<Value>;
}

/// Fetches every source in turn and normalizes the concatenated batch,
/// dropping records that lack minimal identity.
pub async fn fetch_postings(sources: &[Box<dyn JobSource>]) -> Vec<NormalizedPosting> {
    let mut raw = Vec::new();
    for source in sources {
        let batch = source.fetch().await;
        info!("fetched {} postings from {}", batch.len(), source.name());
        raw.extend(batch);
    }

    let total = raw.len();
    let postings: Vec<NormalizedPosting> = raw
        .into_iter()
        .filter_map(NormalizedPosting::from_raw)
        .collect();
    if postings.len() < total {
        debug!(
            "dropped {} postings lacking title/company",
            total - postings.len()
        );
    }
    postings
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    struct StaticSource(Vec<Value>);

    #[async_trait]
    impl JobSource for StaticSource {
        fn name(&self) -> &'static str {
            "static"
        }

        async fn fetch(&self) -> Vec<Value> {
            self.0.clone()
        }
    }

    #[tokio::test]
    async fn test_fetch_postings_concatenates_and_filters() {
        let sources: Vec<Box<dyn JobSource>> = vec![
            Box::new(StaticSource(vec![
                json!({"title": "Engineer", "company": "Acme"}),
                json!({"description": "no identity here"}),
            ])),
            Box::new(StaticSource(vec![json!({
                "position": "Nurse",
                "company_name": "Clinic",
            })])),
        ];
        let postings = fetch_postings(&sources).await;
        assert_eq!(postings.len(), 2);
        assert_eq!(postings[0].title.as_deref(), Some("Engineer"));
        assert_eq!(postings[1].title.as_deref(), Some("Nurse"));
    }

    #[tokio::test]
    async fn test_fetch_postings_with_no_sources_is_empty() {
        let sources: Vec<Box<dyn JobSource>> = Vec::new();
        assert!(fetch_postings(&sources).await.is_empty());
    }
}
