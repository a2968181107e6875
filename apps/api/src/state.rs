use std::sync::Arc;

use sqlx::PgPool;

use crate::config::Config;
use crate::jobs::JobSource;
use crate::matching::matcher::Matcher;
use crate::matching::profession::ProfessionClassifier;
use crate::matching::skills::SkillExtractor;
use crate::notify::Notifier;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub db: PgPool,
    pub classifier: Arc<ProfessionClassifier>,
    /// Pluggable extractor: inference-backed when a key is configured,
    /// keyword fallback otherwise. Swapped at startup.
    pub extractor: Arc<dyn SkillExtractor>,
    pub matcher: Arc<Matcher>,
    pub sources: Arc<Vec<Box<dyn JobSource>>>,
    pub notifier: Arc<Notifier>,
    pub config: Config,
}
