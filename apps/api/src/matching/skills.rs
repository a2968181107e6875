//! Skill extraction: a two-tier strategy behind one trait.
//!
//! The primary tier asks the inference service for a JSON array of skill
//! strings; any failure there (transport, auth, malformed reply) degrades
//! to a static vocabulary scan. Callers never see an error from either
//! tier: the worst case is an empty list.

use std::collections::HashSet;

use async_trait::async_trait;
use tracing::warn;

use crate::llm_client::prompts::{SKILL_EXTRACT_PROMPT, SKILL_EXTRACT_SYSTEM};
use crate::llm_client::{strip_code_fences, LlmClient};

/// Produces an ordered, deduplicated sequence of lowercase skill tokens
/// from resume text. Implementations must not fail.
///
/// Carried in `AppState` as `Arc<dyn SkillExtractor>`.
#[async_trait]
pub trait SkillExtractor: Send + Sync {
    async fn extract(&self, text: &str) -> Vec<String>;
}

const FALLBACK_VOCABULARY: &[&str] = &[
    "python",
    "java",
    "c++",
    "javascript",
    "react",
    "node",
    "flask",
    "django",
    "sql",
    "mongodb",
    "aws",
    "docker",
    "kubernetes",
    "html",
    "css",
    "tensorflow",
    "pytorch",
];

/// Fallback tier: a fixed vocabulary scanned for substring presence.
/// Output follows vocabulary order, so no duplicates are possible.
pub struct KeywordSkillExtractor {
    vocabulary: Vec<String>,
}

impl KeywordSkillExtractor {
    pub fn new(vocabulary: Vec<String>) -> Self {
        Self { vocabulary }
    }
}

impl Default for KeywordSkillExtractor {
    fn default() -> Self {
        Self::new(FALLBACK_VOCABULARY.iter().map(|s| s.to_string()).collect())
    }
}

#[async_trait]
impl SkillExtractor for KeywordSkillExtractor {
    async fn extract(&self, text: &str) -> Vec<String> {
        if text.trim().is_empty() {
            return Vec::new();
        }
        let haystack = text.to_lowercase();
        self.vocabulary
            .iter()
            .filter(|skill| haystack.contains(skill.as_str()))
            .cloned()
            .collect()
    }
}

/// Primary tier: one inference call per resume, with the keyword scan as
/// the recovery path for every failure mode.
pub struct LlmSkillExtractor {
    llm: LlmClient,
    fallback: KeywordSkillExtractor,
}

impl LlmSkillExtractor {
    pub fn new(llm: LlmClient, fallback: KeywordSkillExtractor) -> Self {
        Self { llm, fallback }
    }
}

#[async_trait]
impl SkillExtractor for LlmSkillExtractor {
    async fn extract(&self, text: &str) -> Vec<String> {
        if text.trim().is_empty() {
            return Vec::new();
        }
        let prompt = SKILL_EXTRACT_PROMPT.replace("{resume_text}", text);
        match self.llm.call_text(&prompt, SKILL_EXTRACT_SYSTEM).await {
            Ok(reply) => match parse_skill_array(&reply) {
                Some(skills) => skills,
                None => {
                    warn!("inference reply was not a JSON skill array; using keyword fallback");
                    self.fallback.extract(text).await
                }
            },
            Err(e) => {
                warn!("skill inference failed ({e}); using keyword fallback");
                self.fallback.extract(text).await
            }
        }
    }
}

/// Parses an inference reply as a JSON array, keeping only string
/// elements. Tokens are lowercased and trimmed; first occurrence wins.
/// Returns None when the reply is not a JSON array at all.
fn parse_skill_array(reply: &str) -> Option<Vec<String>> {
    let value: serde_json::Value = serde_json::from_str(strip_code_fences(reply)).ok()?;
    let items = value.as_array()?;

    let mut seen = HashSet::new();
    let mut skills = Vec::new();
    for item in items {
        if let Some(s) = item.as_str() {
            let token = s.trim().to_lowercase();
            if !token.is_empty() && seen.insert(token.clone()) {
                skills.push(token);
            }
        }
    }
    Some(skills)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_keyword_extraction_follows_vocabulary_order() {
        let extractor = KeywordSkillExtractor::default();
        let skills = extractor
            .extract("I know Python and React and AWS")
            .await;
        assert_eq!(skills, vec!["python", "react", "aws"]);
    }

    #[tokio::test]
    async fn test_keyword_extraction_dedupes_repeated_mentions() {
        let extractor = KeywordSkillExtractor::default();
        let skills = extractor.extract("docker docker docker").await;
        assert_eq!(skills, vec!["docker"]);
    }

    #[tokio::test]
    async fn test_empty_text_yields_no_skills() {
        let extractor = KeywordSkillExtractor::default();
        assert!(extractor.extract("").await.is_empty());
        assert!(extractor.extract("  \n ").await.is_empty());
    }

    #[tokio::test]
    async fn test_custom_vocabulary_is_respected() {
        let extractor =
            KeywordSkillExtractor::new(vec!["rust".to_string(), "tokio".to_string()]);
        let skills = extractor.extract("Tokio and Rust services").await;
        assert_eq!(skills, vec!["rust", "tokio"]);
    }

    #[test]
    fn test_parse_skill_array_accepts_plain_array() {
        let skills = parse_skill_array(r#"["Python", " React ", "aws"]"#).unwrap();
        assert_eq!(skills, vec!["python", "react", "aws"]);
    }

    #[test]
    fn test_parse_skill_array_keeps_strings_only() {
        let skills = parse_skill_array(r#"["python", 42, null, {"x": 1}, "sql"]"#).unwrap();
        assert_eq!(skills, vec!["python", "sql"]);
    }

    #[test]
    fn test_parse_skill_array_dedupes_first_occurrence() {
        let skills = parse_skill_array(r#"["AWS", "python", "aws"]"#).unwrap();
        assert_eq!(skills, vec!["aws", "python"]);
    }

    #[test]
    fn test_parse_skill_array_rejects_non_array() {
        assert!(parse_skill_array(r#"{"skills": ["python"]}"#).is_none());
        assert!(parse_skill_array("not json at all").is_none());
    }

    #[test]
    fn test_parse_skill_array_strips_code_fences() {
        let skills = parse_skill_array("```json\n[\"python\"]\n```").unwrap();
        assert_eq!(skills, vec!["python"]);
    }
}
