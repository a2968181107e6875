//! Matcher/ranker: filters normalized postings through a profession gate
//! and annotates survivors with the skills they mention.
//!
//! The whole pipeline is a pure function of its inputs; one call handles
//! one match cycle and nothing is retained between cycles.

use serde::Serialize;
use serde_json::Value;

use crate::matching::normalize::normalize;
use crate::matching::profession::Profession;

/// How many results one match cycle may return.
pub const RESULT_CAP: usize = 20;

/// Canonical read-only view over one upstream posting. Upstream providers
/// disagree on field names, so construction resolves the known variants
/// once and downstream code never looks at the raw record again.
#[derive(Debug, Clone)]
pub struct NormalizedPosting {
    pub title: Option<String>,
    pub company: Option<String>,
    pub url: Option<String>,
    /// Lowercased title + description + tags, markup stripped.
    pub search_text: String,
    pub raw: Value,
}

impl NormalizedPosting {
    /// Returns None when the record lacks minimal identity: neither a
    /// title nor a company under any known field name.
    pub fn from_raw(raw: Value) -> Option<Self> {
        let title = first_string(&raw, &["title", "position"]);
        let company = first_string(&raw, &["company", "company_name"]);
        if title.is_none() && company.is_none() {
            return None;
        }

        let url = first_string(&raw, &["url", "apply_url", "url_original", "path"]);
        let description = raw
            .get("description")
            .and_then(Value::as_str)
            .unwrap_or_default();
        let tags = joined_tags(&raw);
        let search_text = normalize(&format!(
            "{} {} {}",
            title.as_deref().unwrap_or_default(),
            description,
            tags
        ));

        Some(Self {
            title,
            company,
            url,
            search_text,
            raw,
        })
    }
}

fn first_string(raw: &Value, keys: &[&str]) -> Option<String> {
    keys.iter().find_map(|key| {
        raw.get(*key)
            .and_then(Value::as_str)
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_string)
    })
}

/// Joins a `tags` field into one space-separated string. Some providers
/// ship non-string members in the list; those are rendered through their
/// JSON form rather than dropped.
fn joined_tags(raw: &Value) -> String {
    match raw.get("tags") {
        Some(Value::Array(items)) => items
            .iter()
            .map(|tag| match tag {
                Value::String(s) => s.clone(),
                other => other.to_string(),
            })
            .collect::<Vec<_>>()
            .join(" "),
        Some(Value::String(s)) => s.clone(),
        Some(other) => other.to_string(),
        None => String::new(),
    }
}

/// One posting that survived the profession gate. `matched_skills` is an
/// ordered subsequence of the input skill set; it may be empty, since a
/// profession match alone justifies inclusion.
#[derive(Debug, Clone, Serialize)]
pub struct MatchResult {
    pub title: String,
    pub company: String,
    pub url: Option<String>,
    pub matched_skills: Vec<String>,
    pub raw: Value,
}

const GATE_SOFTWARE: &[&str] = &[
    "developer", "engineer", "software", "python", "java", "react", "node", "frontend",
    "backend",
];
const GATE_DOCTOR: &[&str] = &[
    "doctor", "medical", "clinic", "hospital", "physician", "healthcare", "nurse", "surgeon",
];
const GATE_LAWYER: &[&str] = &["legal", "lawyer", "attorney", "court", "litigation"];
const GATE_ARCHITECT: &[&str] = &[
    "architect", "autocad", "civil", "construction", "structural", "interior",
];
const GATE_TEACHER: &[&str] = &["teacher", "faculty", "education", "school", "trainer"];
const GATE_MARKETING: &[&str] = &["marketing", "seo", "brand", "advertising", "digital"];
const GATE_FINANCE: &[&str] = &["finance", "accounting", "audit", "banking", "investment"];

/// Profession gate keyword lists plus the result cap, injected at
/// construction. `General` has no gate keywords: it only passes postings
/// through the relaxation rule.
#[derive(Debug, Clone)]
pub struct Matcher {
    gate: Vec<(Profession, Vec<String>)>,
    cap: usize,
}

impl Default for Matcher {
    fn default() -> Self {
        let owned = |words: &[&str]| words.iter().map(|w| w.to_string()).collect();
        Self::new(
            vec![
                (Profession::Software, owned(GATE_SOFTWARE)),
                (Profession::Doctor, owned(GATE_DOCTOR)),
                (Profession::Lawyer, owned(GATE_LAWYER)),
                (Profession::Architect, owned(GATE_ARCHITECT)),
                (Profession::Teacher, owned(GATE_TEACHER)),
                (Profession::Marketing, owned(GATE_MARKETING)),
                (Profession::Finance, owned(GATE_FINANCE)),
            ],
            RESULT_CAP,
        )
    }
}

impl Matcher {
    pub fn new(gate: Vec<(Profession, Vec<String>)>, cap: usize) -> Self {
        Self { gate, cap }
    }

    fn gate_keywords(&self, profession: Profession) -> &[String] {
        self.gate
            .iter()
            .find(|(p, _)| *p == profession)
            .map(|(_, words)| words.as_slice())
            .unwrap_or(&[])
    }

    /// Runs one match cycle over an already-normalized posting batch.
    ///
    /// Per posting: the profession gate checks whether any gate keyword of
    /// the detected profession appears in the search text. A non-software
    /// profession with an empty skill set forces the gate open, so
    /// non-technical resumes with no extracted vocabulary still match on
    /// profession alone. Survivors are annotated with the subsequence of
    /// `skills` present in their search text and returned in encounter
    /// order, capped.
    pub fn run(
        &self,
        skills: &[String],
        profession: Profession,
        postings: &[NormalizedPosting],
    ) -> Vec<MatchResult> {
        let keywords = self.gate_keywords(profession);
        let relax = profession != Profession::Software && skills.is_empty();

        let mut results = Vec::new();
        for posting in postings {
            if results.len() == self.cap {
                break;
            }

            let passes = relax
                || keywords
                    .iter()
                    .any(|k| posting.search_text.contains(k.as_str()));
            if !passes {
                continue;
            }

            let matched_skills: Vec<String> = skills
                .iter()
                .filter(|s| posting.search_text.contains(&s.to_lowercase()))
                .cloned()
                .collect();

            results.push(MatchResult {
                title: posting
                    .title
                    .clone()
                    .unwrap_or_else(|| "Unknown Role".to_string()),
                company: posting
                    .company
                    .clone()
                    .unwrap_or_else(|| "Unknown".to_string()),
                url: posting.url.clone(),
                matched_skills,
                raw: posting.raw.clone(),
            });
        }
        results
    }
}
