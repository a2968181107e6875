//! One end-to-end match cycle: classify, fetch, match. Every trigger
//! (resume upload, manual fetch, scheduler) goes through here so the
//! callers cannot drift apart. Stateless between invocations.

use tracing::info;

use crate::jobs;
use crate::matching::matcher::MatchResult;
use crate::matching::profession::Profession;
use crate::state::AppState;

pub struct CycleOutcome {
    pub profession: Profession,
    pub skills: Vec<String>,
    pub matches: Vec<MatchResult>,
}

/// Runs one match cycle for an already-extracted skill set. `resume_text`
/// may be empty; classification then falls back to `general`.
pub async fn run_cycle(state: &AppState, skills: Vec<String>, resume_text: &str) -> CycleOutcome {
    let profession = state.classifier.classify(resume_text);
    let postings = jobs::fetch_postings(&state.sources).await;
    info!(
        "match cycle: profession={profession} skills={} postings={}",
        skills.len(),
        postings.len()
    );

    let matches = state.matcher.run(&skills, profession, &postings);
    info!("match cycle produced {} results", matches.len());

    CycleOutcome {
        profession,
        skills,
        matches,
    }
}
