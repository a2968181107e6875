//! Periodic background trigger. Runs the same match cycle as the HTTP
//! callers, with empty input, and logs the outcome. The core stays
//! trigger-agnostic; this loop is just another caller on a timer.

use std::time::Duration;

use tracing::info;

use crate::pipeline;
use crate::state::AppState;

pub fn spawn(state: AppState) {
    let period = Duration::from_secs(state.config.schedule_interval_minutes * 60);
    info!(
        "scheduler armed: fetching every {} minutes",
        state.config.schedule_interval_minutes
    );
    tokio::spawn(async move {
        loop {
            tokio::time::sleep(period).await;
            info!("scheduled fetch running");
            let outcome = pipeline::run_cycle(&state, Vec::new(), "").await;
            info!("scheduled fetch matched {} postings", outcome.matches.len());
        }
    });
}
