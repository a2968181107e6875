//! Telegram bot announcement delivery.

use serde_json::json;
use tracing::{info, warn};

use crate::config::TelegramConfig;
use crate::matching::matcher::MatchResult;

/// Sends one match announcement to the configured chat. Returns whether
/// the API accepted it; failures are logged, never raised.
pub async fn send_match_message(
    client: &reqwest::Client,
    telegram: &TelegramConfig,
    result: &MatchResult,
) -> bool {
    let url = format!(
        "https://api.telegram.org/bot{}/sendMessage",
        telegram.bot_token
    );
    let text = format!(
        "New job: {} @ {}\nSkills: {}\n{}",
        result.title,
        result.company,
        result.matched_skills.join(", "),
        result.url.as_deref().unwrap_or("-"),
    );

    let sent = client
        .post(&url)
        .json(&json!({ "chat_id": telegram.chat_id, "text": text }))
        .send()
        .await;

    match sent {
        Ok(response) if response.status().is_success() => {
            info!("telegram announcement sent for '{}'", result.title);
            true
        }
        Ok(response) => {
            warn!("telegram api returned {}", response.status());
            false
        }
        Err(e) => {
            warn!("telegram send failed: {e}");
            false
        }
    }
}
