// Notification dispatchers for newly matched postings. Both channels are
// optional: an unconfigured channel is skipped with a log line, and
// delivery failures are reported but never propagated.

pub mod email;
pub mod telegram;

use tracing::debug;

use crate::config::{Config, SmtpConfig, TelegramConfig};
use crate::matching::matcher::MatchResult;

pub struct Notifier {
    smtp: Option<SmtpConfig>,
    telegram: Option<TelegramConfig>,
    client: reqwest::Client,
}

impl Notifier {
    pub fn new(config: &Config, client: reqwest::Client) -> Self {
        Self {
            smtp: config.smtp.clone(),
            telegram: config.telegram.clone(),
            client,
        }
    }

    /// Sends one announcement per configured channel. Each channel logs
    /// its own failures; nothing is returned to the caller.
    pub async fn announce(&self, result: &MatchResult) {
        match &self.smtp {
            Some(smtp) => {
                email::send_match_email(smtp, result).await;
            }
            None => debug!("smtp not configured - skipping email"),
        }
        match &self.telegram {
            Some(telegram) => {
                telegram::send_match_message(&self.client, telegram, result).await;
            }
            None => debug!("telegram not configured - skipping telegram"),
        }
    }
}
