use anyhow::{Context, Result};

/// Application configuration loaded from environment variables. Optional
/// subsystems (inference, email, telegram) stay disabled when their
/// variables are absent.
#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub anthropic_api_key: Option<String>,
    pub schedule_interval_minutes: u64,
    pub smtp: Option<SmtpConfig>,
    pub telegram: Option<TelegramConfig>,
    pub port: u16,
    pub rust_log: String,
}

#[derive(Debug, Clone)]
pub struct SmtpConfig {
    pub host: String,
    pub port: u16,
    pub user: String,
    pub pass: String,
}

#[derive(Debug, Clone)]
pub struct TelegramConfig {
    pub bot_token: String,
    pub chat_id: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            database_url: require_env("DATABASE_URL")?,
            anthropic_api_key: optional_env("ANTHROPIC_API_KEY"),
            schedule_interval_minutes: std::env::var("SCHEDULE_INTERVAL_MINUTES")
                .unwrap_or_else(|_| "360".to_string())
                .parse::<u64>()
                .context("SCHEDULE_INTERVAL_MINUTES must be a number of minutes")?,
            smtp: smtp_from_env()?,
            telegram: telegram_from_env(),
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
        })
    }
}

fn require_env(key: &str) -> Result<String> {
    std::env::var(key).with_context(|| format!("Required environment variable '{key}' is not set"))
}

fn optional_env(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|v| !v.is_empty())
}

/// Email is enabled only when host, user, and pass are all present.
fn smtp_from_env() -> Result<Option<SmtpConfig>> {
    let (host, user, pass) = match (
        optional_env("SMTP_HOST"),
        optional_env("SMTP_USER"),
        optional_env("SMTP_PASS"),
    ) {
        (Some(host), Some(user), Some(pass)) => (host, user, pass),
        _ => return Ok(None),
    };
    let port = std::env::var("SMTP_PORT")
        .unwrap_or_else(|_| "587".to_string())
        .parse::<u16>()
        .context("SMTP_PORT must be a valid port number")?;
    Ok(Some(SmtpConfig {
        host,
        port,
        user,
        pass,
    }))
}

fn telegram_from_env() -> Option<TelegramConfig> {
    Some(TelegramConfig {
        bot_token: optional_env("TELEGRAM_BOT_TOKEN")?,
        chat_id: optional_env("TELEGRAM_CHAT_ID")?,
    })
}
