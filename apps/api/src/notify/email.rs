//! SMTP announcement delivery. Single-mailbox deployment: announcements
//! go to the configured account itself. Submission authenticates with the
//! configured credentials; TLS termination is left to the endpoint the
//! host points at, since the transport is handed a plain TCP stream.

use std::time::Duration;

use async_smtp::authentication::{Credentials, Mechanism};
use async_smtp::{Envelope, SendableEmail, SmtpClient, SmtpTransport};
use tokio::io::BufStream;
use tokio::net::TcpStream;
use tracing::{info, warn};

use crate::config::SmtpConfig;
use crate::matching::matcher::MatchResult;

const SEND_TIMEOUT: Duration = Duration::from_secs(10);

/// Sends one match announcement. Returns whether the message was handed
/// to the relay; failures are logged, never raised.
pub async fn send_match_email(smtp: &SmtpConfig, result: &MatchResult) -> bool {
    match deliver(smtp, result).await {
        Ok(()) => {
            info!("match email sent for '{}'", result.title);
            true
        }
        Err(e) => {
            warn!("email send failed: {e}");
            false
        }
    }
}

async fn deliver(smtp: &SmtpConfig, result: &MatchResult) -> anyhow::Result<()> {
    let subject = format!("New job: {} @ {}", result.title, result.company);
    let body = format!(
        "Found a job matching your skills: {}\r\n\r\nLink: {}",
        result.matched_skills.join(", "),
        result.url.as_deref().unwrap_or("-"),
    );
    let message = format!(
        "From: {from}\r\nTo: {from}\r\nSubject: {subject}\r\n\r\n{body}",
        from = smtp.user,
    );

    let email = SendableEmail::new(
        Envelope::new(Some(smtp.user.parse()?), vec![smtp.user.parse()?])?,
        message,
    );

    let stream = tokio::time::timeout(
        SEND_TIMEOUT,
        TcpStream::connect((smtp.host.as_str(), smtp.port)),
    )
    .await??;

    let client = SmtpClient::new();
    let mut transport = SmtpTransport::new(client, BufStream::new(stream)).await?;
    let credentials = Credentials::new(smtp.user.clone(), smtp.pass.clone());
    transport
        .try_login(&credentials, &[Mechanism::Plain, Mechanism::Login])
        .await?;
    tokio::time::timeout(SEND_TIMEOUT, transport.send(email)).await??;
    transport.quit().await.ok();
    Ok(())
}
