//! Telegram delivery of new-application notifications.
//!
//! Fire-and-forget with explicit outcome capture: one POST per
//! dispatch, no retries, no backoff. Failures are recorded on the
//! application row and surfaced to admins, who can trigger a resend.
//! [`TelegramNotifier::notify`] never returns an error past its own
//! boundary.

use std::time::Duration;

use serde::Deserialize;

use bulltrade_db::models::application::Application;

use crate::config::TelegramConfig;

/// HTTP request timeout for a single delivery attempt.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// User-agent strings are unbounded; keep messages readable.
const USER_AGENT_MAX_CHARS: usize = 120;

/// Error recorded when delivery is attempted without credentials.
pub const ERR_NOT_CONFIGURED: &str = "Telegram not configured";

/// Result of one delivery attempt. `error` is `None` iff `sent`.
#[derive(Debug, Clone)]
pub struct DeliveryOutcome {
    pub sent: bool,
    pub error: Option<String>,
}

impl DeliveryOutcome {
    fn success() -> Self {
        Self {
            sent: true,
            error: None,
        }
    }

    fn failure(error: impl Into<String>) -> Self {
        Self {
            sent: false,
            error: Some(error.into()),
        }
    }
}

/// Response envelope of the Telegram Bot API.
#[derive(Debug, Deserialize)]
struct TelegramResponse {
    ok: bool,
    description: Option<String>,
}

/// Posts application notifications to a Telegram chat.
pub struct TelegramNotifier {
    client: reqwest::Client,
    config: Option<TelegramConfig>,
}

impl TelegramNotifier {
    /// Create a notifier. `None` config means every dispatch records
    /// a "not configured" failure without any network I/O.
    pub fn new(config: Option<TelegramConfig>) -> Self {
        let client = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .expect("Failed to build reqwest HTTP client");
        Self { client, config }
    }

    /// Whether bot credentials are present.
    pub fn is_configured(&self) -> bool {
        self.config.is_some()
    }

    /// Deliver a notification for the given application.
    pub async fn notify(&self, application: &Application) -> DeliveryOutcome {
        let Some(config) = &self.config else {
            tracing::warn!(
                application_id = application.id,
                "Telegram delivery skipped: TELEGRAM_BOT_TOKEN / TELEGRAM_CHAT_ID not set"
            );
            return DeliveryOutcome::failure(ERR_NOT_CONFIGURED);
        };

        let url = format!("{}/bot{}/sendMessage", config.api_base, config.bot_token);
        let payload = serde_json::json!({
            "chat_id": config.chat_id,
            "text": format_message(application),
            "parse_mode": "HTML",
        });

        let response = match self.client.post(&url).json(&payload).send().await {
            Ok(response) => response,
            Err(e) => {
                tracing::error!(application_id = application.id, error = %e, "Telegram request failed");
                return DeliveryOutcome::failure(e.to_string());
            }
        };

        match response.json::<TelegramResponse>().await {
            Ok(body) if body.ok => DeliveryOutcome::success(),
            Ok(body) => {
                let description = body
                    .description
                    .unwrap_or_else(|| "Telegram API error".to_string());
                tracing::error!(
                    application_id = application.id,
                    error = %description,
                    "Telegram API rejected the message"
                );
                DeliveryOutcome::failure(description)
            }
            Err(e) => {
                tracing::error!(application_id = application.id, error = %e, "Unreadable Telegram response");
                DeliveryOutcome::failure(e.to_string())
            }
        }
    }
}

/// Render the fixed-format HTML notification message.
fn format_message(application: &Application) -> String {
    let mut message = format!(
        "🎯 <b>Нова заявка на сайті BULL Trading!</b>\n\n\
         👤 <b>Ім'я:</b> {}\n\
         📱 <b>Телефон:</b> {}\n\
         📧 <b>Email:</b> {}\n\n\
         🕐 <b>Дата:</b> {}",
        application.name,
        application.phone,
        application.email,
        application.created_at.format("%d.%m.%Y %H:%M UTC"),
    );

    if let Some(ip) = &application.ip_address {
        message.push_str(&format!("\n🌐 <b>IP:</b> {ip}"));
    }
    if let Some(user_agent) = &application.user_agent {
        message.push_str(&format!(
            "\n🖥 <b>User-Agent:</b> {}",
            truncate_chars(user_agent, USER_AGENT_MAX_CHARS)
        ));
    }
    if let Some(referer) = &application.referer {
        message.push_str(&format!("\n🔗 <b>Referer:</b> {referer}"));
    }

    message.push_str("\n\n#новазаявка #bulltrading");
    message
}

/// Truncate to at most `max` characters, appending an ellipsis.
fn truncate_chars(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        s.to_string()
    } else {
        let truncated: String = s.chars().take(max).collect();
        format!("{truncated}…")
    }
}
