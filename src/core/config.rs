use once_cell::sync::Lazy;
use std::env;
use std::time::Duration;
use teloxide::types::{ChatId, Recipient};

use crate::core::error::{AppError, AppResult};

/// Bot token
/// Read from BOT_TOKEN or TELOXIDE_TOKEN environment variable
pub static BOT_TOKEN: Lazy<String> = Lazy::new(|| {
    env::var("BOT_TOKEN")
        .or_else(|_| env::var("TELOXIDE_TOKEN"))
        .unwrap_or_else(|_| String::new())
});

/// Operator chat that receives lead notifications
/// Read from ADMIN_CHAT_ID environment variable (numeric chat id or @channel)
pub static ADMIN_CHAT_ID: Lazy<Option<String>> = Lazy::new(|| non_empty_var("ADMIN_CHAT_ID"));

/// Public base URL of the webhook endpoint, e.g. https://bot.example.com
/// Read from WEBHOOK_URL environment variable
pub static WEBHOOK_URL: Lazy<Option<String>> = Lazy::new(|| non_empty_var("WEBHOOK_URL"));

/// Secret token Telegram sends back in `X-Telegram-Bot-Api-Secret-Token`
/// Read from WEBHOOK_SECRET; a random one is generated per process otherwise
pub static WEBHOOK_SECRET: Lazy<String> =
    Lazy::new(|| non_empty_var("WEBHOOK_SECRET").unwrap_or_else(|| uuid::Uuid::new_v4().simple().to_string()));

/// Bind address for the webhook HTTP server
/// Default: 0.0.0.0
pub static HOST: Lazy<String> = Lazy::new(|| env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string()));

/// Bind port for the webhook HTTP server
/// Default: 8080
pub static PORT: Lazy<u16> = Lazy::new(|| env::var("PORT").ok().and_then(|v| v.parse().ok()).unwrap_or(8080));

/// Log file path
/// Read from LOG_FILE_PATH environment variable
/// Default: bot.log
pub static LOG_FILE_PATH: Lazy<String> =
    Lazy::new(|| env::var("LOG_FILE_PATH").unwrap_or_else(|_| "bot.log".to_string()));

fn non_empty_var(name: &str) -> Option<String> {
    env::var(name).ok().and_then(|value| {
        let trimmed = value.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(trimmed.to_string())
        }
    })
}

/// Parses an operator destination: a numeric chat id or a `@channel` username.
pub fn parse_recipient(raw: &str) -> Option<Recipient> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }
    match raw.parse::<i64>() {
        Ok(id) => Some(Recipient::Id(ChatId(id))),
        Err(_) if raw.starts_with('@') && raw.len() > 1 => Some(Recipient::ChannelUsername(raw.to_string())),
        Err(_) => None,
    }
}

/// Operator destination for lead notifications, if configured and well-formed.
pub fn admin_recipient() -> Option<Recipient> {
    ADMIN_CHAT_ID.as_deref().and_then(parse_recipient)
}

/// Full URL Telegram should post updates to, derived from WEBHOOK_URL.
pub fn webhook_endpoint() -> AppResult<Option<url::Url>> {
    match WEBHOOK_URL.as_deref() {
        Some(base) => Ok(Some(webhook::endpoint_from_base(base)?)),
        None => Ok(None),
    }
}

/// Checks that everything required to start the bot is present.
///
/// Collects every problem instead of stopping at the first one so the
/// operator can fix the environment in one pass.
pub fn validate(use_webhook: bool) -> AppResult<()> {
    let mut problems = Vec::new();

    if BOT_TOKEN.is_empty() {
        problems.push("BOT_TOKEN (or TELOXIDE_TOKEN) is not set".to_string());
    }

    match ADMIN_CHAT_ID.as_deref() {
        None => problems.push("ADMIN_CHAT_ID is not set".to_string()),
        Some(raw) if parse_recipient(raw).is_none() => {
            problems.push(format!("ADMIN_CHAT_ID must be a chat id or @channel, got {:?}", raw))
        }
        Some(_) => {}
    }

    if use_webhook {
        match webhook_endpoint() {
            Ok(Some(_)) => {}
            Ok(None) => problems.push("WEBHOOK_URL is required in webhook mode".to_string()),
            Err(e) => problems.push(e.to_string()),
        }
    }

    if problems.is_empty() {
        Ok(())
    } else {
        Err(AppError::Config(problems.join("; ")))
    }
}

/// Network configuration
pub mod network {
    use super::Duration;

    /// Request timeout for Bot API calls (in seconds)
    pub const REQUEST_TIMEOUT_SECS: u64 = 30;

    /// Request timeout duration
    pub fn timeout() -> Duration {
        Duration::from_secs(REQUEST_TIMEOUT_SECS)
    }
}

/// Webhook configuration
pub mod webhook {
    use super::Duration;
    use crate::core::error::{AppError, AppResult};

    /// Path the webhook listener is mounted at
    pub const PATH: &str = "/webhook";

    /// Path of the liveness probe
    pub const HEALTH_PATH: &str = "/healthz";

    /// Delay before the first webhook check (in seconds)
    pub const MONITOR_START_DELAY_SECS: u64 = 10;

    /// Interval between webhook checks (in seconds)
    pub const MONITOR_INTERVAL_SECS: u64 = 300;

    pub fn monitor_start_delay() -> Duration {
        Duration::from_secs(MONITOR_START_DELAY_SECS)
    }

    pub fn monitor_interval() -> Duration {
        Duration::from_secs(MONITOR_INTERVAL_SECS)
    }

    /// Appends [`PATH`] to a base URL, tolerating a trailing slash.
    pub fn endpoint_from_base(base: &str) -> AppResult<url::Url> {
        let joined = format!("{}{}", base.trim_end_matches('/'), PATH);
        let url = url::Url::parse(&joined)?;
        if url.scheme() != "https" && url.scheme() != "http" {
            return Err(AppError::Config(format!("WEBHOOK_URL must be http(s), got {}", base)));
        }
        Ok(url)
    }
}

/// Bot API server configuration utilities
pub mod bot_api {
    /// Returns the BOT_API_URL environment variable if set.
    pub fn get_url() -> Option<String> {
        std::env::var("BOT_API_URL").ok().filter(|url| !url.trim().is_empty())
    }
}
