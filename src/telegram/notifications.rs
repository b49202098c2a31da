use async_trait::async_trait;
use teloxide::prelude::*;
use teloxide::types::Recipient;

use crate::core::error::AppResult;
use crate::quiz::{LeadNotifier, LeadRecord};

/// Sends lead summaries to the operator chat through the Bot API.
#[derive(Clone)]
pub struct TelegramNotifier {
    bot: Bot,
    destination: Recipient,
}

impl TelegramNotifier {
    pub fn new(bot: Bot, destination: Recipient) -> Self {
        Self { bot, destination }
    }

    pub fn destination(&self) -> &Recipient {
        &self.destination
    }
}

#[async_trait]
impl LeadNotifier for TelegramNotifier {
    /// One attempt, no retries.
    async fn notify(&self, record: &LeadRecord) -> AppResult<()> {
        self.bot
            .send_message(self.destination.clone(), record.summary())
            .await?;
        Ok(())
    }
}

/// Sends a plain text message to the operator chat.
///
/// Errors are logged and swallowed.
pub async fn notify_admin_text(bot: &Bot, destination: &Recipient, text: &str) {
    if let Err(e) = bot.send_message(destination.clone(), text).await {
        log::error!("Failed to send admin notification to {:?}: {}", destination, e);
    }
}

/// Tells the operator the bot is up.
pub async fn notify_admin_startup(bot: &Bot, destination: &Recipient, mode: &str) {
    notify_admin_text(bot, destination, &startup_text(mode)).await;
}

pub fn startup_text(mode: &str) -> String {
    format!("🚀 Бот запущен ({})", mode)
}
