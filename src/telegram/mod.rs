//! Telegram bot integration and handlers

pub mod bot;
pub mod content;
pub mod handlers;
pub mod keyboards;
pub mod notifications;
pub mod render;
pub mod router;
pub mod service;
pub mod webhook;

// Re-exports for convenience
pub use bot::{create_bot, setup_bot_commands, Command};
pub use handlers::{schema, HandlerDeps, HandlerError};
pub use notifications::{notify_admin_startup, notify_admin_text, TelegramNotifier};
pub use service::{Inbound, LeadService, Reply};
