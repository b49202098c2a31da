//! SK Vmeste - Telegram lead-generation bot for a house-building company
//!
//! # Module Structure
//!
//! - `core`: configuration, errors and logging
//! - `quiz`: quiz definitions, per-chat conversation state and lead records
//! - `telegram`: menu routing, rendering, dispatcher handlers and webhook mode

pub mod cli;
pub mod core;
pub mod quiz;
pub mod telegram;

// Re-export commonly used types for convenience
pub use crate::core::{config, AppError, AppResult};
pub use quiz::{ConversationStore, LeadNotifier, LeadRecord, QuizId};
pub use telegram::{LeadService, TelegramNotifier};
