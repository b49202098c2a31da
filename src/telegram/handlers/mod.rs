//! Telegram bot handler tree configuration
//!
//! The same schema is used by the polling dispatcher, the webhook listener
//! and the integration tests.

mod schema;
mod types;

pub use schema::schema;
pub use types::{HandlerDeps, HandlerError};
