//! Quiz engine: declarative quiz table, per-chat sequencer, lead records

pub mod conversation;
pub mod definition;
pub mod lead;
pub mod notifier;
pub mod store;

pub use conversation::{Advance, Conversation, Input};
pub use definition::{QuizDef, QuizId, StepDef, StepId};
pub use lead::{Answer, Customer, LeadRecord};
pub use notifier::LeadNotifier;
pub use store::ConversationStore;
