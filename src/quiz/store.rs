use std::collections::HashMap;
use std::sync::Arc;
use teloxide::types::ChatId;
use tokio::sync::Mutex;

use super::conversation::Conversation;

/// Per-chat quiz progress.
///
/// Holds at most one [`Conversation`] per chat. Entries are never expired:
/// an abandoned quiz stays here until the chat starts another one, cancels,
/// or the process restarts.
#[derive(Clone, Default)]
pub struct ConversationStore {
    conversations: Arc<Mutex<HashMap<ChatId, Conversation>>>,
}

impl ConversationStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a copy of the chat's active conversation, if any.
    pub async fn get(&self, chat_id: ChatId) -> Option<Conversation> {
        self.conversations.lock().await.get(&chat_id).cloned()
    }

    pub async fn is_active(&self, chat_id: ChatId) -> bool {
        self.conversations.lock().await.contains_key(&chat_id)
    }

    /// Removes and returns the chat's conversation so it can be advanced.
    pub async fn take(&self, chat_id: ChatId) -> Option<Conversation> {
        self.conversations.lock().await.remove(&chat_id)
    }

    /// Stores (or replaces) the conversation for its chat.
    pub async fn put(&self, conversation: Conversation) {
        self.conversations
            .lock()
            .await
            .insert(conversation.chat_id(), conversation);
    }

    /// Drops the chat's conversation. Returns `true` if one was active.
    pub async fn reset(&self, chat_id: ChatId) -> bool {
        self.conversations.lock().await.remove(&chat_id).is_some()
    }

    /// Number of chats with a quiz in progress.
    pub async fn len(&self) -> usize {
        self.conversations.lock().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}
