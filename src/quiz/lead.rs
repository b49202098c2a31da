//! Lead record and its operator summary

use teloxide::types::{ChatId, Message, User};

use super::definition::{QuizId, StepId};

/// Shown instead of an empty field.
pub const PLACEHOLDER: &str = "—";

/// One stored answer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Answer {
    pub step: StepId,
    pub label: &'static str,
    pub value: String,
}

/// Who the lead came from, as far as Telegram tells us.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Customer {
    pub chat_id: ChatId,
    pub first_name: Option<String>,
    pub username: Option<String>,
}

impl Customer {
    pub fn from_user(chat_id: ChatId, user: Option<&User>) -> Self {
        Self {
            chat_id,
            first_name: user.map(|u| u.first_name.clone()),
            username: user.and_then(|u| u.username.clone()),
        }
    }

    /// Extract customer info from a Telegram message
    pub fn from_message(msg: &Message) -> Self {
        Self::from_user(msg.chat.id, msg.from.as_ref())
    }
}

/// A finished quiz, ready to be sent to the operator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LeadRecord {
    quiz: QuizId,
    customer: Customer,
    contact_name: Option<String>,
    answers: Vec<Answer>,
}

impl LeadRecord {
    pub fn new(quiz: QuizId, customer: Customer, contact_name: Option<String>, answers: Vec<Answer>) -> Self {
        Self {
            quiz,
            customer,
            contact_name,
            answers,
        }
    }

    pub fn quiz(&self) -> QuizId {
        self.quiz
    }

    pub fn customer(&self) -> &Customer {
        &self.customer
    }

    /// Every answer including the phone, in step order.
    pub fn answers(&self) -> &[Answer] {
        &self.answers
    }

    /// Name from a shared contact card, if the phone came as one.
    pub fn contact_name(&self) -> Option<&str> {
        self.contact_name.as_deref()
    }

    pub fn value(&self, step: StepId) -> Option<&str> {
        self.answers.iter().find(|a| a.step == step).map(|a| a.value.as_str())
    }

    pub fn phone(&self) -> &str {
        self.value(StepId::Phone).unwrap_or_default()
    }

    /// Best known name: typed into the form, then contact card, then Telegram profile.
    pub fn name(&self) -> Option<&str> {
        self.value(StepId::Name)
            .filter(|n| !n.trim().is_empty())
            .or(self.contact_name())
            .or(self.customer.first_name.as_deref())
    }

    /// Fixed-order multi-line message for the operator chat.
    ///
    /// Header, customer line, then one line per answer in step order
    /// (phone is the last step, so it comes last). Empty values become
    /// [`PLACEHOLDER`].
    pub fn summary(&self) -> String {
        let name = self.name().unwrap_or(PLACEHOLDER);
        let client = match self.customer.username.as_deref() {
            Some(username) => format!("{} (@{})", name, username),
            None => name.to_string(),
        };

        let mut lines = vec![
            format!("🔔 Новая заявка: {}", self.quiz.definition().title),
            format!("Клиент: {}, id {}", client, self.customer.chat_id),
            String::new(),
        ];
        lines.extend(self.answers.iter().map(|answer| {
            let value = answer.value.trim();
            let value = if value.is_empty() { PLACEHOLDER } else { value };
            format!("{}: {}", answer.label, value)
        }));

        lines.join("\n")
    }
}
