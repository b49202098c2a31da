//! Menu router
//!
//! Maps an inbound label, command or callback identifier to an [`Action`].
//! Exact matches only; anything else is [`Action::Fallback`], which the
//! service treats as a quiz answer when a quiz is active and as "show the
//! main menu" otherwise.

use super::content::{callbacks, labels, ContentId};
use crate::quiz::QuizId;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    ShowStaticContent(ContentId),
    StartQuiz(QuizId),
    StartLeadForm,
    Cancel,
    Fallback,
}

impl Action {
    /// Actions that replace whatever quiz the chat was in.
    pub fn resets_conversation(self) -> bool {
        !matches!(self, Action::Fallback)
    }
}

/// The routable part of an inbound update.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Token<'a> {
    Text(&'a str),
    Callback(&'a str),
    Contact,
}

pub fn route(token: Token<'_>) -> Action {
    match token {
        Token::Text(text) => route_text(text),
        Token::Callback(data) => route_callback(data),
        Token::Contact => Action::Fallback,
    }
}

fn route_text(text: &str) -> Action {
    let text = text.trim();
    if text.starts_with('/') {
        return route_command(text);
    }

    match text {
        labels::ABOUT => Action::ShowStaticContent(ContentId::About),
        labels::CATALOG => Action::ShowStaticContent(ContentId::Catalog),
        labels::SITES => Action::ShowStaticContent(ContentId::Sites),
        labels::CONTACTS => Action::ShowStaticContent(ContentId::Contacts),
        labels::COST_ESTIMATE => Action::StartQuiz(QuizId::CostEstimate),
        labels::DESIGN => Action::StartQuiz(QuizId::Design),
        labels::LEAD_FORM => Action::StartLeadForm,
        labels::CANCEL => Action::Cancel,
        _ => Action::Fallback,
    }
}

/// `/start`, `/start@SkVmesteBot`, `/start deep-link-payload` all route the same.
fn route_command(text: &str) -> Action {
    let command = text.split_whitespace().next().unwrap_or_default();
    let command = command.split('@').next().unwrap_or_default();

    match command.to_lowercase().as_str() {
        "/start" | "/menu" => Action::ShowStaticContent(ContentId::Welcome),
        "/cancel" => Action::Cancel,
        _ => Action::Fallback,
    }
}

fn route_callback(data: &str) -> Action {
    match data {
        callbacks::LEAD_OPEN => Action::StartLeadForm,
        callbacks::CANCEL => Action::Cancel,
        _ => Action::Fallback,
    }
}
