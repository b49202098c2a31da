//! Lead service: owns the conversation table and turns inbound updates into replies
//!
//! Transport-free: handlers feed it [`Inbound`] values and render the returned
//! [`Reply`] list. The only side effects are store updates and the notifier
//! call on quiz completion.

use std::sync::Arc;
use teloxide::types::ChatId;

use super::content::{callbacks, ContentId};
use super::router::{route, Action, Token};
use crate::quiz::{Advance, ConversationStore, Customer, Input, LeadNotifier, LeadRecord, QuizId, StepDef};

/// What arrived from the chat.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Inbound {
    Text(String),
    Callback(String),
    Contact { phone: String, first_name: Option<String> },
}

impl Inbound {
    pub fn token(&self) -> Token<'_> {
        match self {
            Inbound::Text(text) => Token::Text(text),
            Inbound::Callback(data) => Token::Callback(data),
            Inbound::Contact { .. } => Token::Contact,
        }
    }

    /// Converts to a quiz answer for `step`.
    ///
    /// `None` for a button pressed on a different question (double tap or an
    /// older message); such presses are dropped.
    fn into_input(self, step: &StepDef) -> Option<Input> {
        match self {
            Inbound::Text(text) => Some(Input::Text(text)),
            Inbound::Callback(data) => resolve_choice(step, data).map(Input::Choice),
            Inbound::Contact { phone, first_name } => Some(Input::Contact { phone, first_name }),
        }
    }
}

/// Maps `ans:<step>:<i>` to the i-th option of `step`.
///
/// Returns `None` when the payload names another step. Anything that is not
/// a well-formed answer for `step` is kept verbatim.
pub fn resolve_choice(step: &StepDef, data: String) -> Option<String> {
    let parsed = callbacks::parse_answer(&data)
        .map(|(key, index)| (key == step.id.key(), index.parse::<usize>().ok().and_then(|i| step.option(i))));

    match parsed {
        None => Some(data),
        Some((false, _)) => None,
        Some((true, option)) => Some(option.map(str::to_string).unwrap_or(data)),
    }
}

/// Something to show the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reply {
    /// Re-display the main menu
    MainMenu,
    Content(ContentId),
    /// First line of a freshly started quiz
    Intro(QuizId),
    Question {
        quiz: QuizId,
        step: &'static StepDef,
        number: usize,
        total: usize,
    },
    ThankYou,
    Cancelled,
}

#[derive(Clone)]
pub struct LeadService {
    store: ConversationStore,
    notifier: Arc<dyn LeadNotifier>,
}

impl LeadService {
    pub fn new(notifier: Arc<dyn LeadNotifier>) -> Self {
        Self::with_store(ConversationStore::new(), notifier)
    }

    pub fn with_store(store: ConversationStore, notifier: Arc<dyn LeadNotifier>) -> Self {
        Self { store, notifier }
    }

    pub fn store(&self) -> &ConversationStore {
        &self.store
    }

    /// Routes `inbound` and applies the resulting action.
    pub async fn handle(&self, chat_id: ChatId, customer: &Customer, inbound: Inbound) -> Vec<Reply> {
        let action = route(inbound.token());
        self.apply(chat_id, customer, action, inbound).await
    }

    /// Applies an already routed action. `inbound` is the answer when the
    /// action is [`Action::Fallback`] and a quiz is active.
    pub async fn apply(&self, chat_id: ChatId, customer: &Customer, action: Action, inbound: Inbound) -> Vec<Reply> {
        if action.resets_conversation() && self.store.reset(chat_id).await {
            log::info!("Chat {} left its quiz via {:?}", chat_id, action);
        }

        match action {
            Action::ShowStaticContent(id) => vec![Reply::Content(id)],
            Action::StartQuiz(quiz) => self.start(chat_id, quiz).await,
            Action::StartLeadForm => self.start(chat_id, QuizId::LeadForm).await,
            Action::Cancel => vec![Reply::Cancelled],
            Action::Fallback => self.answer(chat_id, customer, inbound).await,
        }
    }

    async fn start(&self, chat_id: ChatId, quiz: QuizId) -> Vec<Reply> {
        let conversation = crate::quiz::Conversation::start(chat_id, quiz);
        let question = question(&conversation);
        self.store.put(conversation).await;
        log::info!("Chat {} started quiz {:?}", chat_id, quiz);
        vec![Reply::Intro(quiz), question]
    }

    async fn answer(&self, chat_id: ChatId, customer: &Customer, inbound: Inbound) -> Vec<Reply> {
        let Some(conversation) = self.store.take(chat_id).await else {
            return vec![Reply::MainMenu];
        };

        let step = conversation.current_step();
        let Some(input) = inbound.into_input(step) else {
            log::debug!("Chat {} pressed a button of another question, ignoring", chat_id);
            self.store.put(conversation).await;
            return Vec::new();
        };
        match conversation.advance(input, customer) {
            Advance::Next { conversation, .. } => {
                let reply = question(&conversation);
                self.store.put(conversation).await;
                vec![reply]
            }
            Advance::Complete(record) => {
                self.deliver(&record).await;
                vec![Reply::ThankYou]
            }
        }
    }

    /// Sends the lead to the operator. Failures are logged and swallowed:
    /// the user gets the same reply either way.
    async fn deliver(&self, record: &LeadRecord) {
        match self.notifier.notify(record).await {
            Ok(()) => log::info!(
                "Lead from chat {} ({:?}) delivered to operator",
                record.customer().chat_id,
                record.quiz()
            ),
            Err(e) => log::error!(
                "Failed to deliver lead from chat {} ({:?}): {}",
                record.customer().chat_id,
                record.quiz(),
                e
            ),
        }
    }
}

fn question(conversation: &crate::quiz::Conversation) -> Reply {
    Reply::Question {
        quiz: conversation.quiz(),
        step: conversation.current_step(),
        number: conversation.question_number(),
        total: conversation.definition().len(),
    }
}
