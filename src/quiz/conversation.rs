//! Quiz step sequencer
//!
//! A [`Conversation`] is the per-chat progress through one quiz. [`Conversation::advance`]
//! is the only transition: store the input under the current step, then either
//! move to the next step or finish with a [`LeadRecord`].

use teloxide::types::ChatId;

use super::definition::{QuizDef, QuizId, StepDef, StepId};
use super::lead::{Answer, Customer, LeadRecord};

/// What the user sent while a quiz was active.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Input {
    /// Typed text (or a reply-keyboard button label)
    Text(String),
    /// Inline button payload, already resolved to option text where possible
    Choice(String),
    /// Shared contact card
    Contact { phone: String, first_name: Option<String> },
}

impl Input {
    /// The value stored as the answer. Stored verbatim, nothing is validated.
    pub fn into_value(self) -> String {
        match self {
            Input::Text(text) | Input::Choice(text) => text,
            Input::Contact { phone, .. } => phone,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Conversation {
    chat_id: ChatId,
    quiz: QuizId,
    step: StepId,
    answers: Vec<Answer>,
}

/// Result of feeding one input to a conversation.
#[derive(Debug, PartialEq, Eq)]
pub enum Advance {
    /// The quiz goes on; `step` is the question to ask next.
    Next {
        conversation: Conversation,
        step: &'static StepDef,
    },
    /// The phone step was answered.
    Complete(LeadRecord),
}

impl Conversation {
    /// Starts `quiz` at its first step with no answers.
    pub fn start(chat_id: ChatId, quiz: QuizId) -> Self {
        Self {
            chat_id,
            quiz,
            step: quiz.definition().first_step().id,
            answers: Vec::new(),
        }
    }

    pub fn chat_id(&self) -> ChatId {
        self.chat_id
    }

    pub fn quiz(&self) -> QuizId {
        self.quiz
    }

    pub fn definition(&self) -> &'static QuizDef {
        self.quiz.definition()
    }

    pub fn step(&self) -> StepId {
        self.step
    }

    /// Definition of the question currently waiting for an answer.
    pub fn current_step(&self) -> &'static StepDef {
        let def = self.definition();
        def.step(self.step).unwrap_or_else(|| def.first_step())
    }

    /// Answers collected so far, in step order.
    pub fn answers(&self) -> &[Answer] {
        &self.answers
    }

    /// 1-based number of the current question.
    pub fn question_number(&self) -> usize {
        self.definition().position(self.step).map(|i| i + 1).unwrap_or(1)
    }

    /// Stores `input` under the current step and moves on.
    pub fn advance(mut self, input: Input, customer: &Customer) -> Advance {
        let def = self.definition();
        let current = self.current_step();

        // A contact card carries the name too; keep it for the record.
        let contact_name = match &input {
            Input::Contact { first_name, .. } => first_name.clone(),
            _ => None,
        };

        self.answers.push(Answer {
            step: current.id,
            label: current.label,
            value: input.into_value(),
        });

        let next = def
            .position(current.id)
            .and_then(|i| def.steps.get(i + 1))
            .filter(|_| !current.id.is_phone());

        match next {
            Some(step) => {
                self.step = step.id;
                Advance::Next {
                    conversation: self,
                    step,
                }
            }
            None => {
                log::info!(
                    "Quiz {:?} completed in chat {} ({} answers)",
                    self.quiz,
                    self.chat_id,
                    self.answers.len()
                );
                Advance::Complete(LeadRecord::new(self.quiz, customer.clone(), contact_name, self.answers))
            }
        }
    }
}
