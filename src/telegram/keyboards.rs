//! Reply and inline keyboards

use teloxide::types::{ButtonRequest, InlineKeyboardButton, InlineKeyboardMarkup, KeyboardButton, KeyboardMarkup};

use super::content::{callbacks, labels, links};
use crate::quiz::StepDef;

/// Inline callback button shorthand.
pub fn cb(text: impl Into<String>, data: impl Into<String>) -> InlineKeyboardButton {
    InlineKeyboardButton::callback(text, data)
}

/// Inline URL button; `None` if `href` does not parse.
fn link(text: &str, href: &str) -> Option<InlineKeyboardButton> {
    match url::Url::parse(href) {
        Ok(url) => Some(InlineKeyboardButton::url(text.to_string(), url)),
        Err(e) => {
            log::error!("Invalid link {} for button {:?}: {}", href, text, e);
            None
        }
    }
}

/// Main menu reply keyboard, three rows of two.
pub fn main_menu() -> KeyboardMarkup {
    KeyboardMarkup::new(vec![
        vec![KeyboardButton::new(labels::ABOUT), KeyboardButton::new(labels::CATALOG)],
        vec![
            KeyboardButton::new(labels::COST_ESTIMATE),
            KeyboardButton::new(labels::DESIGN),
        ],
        vec![KeyboardButton::new(labels::SITES), KeyboardButton::new(labels::CONTACTS)],
    ])
    .resize_keyboard()
}

/// Options of a question, two per row, plus a cancel button.
///
/// Buttons carry `ans:<step>:<index>` instead of the option text to stay
/// within Telegram's 64-byte callback limit. The step key lets a press on an
/// older question be told apart from an answer to the current one.
pub fn question(step: &StepDef) -> InlineKeyboardMarkup {
    let mut rows: Vec<Vec<InlineKeyboardButton>> = step
        .options
        .chunks(2)
        .enumerate()
        .map(|(row, chunk)| {
            chunk
                .iter()
                .enumerate()
                .map(|(col, option)| cb(*option, callbacks::answer(step.id.key(), row * 2 + col)))
                .collect()
        })
        .collect();
    rows.push(vec![cb(labels::CANCEL, callbacks::CANCEL)]);
    InlineKeyboardMarkup::new(rows)
}

/// Free-text question: cancel button only.
pub fn cancel_only() -> InlineKeyboardMarkup {
    InlineKeyboardMarkup::new(vec![vec![cb(labels::CANCEL, callbacks::CANCEL)]])
}

/// One-time reply keyboard for the phone step.
pub fn phone() -> KeyboardMarkup {
    KeyboardMarkup::new(vec![
        vec![KeyboardButton::new(labels::SHARE_PHONE).request(ButtonRequest::Contact)],
        vec![KeyboardButton::new(labels::PHONE_LATER)],
        vec![KeyboardButton::new(labels::CANCEL)],
    ])
    .resize_keyboard()
    .one_time_keyboard()
}

pub fn about() -> InlineKeyboardMarkup {
    let mut row = vec![cb(labels::LEAD_FORM, callbacks::LEAD_OPEN)];
    row.extend(link(labels::WRITE_TO_US, links::TELEGRAM));
    InlineKeyboardMarkup::new(vec![row])
}

pub fn contacts() -> InlineKeyboardMarkup {
    InlineKeyboardMarkup::new(vec![link(labels::WRITE_IN_TELEGRAM, links::TELEGRAM)
        .into_iter()
        .collect::<Vec<_>>()])
}
