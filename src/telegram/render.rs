//! Turns service replies into Telegram messages

use teloxide::prelude::*;
use teloxide::types::ReplyMarkup;

use super::content::{self, ContentId};
use super::keyboards;
use super::service::Reply;

/// Text and keyboard of one outgoing message.
#[derive(Debug, Clone)]
pub struct Rendered {
    pub text: String,
    pub markup: Option<ReplyMarkup>,
}

impl Rendered {
    fn new(text: impl Into<String>, markup: impl Into<ReplyMarkup>) -> Self {
        Self {
            text: text.into(),
            markup: Some(markup.into()),
        }
    }

    fn plain(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            markup: None,
        }
    }
}

pub fn render(reply: &Reply) -> Rendered {
    match reply {
        Reply::MainMenu => Rendered::new(content::MENU_PROMPT, keyboards::main_menu()),
        Reply::Content(id) => render_content(*id),
        Reply::Intro(quiz) => Rendered::plain(quiz.definition().intro),
        Reply::Question {
            step, number, total, ..
        } => {
            if step.id.is_phone() {
                Rendered::new(step.prompt, keyboards::phone())
            } else if step.options.is_empty() {
                Rendered::new(step.prompt, keyboards::cancel_only())
            } else {
                Rendered::new(
                    format!("Вопрос {} из {}: {}", number, total, step.prompt),
                    keyboards::question(step),
                )
            }
        }
        Reply::ThankYou => Rendered::new(content::THANK_YOU, keyboards::main_menu()),
        Reply::Cancelled => Rendered::new(content::CANCELLED, keyboards::main_menu()),
    }
}

fn render_content(id: ContentId) -> Rendered {
    let text = content::text(id);
    match id {
        ContentId::Welcome => Rendered::new(text, keyboards::main_menu()),
        ContentId::About => Rendered::new(text, keyboards::about()),
        ContentId::Contacts => Rendered::new(text, keyboards::contacts()),
        ContentId::Catalog | ContentId::Sites => Rendered::plain(text),
    }
}

/// Sends every reply to `chat_id` in order.
pub async fn send_replies(bot: &Bot, chat_id: ChatId, replies: &[Reply]) -> ResponseResult<()> {
    for reply in replies {
        let Rendered { text, markup } = render(reply);
        let request = bot.send_message(chat_id, text);
        match markup {
            Some(markup) => request.reply_markup(markup).await?,
            None => request.await?,
        };
    }
    Ok(())
}
