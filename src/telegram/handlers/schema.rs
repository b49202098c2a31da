//! Dispatcher schema and handler chain builders

use teloxide::dispatching::{UpdateFilterExt, UpdateHandler};
use teloxide::prelude::*;
use teloxide::types::{CallbackQuery, Message};

use super::types::{HandlerDeps, HandlerError};
use crate::quiz::Customer;
use crate::telegram::bot::Command;
use crate::telegram::content::{callbacks, ContentId};
use crate::telegram::render::send_replies;
use crate::telegram::router::Action;
use crate::telegram::service::Inbound;

/// Creates the main dispatcher schema for the Telegram bot.
///
/// Commands first, then plain messages, then inline button presses.
pub fn schema(deps: HandlerDeps) -> UpdateHandler<HandlerError> {
    let deps_commands = deps.clone();
    let deps_messages = deps.clone();
    let deps_callback = deps;

    dptree::entry()
        .branch(command_handler(deps_commands))
        .branch(message_handler(deps_messages))
        .branch(callback_handler(deps_callback))
}

fn command_action(cmd: &Command) -> Action {
    match cmd {
        Command::Start | Command::Menu => Action::ShowStaticContent(ContentId::Welcome),
        Command::Cancel => Action::Cancel,
    }
}

/// Handler for /start, /menu and /cancel
fn command_handler(deps: HandlerDeps) -> UpdateHandler<HandlerError> {
    Update::filter_message().branch(dptree::entry().filter_command::<Command>().endpoint(
        move |bot: Bot, msg: Message, cmd: Command| {
            let deps = deps.clone();
            async move {
                log::info!("Received command: {:?} from chat {}", cmd, msg.chat.id);

                let customer = Customer::from_message(&msg);
                let inbound = Inbound::Text(msg.text().unwrap_or_default().to_string());
                let replies = deps
                    .service
                    .apply(msg.chat.id, &customer, command_action(&cmd), inbound)
                    .await;
                send_replies(&bot, msg.chat.id, &replies).await?;
                Ok(())
            }
        },
    ))
}

/// Converts a message into what the service understands.
///
/// Messages without text or contact (stickers, photos without caption)
/// arrive as empty text.
fn inbound_from_message(msg: &Message) -> Inbound {
    if let Some(contact) = msg.contact() {
        return Inbound::Contact {
            phone: contact.phone_number.clone(),
            first_name: Some(contact.first_name.clone()),
        };
    }
    let text = msg.text().or_else(|| msg.caption()).unwrap_or_default();
    Inbound::Text(text.to_string())
}

/// Handler for menu labels, quiz answers and shared contacts
fn message_handler(deps: HandlerDeps) -> UpdateHandler<HandlerError> {
    Update::filter_message().endpoint(move |bot: Bot, msg: Message| {
        let deps = deps.clone();
        async move {
            let customer = Customer::from_message(&msg);
            let replies = deps
                .service
                .handle(msg.chat.id, &customer, inbound_from_message(&msg))
                .await;
            send_replies(&bot, msg.chat.id, &replies).await?;
            Ok(())
        }
    })
}

/// Handler for inline button presses
fn callback_handler(deps: HandlerDeps) -> UpdateHandler<HandlerError> {
    Update::filter_callback_query().endpoint(move |bot: Bot, q: CallbackQuery| {
        let deps = deps.clone();
        async move {
            let _ = bot.answer_callback_query(q.id.clone()).await;

            let (Some(data), Some(message)) = (q.data.clone(), q.message.as_ref()) else {
                log::debug!("Ignoring callback without data or message from user {}", q.from.id);
                return Ok(());
            };
            let chat_id = message.chat().id;
            let message_id = message.id();

            // Answered questions lose their buttons so they can't be pressed twice
            if data.starts_with(callbacks::ANSWER_PREFIX) || data == callbacks::CANCEL {
                if let Err(e) = bot.edit_message_reply_markup(chat_id, message_id).await {
                    log::debug!("Failed to clear inline keyboard in chat {}: {}", chat_id, e);
                }
            }

            let customer = Customer::from_user(chat_id, Some(&q.from));
            let replies = deps.service.handle(chat_id, &customer, Inbound::Callback(data)).await;
            send_replies(&bot, chat_id, &replies).await?;
            Ok(())
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_commands_map_to_menu_actions() {
        assert_eq!(command_action(&Command::Start), Action::ShowStaticContent(ContentId::Welcome));
        assert_eq!(command_action(&Command::Menu), Action::ShowStaticContent(ContentId::Welcome));
        assert_eq!(command_action(&Command::Cancel), Action::Cancel);
    }
}
