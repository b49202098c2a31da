//! Full conversations through LeadService, rendered to a mocked Bot API
//!
//! Run with: cargo test --test lead_flow_test

mod common;

use std::sync::Arc;

use pretty_assertions::assert_eq;
use teloxide::types::{ChatId, Recipient};

use common::TelegramMock;
use skvmeste_bot::quiz::Customer;
use skvmeste_bot::telegram::content::{self, labels};
use skvmeste_bot::telegram::render::send_replies;
use skvmeste_bot::telegram::{Inbound, LeadService, TelegramNotifier};

const USER_CHAT: i64 = 123456789;
const OPERATOR_CHAT: i64 = -100500;

struct Harness {
    mock: TelegramMock,
    service: LeadService,
    customer: Customer,
}

impl Harness {
    async fn new() -> Self {
        let mock = TelegramMock::start().await;
        mock.mock_send_message().await;

        let notifier = TelegramNotifier::new(mock.bot.clone(), Recipient::Id(ChatId(OPERATOR_CHAT)));
        let service = LeadService::new(Arc::new(notifier));
        let customer = Customer {
            chat_id: ChatId(USER_CHAT),
            first_name: Some("Анна".to_string()),
            username: Some("anna".to_string()),
        };
        Self { mock, service, customer }
    }

    /// Feeds one update and sends the replies like the dispatcher does.
    async fn send(&self, inbound: Inbound) {
        let chat = ChatId(USER_CHAT);
        let replies = self.service.handle(chat, &self.customer, inbound).await;
        send_replies(&self.mock.bot, chat, &replies).await.unwrap();
    }

    async fn messages_to(&self, chat: i64) -> Vec<serde_json::Value> {
        self.mock
            .sent_messages()
            .await
            .into_iter()
            .filter(|m| m["chat_id"] == serde_json::json!(chat))
            .collect()
    }
}

fn text(label: &str) -> Inbound {
    Inbound::Text(label.to_string())
}

fn answer(step: &str, index: usize) -> Inbound {
    Inbound::Callback(format!("ans:{}:{}", step, index))
}

#[tokio::test]
async fn test_cost_estimate_reaches_operator() {
    let h = Harness::new().await;

    h.send(text(labels::COST_ESTIMATE)).await;
    h.send(answer("floors", 2)).await;
    h.send(answer("material", 0)).await;
    h.send(answer("area", 1)).await;
    h.send(answer("project", 1)).await;
    h.send(answer("timeline", 0)).await;
    h.send(Inbound::Contact {
        phone: "+79990000000".to_string(),
        first_name: Some("Анна".to_string()),
    })
    .await;

    let operator = h.messages_to(OPERATOR_CHAT).await;
    assert_eq!(operator.len(), 1);
    assert_eq!(
        operator[0]["text"].as_str().unwrap(),
        "🔔 Новая заявка: Расчёт стоимости дома\n\
         Клиент: Анна (@anna), id 123456789\n\
         \n\
         Этажность: 2 этажа\n\
         Материал: Кирпич\n\
         Площадь: 100–150 м²\n\
         Проект: Выберу из каталога\n\
         Сроки: В ближайшее время\n\
         Телефон: +79990000000"
    );

    let user = h.messages_to(USER_CHAT).await;
    let last = user.last().unwrap();
    assert_eq!(last["text"].as_str().unwrap(), content::THANK_YOU);
    assert!(last["reply_markup"]["keyboard"].is_array(), "main menu should come back");
    assert!(h.service.store().is_empty().await);
}

#[tokio::test]
async fn test_questions_are_numbered_with_inline_options() {
    let h = Harness::new().await;

    h.send(text(labels::DESIGN)).await;

    let user = h.messages_to(USER_CHAT).await;
    assert_eq!(user.len(), 2, "intro and first question");
    assert_eq!(user[1]["text"].as_str().unwrap(), "Вопрос 1 из 6: Что проектируем?");

    let buttons = user[1]["reply_markup"]["inline_keyboard"].as_array().unwrap();
    assert_eq!(buttons[0][0]["callback_data"], serde_json::json!("ans:object:0"));
    assert_eq!(buttons.last().unwrap()[0]["callback_data"], serde_json::json!("cancel"));
}

#[tokio::test]
async fn test_cancel_mid_quiz_sends_nothing_to_operator() {
    let h = Harness::new().await;

    h.send(text(labels::COST_ESTIMATE)).await;
    h.send(answer("floors", 0)).await;
    h.send(Inbound::Callback("cancel".to_string())).await;

    assert!(h.messages_to(OPERATOR_CHAT).await.is_empty());
    let user = h.messages_to(USER_CHAT).await;
    assert_eq!(user.last().unwrap()["text"].as_str().unwrap(), content::CANCELLED);
    assert!(!h.service.store().is_active(ChatId(USER_CHAT)).await);
}

#[tokio::test]
async fn test_lead_form_with_typed_phone() {
    let h = Harness::new().await;

    h.send(Inbound::Callback("lead_open".to_string())).await;
    h.send(text("Анна Петровна")).await;
    h.send(text("8 (912) 345-67-89")).await;

    let operator = h.messages_to(OPERATOR_CHAT).await;
    assert_eq!(operator.len(), 1);
    let summary = operator[0]["text"].as_str().unwrap();
    assert!(summary.starts_with("🔔 Новая заявка: Заявка\nКлиент: Анна Петровна (@anna)"));
    assert!(summary.ends_with("Имя: Анна Петровна\nТелефон: 8 (912) 345-67-89"));
}

#[tokio::test]
async fn test_operator_failure_still_thanks_user() {
    let mock = TelegramMock::start().await;
    mock.mock_send_message().await;
    // Operator chat is unreachable; user chat works through a second bot
    let broken = TelegramMock::start().await;
    broken.mock_error("sendMessage", 400, "Bad Request: chat not found").await;

    let notifier = TelegramNotifier::new(broken.bot.clone(), Recipient::Id(ChatId(OPERATOR_CHAT)));
    let service = LeadService::new(Arc::new(notifier));
    let customer = Customer {
        chat_id: ChatId(USER_CHAT),
        first_name: None,
        username: None,
    };
    let chat = ChatId(USER_CHAT);

    for inbound in [
        Inbound::Callback("lead_open".to_string()),
        text("Олег"),
        text(labels::PHONE_LATER),
    ] {
        let replies = service.handle(chat, &customer, inbound).await;
        send_replies(&mock.bot, chat, &replies).await.unwrap();
    }

    let user = mock.sent_messages().await;
    assert_eq!(user.last().unwrap()["text"].as_str().unwrap(), content::THANK_YOU);
    assert_eq!(broken.requests_to("sendMessage").await.len(), 1);
    assert!(!service.store().is_active(chat).await);
}

#[tokio::test]
async fn test_static_content_outside_quiz() {
    let h = Harness::new().await;

    h.send(text(labels::CATALOG)).await;
    h.send(text("привет")).await;

    let user = h.messages_to(USER_CHAT).await;
    assert_eq!(user.len(), 2);
    assert!(user[0]["text"].as_str().unwrap().contains("https://disk.yandex.ru/"));
    assert_eq!(user[1]["text"].as_str().unwrap(), content::MENU_PROMPT);
}
