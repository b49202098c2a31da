//! Shared harness for integration tests: a teloxide Bot talking to a wiremock server

#![allow(dead_code)]

use teloxide::Bot;
use wiremock::matchers::{method, path_regex};
use wiremock::{Mock, MockServer, Request, ResponseTemplate};

/// Mock Telegram Bot API
pub struct TelegramMock {
    pub server: MockServer,
    pub bot: Bot,
}

/// teloxide spells method names in CamelCase, Telegram accepts any case
fn method_path(api_method: &str) -> String {
    format!("(?i)/bot[^/]+/{}$", api_method)
}

impl TelegramMock {
    pub async fn start() -> Self {
        let server = MockServer::start().await;
        let bot = Bot::new("test_token_12345:ABCDEF").set_api_url(server.uri().parse().unwrap());
        Self { server, bot }
    }

    /// Answer `api_method` with `{"ok": true, "result": result}`
    pub async fn mock_ok(&self, api_method: &str, result: serde_json::Value) {
        Mock::given(method("POST"))
            .and(path_regex(method_path(api_method)))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "ok": true,
                "result": result
            })))
            .mount(&self.server)
            .await;
    }

    /// Answer `api_method` with a Bot API error
    pub async fn mock_error(&self, api_method: &str, code: u16, description: &str) {
        Mock::given(method("POST"))
            .and(path_regex(method_path(api_method)))
            .respond_with(ResponseTemplate::new(code).set_body_json(serde_json::json!({
                "ok": false,
                "error_code": code,
                "description": description
            })))
            .mount(&self.server)
            .await;
    }

    /// Mock sendMessage with a plausible Message
    pub async fn mock_send_message(&self) {
        self.mock_ok("sendMessage", sent_message(123456789, "ok")).await;
    }

    /// Requests made to `api_method`, in order
    pub async fn requests_to(&self, api_method: &str) -> Vec<Request> {
        let suffix = format!("/{}", api_method.to_lowercase());
        self.server
            .received_requests()
            .await
            .unwrap_or_default()
            .into_iter()
            .filter(|r| r.url.path().to_lowercase().ends_with(&suffix))
            .collect()
    }

    /// JSON bodies of every sendMessage call
    pub async fn sent_messages(&self) -> Vec<serde_json::Value> {
        self.requests_to("sendMessage")
            .await
            .iter()
            .map(|r| serde_json::from_slice(&r.body).unwrap())
            .collect()
    }
}

pub fn sent_message(chat_id: i64, text: &str) -> serde_json::Value {
    serde_json::json!({
        "message_id": 42,
        "date": 1735992000,
        "chat": {
            "id": chat_id,
            "type": "private",
            "first_name": "Test"
        },
        "from": {
            "id": 987654321,
            "is_bot": true,
            "first_name": "TestBot",
            "username": "test_bot"
        },
        "text": text
    })
}
