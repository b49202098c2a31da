//! Webhook watchdog against a mocked Bot API
//!
//! Run with: cargo test --test webhook_test

mod common;

use pretty_assertions::assert_eq;
use url::Url;

use common::TelegramMock;
use skvmeste_bot::telegram::webhook::ensure_webhook;

const EXPECTED: &str = "https://bot.example.com/webhook";

fn webhook_info(url: &str) -> serde_json::Value {
    serde_json::json!({
        "url": url,
        "has_custom_certificate": false,
        "pending_update_count": 0
    })
}

#[tokio::test]
async fn test_registered_webhook_is_left_alone() {
    let mock = TelegramMock::start().await;
    mock.mock_ok("getWebhookInfo", webhook_info(EXPECTED)).await;
    mock.mock_ok("setWebhook", serde_json::json!(true)).await;

    let restored = ensure_webhook(&mock.bot, &Url::parse(EXPECTED).unwrap(), "secret")
        .await
        .unwrap();

    assert!(!restored);
    assert!(mock.requests_to("setWebhook").await.is_empty());
}

#[tokio::test]
async fn test_lost_webhook_is_restored() {
    let mock = TelegramMock::start().await;
    mock.mock_ok("getWebhookInfo", webhook_info("")).await;
    mock.mock_ok("setWebhook", serde_json::json!(true)).await;

    let restored = ensure_webhook(&mock.bot, &Url::parse(EXPECTED).unwrap(), "s3cret")
        .await
        .unwrap();
    assert!(restored);

    let calls = mock.requests_to("setWebhook").await;
    assert_eq!(calls.len(), 1);
    let body: serde_json::Value = serde_json::from_slice(&calls[0].body).unwrap();
    assert_eq!(body["url"], serde_json::json!(EXPECTED));
    assert_eq!(body["secret_token"], serde_json::json!("s3cret"));
    assert_eq!(body["drop_pending_updates"], serde_json::json!(true));
}

#[tokio::test]
async fn test_foreign_webhook_is_replaced() {
    let mock = TelegramMock::start().await;
    mock.mock_ok("getWebhookInfo", webhook_info("https://old.example.com/webhook")).await;
    mock.mock_ok("setWebhook", serde_json::json!(true)).await;

    let restored = ensure_webhook(&mock.bot, &Url::parse(EXPECTED).unwrap(), "secret")
        .await
        .unwrap();

    assert!(restored);
    assert_eq!(mock.requests_to("setWebhook").await.len(), 1);
}

#[tokio::test]
async fn test_check_failure_is_an_error() {
    let mock = TelegramMock::start().await;
    mock.mock_error("getWebhookInfo", 401, "Unauthorized").await;

    let result = ensure_webhook(&mock.bot, &Url::parse(EXPECTED).unwrap(), "secret").await;
    assert!(result.is_err());
    assert!(mock.requests_to("setWebhook").await.is_empty());
}
