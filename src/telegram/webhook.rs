//! Webhook mode: HTTP listener, health probe and the webhook watchdog

use std::net::SocketAddr;
use std::time::Duration;

use axum::routing::get;
use teloxide::dispatching::UpdateHandler;
use teloxide::prelude::*;
use teloxide::types::Recipient;
use teloxide::update_listeners::webhooks::{axum_to_router, Options};
use tokio::net::TcpListener;
use tokio::time::{interval, sleep};
use url::Url;

use super::handlers::HandlerError;
use super::notifications::notify_admin_text;
use crate::core::config;
use crate::core::error::{AppError, AppResult};

/// Sent to the operator after the watchdog re-registers a lost webhook.
pub const WEBHOOK_RESTORED_TEXT: &str = "⚠️ Webhook был потерян и восстановлен.";

/// Listens for updates at `endpoint` and dispatches them through `handler`.
///
/// Registers the webhook with Telegram (dropping pending updates), serves
/// it next to a `/healthz` probe and returns once the dispatcher stops.
pub async fn run(bot: Bot, handler: UpdateHandler<HandlerError>, addr: SocketAddr, endpoint: Url) -> AppResult<()> {
    let options = Options::new(addr, endpoint.clone())
        .secret_token(config::WEBHOOK_SECRET.clone())
        .drop_pending_updates();

    let (listener, stop_flag, router) = axum_to_router(bot.clone(), options).await?;
    let app = router.route(config::webhook::HEALTH_PATH, get(health_handler));

    let tcp = TcpListener::bind(addr).await?;
    log::info!("Webhook listener on http://{} for {}", addr, endpoint);

    tokio::spawn(async move {
        if let Err(e) = axum::serve(tcp, app).with_graceful_shutdown(stop_flag).await {
            log::error!("Webhook server error: {}", e);
        }
    });

    Dispatcher::builder(bot, handler)
        .enable_ctrlc_handler()
        .build()
        .dispatch_with_listener(
            listener,
            LoggingErrorHandler::with_custom_text("An error from the webhook listener"),
        )
        .await;

    Ok(())
}

async fn health_handler() -> &'static str {
    "OK"
}

/// Socket address the webhook listener binds to.
pub fn bind_address(host: &str, port: u16) -> AppResult<SocketAddr> {
    format!("{}:{}", host, port)
        .parse()
        .map_err(|e| AppError::Config(format!("Invalid HOST/PORT {}:{}: {}", host, port, e)))
}

/// Re-registers the webhook if Telegram reports a different URL.
///
/// # Returns
/// * `Ok(true)` - The webhook was missing or pointed elsewhere and has been restored
/// * `Ok(false)` - The webhook is already registered at `expected`
pub async fn ensure_webhook(bot: &Bot, expected: &Url, secret: &str) -> AppResult<bool> {
    let info = bot.get_webhook_info().await?;
    if info.url.as_ref() == Some(expected) {
        return Ok(false);
    }

    log::warn!(
        "Webhook mismatch: Telegram has {:?}, expected {}. Re-registering",
        info.url.as_ref().map(Url::as_str),
        expected
    );
    bot.set_webhook(expected.clone())
        .secret_token(secret.to_string())
        .drop_pending_updates(true)
        .await?;
    Ok(true)
}

/// Periodically checks the webhook registration and restores it when lost.
///
/// Runs forever; spawn it.
pub async fn monitor(bot: Bot, expected: Url, operator: Option<Recipient>) {
    monitor_with(
        bot,
        expected,
        operator,
        config::webhook::monitor_start_delay(),
        config::webhook::monitor_interval(),
    )
    .await
}

async fn monitor_with(bot: Bot, expected: Url, operator: Option<Recipient>, delay: Duration, every: Duration) {
    sleep(delay).await;
    let mut ticker = interval(every);
    loop {
        ticker.tick().await;
        log::debug!("Checking webhook registration");

        match ensure_webhook(&bot, &expected, &config::WEBHOOK_SECRET).await {
            Ok(true) => {
                log::info!("Webhook restored at {}", expected);
                if let Some(operator) = &operator {
                    notify_admin_text(&bot, operator, WEBHOOK_RESTORED_TEXT).await;
                }
            }
            Ok(false) => {}
            Err(e) => log::error!("Webhook check failed: {}", e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bind_address() {
        let addr = bind_address("0.0.0.0", 8080).unwrap();
        assert_eq!(addr.port(), 8080);
        assert!(bind_address("not a host", 8080).is_err());
    }
}
