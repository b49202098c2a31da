use anyhow::Result;
use dotenvy::dotenv;
use std::sync::Arc;
use teloxide::prelude::*;
use teloxide::update_listeners::Polling;

use skvmeste_bot::cli::{Cli, Commands};
use skvmeste_bot::core::{config, init_logger, log_configuration};
use skvmeste_bot::telegram::{
    create_bot, notify_admin_startup, schema, setup_bot_commands, webhook, HandlerDeps, LeadService, TelegramNotifier,
};

/// Main entry point for the Telegram bot
///
/// Parses CLI arguments and dispatches to appropriate subcommand.
///
/// # Errors
/// Returns an error if initialization fails (logging, configuration, bot creation).
#[tokio::main]
async fn main() -> Result<()> {
    // Parse CLI arguments
    let cli = Cli::parse_args();

    // Log panics from handler tasks instead of losing them on stderr
    std::panic::set_hook(Box::new(|panic_info| {
        log::error!("Panic caught: {:?}", panic_info);
        if let Some(location) = panic_info.location() {
            log::error!("Panic at {}:{}:{}", location.file(), location.line(), location.column());
        }
        if let Some(msg) = panic_info.payload().downcast_ref::<&str>() {
            log::error!("Panic message: {}", msg);
        }
    }));

    // .env must be loaded before any config static is touched
    let _ = dotenv();

    // Initialize logger (console + file)
    init_logger(&config::LOG_FILE_PATH)?;

    match cli.command {
        Some(Commands::CheckConfig { webhook }) => {
            config::validate(webhook)?;
            log_configuration(webhook);
            log::info!("Configuration is valid");
            Ok(())
        }
        Some(Commands::Run { webhook }) => run_bot(webhook).await,
        None => run_bot(false).await,
    }
}

async fn run_bot(use_webhook: bool) -> Result<()> {
    config::validate(use_webhook)?;
    log_configuration(use_webhook);

    let operator = config::admin_recipient().ok_or_else(|| anyhow::anyhow!("ADMIN_CHAT_ID is not usable"))?;

    let bot = create_bot()?;

    if let Err(e) = setup_bot_commands(&bot).await {
        log::warn!("Failed to set bot commands: {}", e);
    }

    let notifier = Arc::new(TelegramNotifier::new(bot.clone(), operator.clone()));
    let service = Arc::new(LeadService::new(notifier));
    let handler = schema(HandlerDeps::new(service));

    let endpoint = if use_webhook { config::webhook_endpoint()? } else { None };

    match endpoint {
        Some(endpoint) => {
            log::info!("Starting bot in webhook mode at {}", endpoint);
            notify_admin_startup(&bot, &operator, "webhook").await;

            tokio::spawn(webhook::monitor(bot.clone(), endpoint.clone(), Some(operator)));

            let addr = webhook::bind_address(&config::HOST, *config::PORT)?;
            webhook::run(bot, handler, addr, endpoint).await?;
        }
        None => {
            log::info!("Starting bot in long polling mode");
            // A webhook left over from a previous deployment blocks getUpdates
            if let Err(e) = bot.delete_webhook().await {
                log::warn!("Failed to delete webhook: {}", e);
            }
            notify_admin_startup(&bot, &operator, "polling").await;

            let listener = Polling::builder(bot.clone()).drop_pending_updates().build();

            Dispatcher::builder(bot, handler)
                .enable_ctrlc_handler()
                .build()
                .dispatch_with_listener(
                    listener,
                    LoggingErrorHandler::with_custom_text("An error from the update listener"),
                )
                .await;
        }
    }

    log::info!("Dispatcher shutdown gracefully");
    Ok(())
}
