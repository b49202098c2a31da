//! Logging initialization and configuration reporting
//!
//! This module provides:
//! - Logger initialization (console + file)
//! - Startup configuration summary

use anyhow::Result;
use simplelog::*;
use std::fs::OpenOptions;

use crate::core::config;

/// Initialize logger for both console and file output
///
/// The log file is opened in append mode so restarts keep history.
///
/// # Arguments
/// * `log_file_path` - Path to the log file
///
/// # Returns
/// * `Ok(())` - Logger initialized successfully
/// * `Err(anyhow::Error)` - Failed to open the file or a logger is already installed
pub fn init_logger(log_file_path: &str) -> Result<()> {
    let log_file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(log_file_path)
        .map_err(|e| anyhow::anyhow!("Failed to open log file {}: {}", log_file_path, e))?;

    CombinedLogger::init(vec![
        TermLogger::new(
            LevelFilter::Info,
            Config::default(),
            TerminalMode::Mixed,
            ColorChoice::Auto,
        ),
        WriteLogger::new(LevelFilter::Info, Config::default(), log_file),
    ])
    .map_err(|e| anyhow::anyhow!("Failed to initialize logger: {}", e))?;

    Ok(())
}

/// Hides everything but the bot id part of a token (`123456:***`).
pub fn mask_token(token: &str) -> String {
    match token.split_once(':') {
        Some((id, _)) if !id.is_empty() => format!("{}:***", id),
        _ if token.is_empty() => "<unset>".to_string(),
        _ => "***".to_string(),
    }
}

/// Logs the loaded configuration at application startup
pub fn log_configuration(use_webhook: bool) {
    log::info!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
    log::info!("⚙️  Configuration");
    log::info!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
    log::info!("BOT_TOKEN: {}", mask_token(&config::BOT_TOKEN));

    match config::admin_recipient() {
        Some(recipient) => log::info!("ADMIN_CHAT_ID: {:?}", recipient),
        None => log::error!("❌ ADMIN_CHAT_ID: missing or malformed, leads cannot be delivered"),
    }

    if let Some(api_url) = config::bot_api::get_url() {
        log::info!("BOT_API_URL: {}", api_url);
    }

    if use_webhook {
        match config::webhook_endpoint() {
            Ok(Some(url)) => log::info!("Mode: webhook at {} (listening on {}:{})", url, *config::HOST, *config::PORT),
            Ok(None) => log::error!("❌ Mode: webhook requested but WEBHOOK_URL is not set"),
            Err(e) => log::error!("❌ Mode: webhook requested but WEBHOOK_URL is invalid: {}", e),
        }
    } else {
        log::info!("Mode: long polling");
    }
    log::info!("LOG_FILE_PATH: {}", *config::LOG_FILE_PATH);
    log::info!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
}
