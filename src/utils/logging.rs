//! Logging configuration and setup
//! 
//! This module provides logging initialization and structured logging utilities
//! for the SupportBot application.

use tracing::{info, warn, error, debug};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};
use crate::config::LoggingConfig;
use crate::state::ConversationState;
use crate::utils::errors::{SupportBotError, Result};

/// Log file name used by the daily rolling appender
pub const LOG_FILE_NAME: &str = "support-bot.log";

/// Initialize logging based on configuration
///
/// `RUST_LOG` takes precedence over the configured level. The returned guard
/// must be held for as long as file logging should keep flushing.
pub fn init_logging(config: &LoggingConfig) -> Result<Option<WorkerGuard>> {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.level));

    let (file_layer, guard) = match config.file_path {
        Some(ref dir) => {
            let file_appender = tracing_appender::rolling::daily(dir, LOG_FILE_NAME);
            let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);
            (Some(fmt::layer().with_writer(non_blocking).with_ansi(false)), Some(guard))
        }
        None => (None, None),
    };

    let (json_layer, text_layer) = if config.json {
        (Some(fmt::layer().json().with_writer(std::io::stdout)), None)
    } else {
        (None, Some(fmt::layer().with_writer(std::io::stdout)))
    };

    tracing_subscriber::registry()
        .with(env_filter)
        .with(json_layer)
        .with(text_layer)
        .with(file_layer)
        .try_init()
        .map_err(|e| SupportBotError::Config(format!("Failed to initialize logging: {}", e)))?;
        
    info!(level = %config.level, json = config.json, file = ?config.file_path, "Logging initialized");
    Ok(guard)
}

/// Log user actions with structured data
pub fn log_user_action(user_id: i64, action: &str, details: Option<&str>) {
    info!(
        user_id = user_id,
        action = action,
        details = details,
        "User action performed"
    );
}

/// Log a conversation state transition
pub fn log_transition(user_id: i64, from: ConversationState, to: ConversationState) {
    if from == to {
        debug!(user_id = user_id, state = %from, "Conversation state unchanged");
    } else {
        info!(user_id = user_id, from = %from, to = %to, "Conversation state changed");
    }
}

/// Log a failed delivery or other transport error; these are never retried
pub fn log_transport_error(user_id: i64, operation: &str, error: &SupportBotError) {
    if error.is_recoverable() {
        warn!(
            user_id = user_id,
            operation = operation,
            severity = %error.severity(),
            error = %error,
            "Transport error, message dropped"
        );
    } else {
        error!(
            user_id = user_id,
            operation = operation,
            severity = %error.severity(),
            error = %error,
            "Transport error"
        );
    }
}
