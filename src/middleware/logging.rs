//! Logging middleware
//! 
//! This module provides logging middleware for tracking bot interactions,
//! handler timing and delivery errors.

use std::time::Instant;
use teloxide::types::Message;
use tracing::{info, debug, warn, error, Span, instrument};
use crate::state::Reply;
use crate::utils::errors::SupportBotError;
use crate::utils::helpers::truncate_text;

/// Longest text preview written to the logs
const PREVIEW_LENGTH: usize = 64;

/// Logging middleware for bot interactions
#[derive(Debug, Clone)]
pub struct LoggingMiddleware {
    log_user_interactions: bool,
    log_performance: bool,
    log_errors: bool,
}

impl LoggingMiddleware {
    /// Create a new LoggingMiddleware instance
    pub fn new(log_user_interactions: bool, log_performance: bool, log_errors: bool) -> Self {
        Self {
            log_user_interactions,
            log_performance,
            log_errors,
        }
    }

    /// Log an incoming message
    #[instrument(skip(self, message))]
    pub fn log_message(&self, message: &Message) {
        if !self.log_user_interactions {
            return;
        }

        let user_id = message.from.as_ref().map(|user| user.id.0);
        let chat_type = if message.chat.is_private() { "private" } else { "group" };

        match message.text() {
            Some(text) => {
                debug!(
                    user_id = ?user_id,
                    chat_id = message.chat.id.0,
                    text = %truncate_text(text, PREVIEW_LENGTH),
                    "Text message received"
                );
            }
            None => {
                debug!(user_id = ?user_id, chat_id = message.chat.id.0, "Non-text message received");
            }
        }

        info!(
            user_id = ?user_id,
            chat_type = chat_type,
            message_id = message.id.0,
            "Message processed"
        );
    }

    /// Log command execution
    #[instrument(skip(self))]
    pub fn log_command(&self, user_id: i64, command: &str) {
        if !self.log_user_interactions {
            return;
        }

        info!(user_id = user_id, command = command, "Command executed");
    }

    /// Log the reply chosen for a user
    #[instrument(skip(self, reply))]
    pub fn log_reply(&self, user_id: i64, reply: &Reply) {
        if !self.log_user_interactions {
            return;
        }

        debug!(
            user_id = user_id,
            next_state = %reply.next_state,
            options = reply.option_labels().count(),
            text = %truncate_text(&reply.text, PREVIEW_LENGTH),
            "Reply prepared"
        );
    }

    /// Log a handler error with the operation and user it came from
    #[instrument(skip(self, error))]
    pub fn log_error(&self, error: &SupportBotError, context: &str, user_id: Option<i64>) {
        if !self.log_errors {
            return;
        }

        error!(
            error = %error,
            severity = %error.severity(),
            recoverable = error.is_recoverable(),
            context = context,
            user_id = user_id,
            "Error occurred"
        );
    }

    /// Create a performance tracking span
    pub fn create_performance_span(&self, operation: &str) -> Option<PerformanceTracker> {
        if self.log_performance {
            Some(PerformanceTracker::new(operation.to_string()))
        } else {
            None
        }
    }
}

impl Default for LoggingMiddleware {
    fn default() -> Self {
        Self::new(true, true, true)
    }
}

/// Performance tracker for measuring operation duration
pub struct PerformanceTracker {
    operation: String,
    start_time: Instant,
    _span: Span,
}

impl PerformanceTracker {
    fn new(operation: String) -> Self {
        let span = tracing::info_span!("performance", operation = %operation);
        
        Self {
            operation,
            start_time: Instant::now(),
            _span: span,
        }
    }

    /// Complete the performance tracking and log the result
    pub fn complete(self, success: bool) {
        let duration_ms = self.start_time.elapsed().as_millis();
        
        if success {
            debug!(
                operation = %self.operation,
                duration_ms = duration_ms,
                "Operation completed successfully"
            );
        } else {
            warn!(
                operation = %self.operation,
                duration_ms = duration_ms,
                "Operation failed"
            );
        }

        if duration_ms > 1000 {
            warn!(
                operation = %self.operation,
                duration_ms = duration_ms,
                "Slow operation detected"
            );
        }
    }
}
