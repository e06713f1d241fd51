//! Message handlers module
//! 
//! Feeds menu text through the conversation router and delivers the reply

use std::sync::Arc;
use teloxide::{Bot, types::Message};
use tracing::debug;
use crate::handlers::keyboards::send_reply;
use crate::middleware::LoggingMiddleware;
use crate::state::ConversationRouter;
use crate::utils::errors::{SupportBotError, Result};
use crate::utils::logging::log_transport_error;

/// Handle incoming messages
///
/// The next state is stored before delivery, so a failed send leaves the
/// user where the router put them. Delivery failures are logged and returned,
/// never retried.
pub async fn handle_message(
    bot: Bot,
    msg: Message,
    router: Arc<ConversationRouter>,
    logging: LoggingMiddleware,
) -> Result<()> {
    let user_id = msg
        .from
        .as_ref()
        .map(|user| user.id.0 as i64)
        .ok_or_else(|| SupportBotError::InvalidInput("No user in message".to_string()))?;
    let chat_id = msg.chat.id;

    logging.log_message(&msg);
    let tracker = logging.create_performance_span("handle_message");

    let reply = match msg.text() {
        Some(text) => router.handle_message(user_id, text),
        None => {
            debug!(user_id = user_id, "Message without text, re-prompting");
            router.non_text(user_id)
        }
    };
    logging.log_reply(user_id, &reply);

    let result = send_reply(&bot, chat_id, &reply).await;
    if let Some(tracker) = tracker {
        tracker.complete(result.is_ok());
    }

    if let Err(e) = result {
        log_transport_error(user_id, "send_reply", &e);
        return Err(e);
    }

    Ok(())
}
