//! Start command handler
//!
//! Greets the user and shows the main menu

use std::sync::Arc;
use teloxide::{Bot, types::Message};
use tracing::debug;
use crate::handlers::keyboards::send_reply;
use crate::middleware::LoggingMiddleware;
use crate::state::ConversationRouter;
use crate::utils::errors::{SupportBotError, Result};
use crate::utils::logging::{log_transport_error, log_user_action};

/// Handle /start command - entry point of the menu flow
pub async fn handle_start(
    bot: Bot,
    msg: Message,
    router: Arc<ConversationRouter>,
    logging: LoggingMiddleware,
) -> Result<()> {
    let user = msg.from.as_ref().ok_or_else(|| {
        SupportBotError::InvalidInput("No user in message".to_string())
    })?;

    let user_id = user.id.0 as i64;
    let chat_id = msg.chat.id;

    debug!(user_id = user_id, chat_id = ?chat_id, "Processing /start command");
    logging.log_command(user_id, "start");

    let reply = router.start(user_id, Some(user.first_name.as_str()));
    logging.log_reply(user_id, &reply);
    log_user_action(user_id, "start", None);

    if let Err(e) = send_reply(&bot, chat_id, &reply).await {
        log_transport_error(user_id, "start", &e);
        return Err(e);
    }

    Ok(())
}
