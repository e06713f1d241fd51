//! Cancel command handler

use std::sync::Arc;
use teloxide::{Bot, types::Message};
use crate::handlers::keyboards::send_reply;
use crate::middleware::LoggingMiddleware;
use crate::state::ConversationRouter;
use crate::utils::errors::{SupportBotError, Result};
use crate::utils::logging::{log_transport_error, log_user_action};

/// Handle /cancel command - drop back to the main menu from any step
pub async fn handle_cancel(
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

    logging.log_command(user_id, "cancel");

    let reply = router.cancel(user_id);
    logging.log_reply(user_id, &reply);
    log_user_action(user_id, "cancel", None);

    if let Err(e) = send_reply(&bot, msg.chat.id, &reply).await {
        log_transport_error(user_id, "cancel", &e);
        return Err(e);
    }

    Ok(())
}
