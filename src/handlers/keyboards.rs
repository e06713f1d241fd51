//! Reply keyboards and delivery

use teloxide::{Bot, prelude::*, types::{ChatId, KeyboardButton, KeyboardMarkup}};
use tracing::debug;
use crate::state::Reply;
use crate::utils::errors::Result;

/// Build a resizable reply keyboard from rows of labels
pub fn reply_keyboard(options: &[Vec<String>]) -> KeyboardMarkup {
    let rows: Vec<Vec<KeyboardButton>> = options
        .iter()
        .map(|row| row.iter().map(|label| KeyboardButton::new(label.clone())).collect())
        .collect();

    KeyboardMarkup::new(rows).resize_keyboard()
}

/// Deliver a reply with its quick-reply keyboard
pub async fn send_reply(bot: &Bot, chat_id: ChatId, reply: &Reply) -> Result<()> {
    let sent = if reply.options.is_empty() {
        bot.send_message(chat_id, reply.text.clone()).await?
    } else {
        bot.send_message(chat_id, reply.text.clone())
            .reply_markup(reply_keyboard(&reply.options))
            .await?
    };

    debug!(chat_id = ?chat_id, message_id = sent.id.0, "Reply delivered");
    Ok(())
}
