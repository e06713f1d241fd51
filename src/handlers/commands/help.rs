//! Help command handler

use teloxide::{Bot, types::Message, prelude::*};
use crate::utils::errors::Result;

pub const HELP_TEXT: &str = "🤖 SupportBot Help\n\n\
    /start - Show the main menu\n\
    /cancel - Leave the current step\n\
    /help - Show this help message\n\n\
    Use the keyboard buttons to track an order, browse products or read our FAQs.";

/// Handle /help command
pub async fn handle_help(bot: Bot, msg: Message) -> Result<()> {
    bot.send_message(msg.chat.id, HELP_TEXT).await?;
    Ok(())
}
