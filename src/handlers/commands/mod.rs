//! Command handlers module
//! 
//! This module contains handlers for all bot commands like /start, /help, etc.

pub mod start;
pub mod help;
pub mod cancel;

use std::sync::Arc;
use teloxide::{Bot, types::Message, utils::command::BotCommands};
use crate::utils::errors::Result;
use crate::middleware::LoggingMiddleware;
use crate::state::ConversationRouter;

/// All available bot commands
#[derive(BotCommands, Clone, Debug, PartialEq, Eq)]
#[command(rename_rule = "lowercase", description = "SupportBot commands:")]
pub enum Command {
    #[command(description = "Start the bot and show the main menu")]
    Start,
    #[command(description = "Show help information")]
    Help,
    #[command(description = "Leave the current step and return to the main menu")]
    Cancel,
}

/// Main command dispatcher
pub async fn handle_command(
    bot: Bot,
    msg: Message,
    cmd: Command,
    router: Arc<ConversationRouter>,
    logging: LoggingMiddleware,
) -> Result<()> {
    match cmd {
        Command::Start => start::handle_start(bot, msg, router, logging).await,
        Command::Help => help::handle_help(bot, msg).await,
        Command::Cancel => cancel::handle_cancel(bot, msg, router, logging).await,
    }
}
