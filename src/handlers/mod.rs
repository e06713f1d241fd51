//! Bot handlers module
//! 
//! This module contains all Telegram bot handlers organized by type:
//! - Command handlers for bot commands
//! - Message handlers for menu text and other messages
//! - Keyboard conversion and reply delivery

pub mod commands;
pub mod keyboards;
pub mod messages;

// Re-export commonly used handler functions
pub use commands::*;
pub use keyboards::{reply_keyboard, send_reply};
pub use messages::*;
