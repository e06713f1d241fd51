//! SupportBot Telegram Bot
//!
//! A scripted customer-support bot. Incoming text is routed through a small
//! per-user state machine that serves FAQs, product details and simulated
//! order status from a static content catalog.

pub mod config;
pub mod handlers;
pub mod models;
pub mod state;
pub mod utils;
pub mod middleware;

// Re-export commonly used types
pub use config::Settings;
pub use utils::errors::{SupportBotError, Result};

// Re-export main components for easy access
pub use models::Catalog;
pub use state::{ConversationRouter, ConversationState, InMemorySessionStore, Reply, SessionStore};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");

/// Get library information
pub fn info() -> String {
    format!("{} v{}", NAME, VERSION)
}
