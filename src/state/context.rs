//! Conversation context
//! 
//! The per-user position in the menu flow and the session record that
//! carries it between messages.

use std::fmt;
use serde::{Deserialize, Serialize};
use chrono::{DateTime, Utc};

/// Where a user currently is in the menu flow
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum ConversationState {
    #[default]
    MainMenu,
    /// Waiting for an order number
    OrderTracking,
    /// Waiting for a product number
    ProductInfo,
}

impl ConversationState {
    /// Every state, in menu order
    pub const ALL: [ConversationState; 3] = [
        ConversationState::MainMenu,
        ConversationState::OrderTracking,
        ConversationState::ProductInfo,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ConversationState::MainMenu => "main_menu",
            ConversationState::OrderTracking => "order_tracking",
            ConversationState::ProductInfo => "product_info",
        }
    }
}

impl fmt::Display for ConversationState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A user's session: current state plus bookkeeping
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserSession {
    /// User ID this session belongs to
    pub user_id: i64,
    /// Current conversation state
    pub state: ConversationState,
    /// When the session was created (first interaction)
    pub created_at: DateTime<Utc>,
    /// When the state was last written
    pub updated_at: DateTime<Utc>,
}

impl UserSession {
    /// Create a new session in the main menu
    pub fn new(user_id: i64) -> Self {
        let now = Utc::now();
        Self {
            user_id,
            state: ConversationState::MainMenu,
            created_at: now,
            updated_at: now,
        }
    }

    /// Overwrite the current state
    pub fn transition(&mut self, state: ConversationState) {
        self.state = state;
        self.updated_at = Utc::now();
    }
}
