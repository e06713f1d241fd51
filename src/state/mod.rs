//! State management module
//! 
//! This module handles conversation state, session storage and routing

pub mod context;
pub mod router;
pub mod storage;

// Re-export commonly used state components
pub use context::{ConversationState, UserSession};
pub use router::{ConversationRouter, MenuAction, Reply, MAIN_MENU_LABEL};
pub use storage::{SessionStore, InMemorySessionStore};
