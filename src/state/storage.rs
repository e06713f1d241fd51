//! Session storage
//!
//! Per-user conversation state lives behind the [`SessionStore`] trait so the
//! router can be handed any backend. The only backend shipped is in-memory:
//! sessions are created on first interaction, overwritten every turn, never
//! expire, and are lost when the process exits.

use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard};
use tracing::debug;
use super::context::{ConversationState, UserSession};

/// Get/set access to per-user conversation state
pub trait SessionStore: Send + Sync + std::fmt::Debug {
    /// Session for a user, if one exists
    fn get(&self, user_id: i64) -> Option<UserSession>;

    /// Store the user's state, creating the session on first write
    fn set(&self, user_id: i64, state: ConversationState);

    /// Drop the user's session; returns whether one existed
    fn remove(&self, user_id: i64) -> bool;

    /// Number of stored sessions
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Current state, defaulting to the main menu for unknown users
    fn state_for(&self, user_id: i64) -> ConversationState {
        self.get(user_id).map(|session| session.state).unwrap_or_default()
    }
}

/// Process-local session store
///
/// Writes from the same user race with last-write-wins semantics.
#[derive(Debug, Default)]
pub struct InMemorySessionStore {
    sessions: Mutex<HashMap<i64, UserSession>>,
}

impl InMemorySessionStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Sessions are plain data, so a panic mid-write cannot leave one half-updated
    fn sessions(&self) -> MutexGuard<'_, HashMap<i64, UserSession>> {
        self.sessions.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    /// Count of sessions per state
    pub fn state_counts(&self) -> HashMap<ConversationState, usize> {
        let mut counts = HashMap::new();
        for session in self.sessions().values() {
            *counts.entry(session.state).or_insert(0) += 1;
        }
        counts
    }
}

impl SessionStore for InMemorySessionStore {
    fn get(&self, user_id: i64) -> Option<UserSession> {
        self.sessions().get(&user_id).cloned()
    }

    fn set(&self, user_id: i64, state: ConversationState) {
        let mut sessions = self.sessions();
        let session = sessions.entry(user_id).or_insert_with(|| {
            debug!(user_id = user_id, "Creating session on first interaction");
            UserSession::new(user_id)
        });
        session.transition(state);
    }

    fn remove(&self, user_id: i64) -> bool {
        let removed = self.sessions().remove(&user_id).is_some();
        if removed {
            debug!("Deleted session for user {}", user_id);
        } else {
            debug!("No session to delete for user {}", user_id);
        }
        removed
    }

    fn len(&self) -> usize {
        self.sessions().len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    #[test]
    fn test_unknown_user_defaults_to_main_menu() {
        let store = InMemorySessionStore::new();
        assert!(store.get(123).is_none());
        assert_eq!(store.state_for(123), ConversationState::MainMenu);
        assert!(store.is_empty());
    }

    #[test]
    fn test_set_then_get() {
        let store = InMemorySessionStore::new();
        store.set(123, ConversationState::OrderTracking);

        let session = store.get(123).unwrap();
        assert_eq!(session.user_id, 123);
        assert_eq!(session.state, ConversationState::OrderTracking);
        assert_eq!(store.len(), 1);

        store.set(123, ConversationState::MainMenu);
        assert_eq!(store.state_for(123), ConversationState::MainMenu);
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_remove() {
        let store = InMemorySessionStore::new();
        store.set(789, ConversationState::ProductInfo);
        assert!(store.remove(789));
        assert!(!store.remove(789));
        assert!(store.get(789).is_none());
    }

    #[test]
    fn test_state_counts() {
        let store = InMemorySessionStore::new();
        store.set(1, ConversationState::ProductInfo);
        store.set(2, ConversationState::ProductInfo);
        store.set(3, ConversationState::MainMenu);

        let counts = store.state_counts();
        assert_eq!(counts.get(&ConversationState::ProductInfo), Some(&2));
        assert_eq!(counts.get(&ConversationState::MainMenu), Some(&1));
        assert_eq!(counts.get(&ConversationState::OrderTracking), None);
    }

    #[test]
    fn test_concurrent_users_do_not_interfere() {
        let store = Arc::new(InMemorySessionStore::new());
        let handles: Vec<_> = (0..8i64)
            .map(|user_id| {
                let store = Arc::clone(&store);
                std::thread::spawn(move || {
                    for _ in 0..100 {
                        store.set(user_id, ConversationState::OrderTracking);
                        store.set(user_id, ConversationState::ProductInfo);
                    }
                })
            })
            .collect();
        for handle in handles {
            handle.join().unwrap();
        }

        assert_eq!(store.len(), 8);
        for user_id in 0..8 {
            assert_eq!(store.state_for(user_id), ConversationState::ProductInfo);
        }
    }
}
