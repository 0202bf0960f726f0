use std::collections::HashMap;
use std::sync::Arc;

use chrono::{DateTime, Utc};
use tokio::sync::{Mutex, MutexGuard, RwLock};
use tracing::{debug, info};
use uuid::Uuid;

use crate::error::ChatError;
use crate::store::ConversationStore;

/// One user's conversation. The store sits behind a mutex that event
/// processing holds for the whole event, location lookup included, so
/// concurrent inputs on the same session apply atomically in arrival order.
#[derive(Debug)]
pub struct ChatSession {
    pub id: Uuid,
    pub created_at: DateTime<Utc>,
    store: Mutex<ConversationStore>,
}

impl ChatSession {
    pub fn new() -> Self {
        Self {
            id: Uuid::new_v4(),
            created_at: Utc::now(),
            store: Mutex::new(ConversationStore::new()),
        }
    }

    pub async fn lock(&self) -> MutexGuard<'_, ConversationStore> {
        self.store.lock().await
    }
}

impl Default for ChatSession {
    fn default() -> Self {
        Self::new()
    }
}

/// Live sessions by id. Sessions are in-memory only and vanish on restart.
pub struct SessionRegistry {
    sessions: RwLock<HashMap<Uuid, Arc<ChatSession>>>,
}

impl SessionRegistry {
    pub fn new() -> Self {
        Self {
            sessions: RwLock::new(HashMap::new()),
        }
    }

    pub async fn create(&self) -> Arc<ChatSession> {
        let session = Arc::new(ChatSession::new());
        self.sessions
            .write()
            .await
            .insert(session.id, session.clone());
        info!("Created chat session {}", session.id);
        session
    }

    pub async fn get(&self, session_id: Uuid) -> Result<Arc<ChatSession>, ChatError> {
        self.sessions
            .read()
            .await
            .get(&session_id)
            .cloned()
            .ok_or(ChatError::SessionNotFound(session_id))
    }

    pub async fn remove(&self, session_id: Uuid) -> Result<(), ChatError> {
        match self.sessions.write().await.remove(&session_id) {
            Some(_) => {
                debug!("Removed chat session {}", session_id);
                Ok(())
            }
            None => Err(ChatError::SessionNotFound(session_id)),
        }
    }
}

impl Default for SessionRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    #[tokio::test]
    async fn test_create_and_get_session() {
        let registry = SessionRegistry::new();
        let session = registry.create().await;

        let fetched = registry.get(session.id).await.unwrap();
        assert_eq!(fetched.id, session.id);
    }

    #[tokio::test]
    async fn test_get_unknown_session_fails() {
        let registry = SessionRegistry::new();
        let missing = Uuid::new_v4();

        let error = registry.get(missing).await.unwrap_err();
        assert_matches!(error, ChatError::SessionNotFound(id) if id == missing);
    }

    #[tokio::test]
    async fn test_remove_session() {
        let registry = SessionRegistry::new();
        let session = registry.create().await;

        registry.remove(session.id).await.unwrap();
        assert_matches!(
            registry.get(session.id).await,
            Err(ChatError::SessionNotFound(_))
        );
        assert_matches!(
            registry.remove(session.id).await,
            Err(ChatError::SessionNotFound(_))
        );
    }
}
