//! In-memory save store.

use crate::sort_recent_first;
use async_trait::async_trait;
use loreweave_core::GameState;
use loreweave_error::LoreweaveResult;
use loreweave_interface::{SaveMetadata, SaveStore};
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

/// Save store backed by a `HashMap`. All saves are lost when the last clone is dropped.
#[derive(Debug, Clone, Default)]
pub struct InMemorySaveStore {
    saves: Arc<RwLock<HashMap<String, GameState>>>,
}

impl InMemorySaveStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored sessions.
    pub async fn len(&self) -> usize {
        self.saves.read().await.len()
    }

    /// Whether the store is empty.
    pub async fn is_empty(&self) -> bool {
        self.saves.read().await.is_empty()
    }
}

#[async_trait]
impl SaveStore for InMemorySaveStore {
    async fn save(&self, state: &GameState) -> LoreweaveResult<()> {
        let mut snapshot = state.clone();
        snapshot.last_played = loreweave_core::now_millis();
        self.saves.write().await.insert(snapshot.id.clone(), snapshot);
        Ok(())
    }

    async fn load(&self, id: &str) -> LoreweaveResult<Option<GameState>> {
        Ok(self.saves.read().await.get(id).cloned())
    }

    async fn delete(&self, id: &str) -> LoreweaveResult<()> {
        self.saves.write().await.remove(id);
        Ok(())
    }

    async fn list(&self) -> LoreweaveResult<Vec<SaveMetadata>> {
        let mut saves: Vec<SaveMetadata> = self
            .saves
            .read()
            .await
            .values()
            .map(SaveMetadata::from_state)
            .collect();
        sort_recent_first(&mut saves);
        Ok(saves)
    }
}
