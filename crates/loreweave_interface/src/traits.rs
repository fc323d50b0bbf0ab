//! Collaborator traits.

use crate::{SaveMetadata, TextStream};
use async_trait::async_trait;
use loreweave_core::GameState;
use loreweave_error::LoreweaveResult;

/// A text generation backend.
///
/// Model identity, authentication and transport live behind this trait. The
/// engine only submits a prompt and reads fragments in order until the stream
/// ends or yields an error.
#[async_trait]
pub trait TextGenerator: Send + Sync {
    /// Human-readable backend name, used in logs.
    fn name(&self) -> &str;

    /// Submit a prompt and open a stream of text fragments.
    async fn generate_stream(&self, prompt: &str) -> LoreweaveResult<TextStream>;
}

/// Keyed store of session snapshots.
#[async_trait]
pub trait SaveStore: Send + Sync {
    /// Persist a snapshot under its session id, stamping `last_played`.
    async fn save(&self, state: &GameState) -> LoreweaveResult<()>;

    /// Load a snapshot, or `None` if no save exists for the id.
    async fn load(&self, id: &str) -> LoreweaveResult<Option<GameState>>;

    /// Remove a save. Deleting a missing save is not an error.
    async fn delete(&self, id: &str) -> LoreweaveResult<()>;

    /// Summaries of every save, most recently played first.
    async fn list(&self) -> LoreweaveResult<Vec<SaveMetadata>>;
}
