//! Save slot storage for Loreweave sessions.
//!
//! Two [`SaveStore`] backends are provided:
//!
//! - [`FileSystemSaveStore`]: one JSON document per session, written atomically
//! - [`InMemorySaveStore`]: a process-local map for tests and embedding
//!
//! # Example
//!
//! ```rust,no_run
//! use loreweave_storage::{FileSystemSaveStore, SaveStore};
//!
//! # async fn example(state: loreweave_core::GameState) -> Result<(), Box<dyn std::error::Error>> {
//! let store = FileSystemSaveStore::new("/tmp/loreweave-saves")?;
//! store.save(&state).await?;
//!
//! for meta in store.list().await? {
//!     println!("{} (tick {}): {}", meta.title, meta.tick, meta.preview_text);
//! }
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod filesystem;
mod memory;

pub use filesystem::FileSystemSaveStore;
pub use loreweave_error::{StorageError, StorageErrorKind};
pub use loreweave_interface::{SaveMetadata, SaveStore};
pub use memory::InMemorySaveStore;

/// Sort summaries most recently played first.
pub(crate) fn sort_recent_first(saves: &mut [SaveMetadata]) {
    saves.sort_by(|a, b| b.last_played.cmp(&a.last_played));
}
