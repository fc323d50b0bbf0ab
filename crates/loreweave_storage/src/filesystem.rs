//! Filesystem-backed save store.

use crate::sort_recent_first;
use async_trait::async_trait;
use loreweave_core::GameState;
use loreweave_error::{LoreweaveResult, StorageError, StorageErrorKind};
use loreweave_interface::{SaveMetadata, SaveStore};
use std::path::PathBuf;

/// Stores each session as `{base_path}/{session id}.json`.
///
/// Writes go to a temporary file first and are renamed into place, so a crash
/// mid-save leaves the previous snapshot intact.
#[derive(Debug, Clone)]
pub struct FileSystemSaveStore {
    base_path: PathBuf,
}

impl FileSystemSaveStore {
    /// Create a store rooted at `base_path`, creating the directory if needed.
    ///
    /// # Errors
    ///
    /// Returns error if the directory cannot be created.
    #[tracing::instrument(skip(base_path))]
    pub fn new(base_path: impl Into<PathBuf>) -> LoreweaveResult<Self> {
        let base_path = base_path.into();

        std::fs::create_dir_all(&base_path).map_err(|e| {
            StorageError::new(StorageErrorKind::DirectoryCreation(format!(
                "{}: {}",
                base_path.display(),
                e
            )))
        })?;

        tracing::debug!(path = %base_path.display(), "Opened save directory");
        Ok(Self { base_path })
    }

    /// Directory holding the save files.
    pub fn base_path(&self) -> &std::path::Path {
        &self.base_path
    }

    /// Session ids become file names; reject anything that could escape the directory.
    fn path_for(&self, id: &str) -> LoreweaveResult<PathBuf> {
        let invalid = id.is_empty()
            || id == "."
            || id == ".."
            || id.contains(['/', '\\', '\0'])
            || id.contains("..");
        if invalid {
            return Err(StorageError::new(StorageErrorKind::InvalidId(id.to_string())).into());
        }
        Ok(self.base_path.join(format!("{id}.json")))
    }
}

#[async_trait]
impl SaveStore for FileSystemSaveStore {
    #[tracing::instrument(skip(self, state), fields(id = %state.id, tick = state.tick))]
    async fn save(&self, state: &GameState) -> LoreweaveResult<()> {
        let path = self.path_for(&state.id)?;

        let mut snapshot = state.clone();
        snapshot.last_played = loreweave_core::now_millis();
        let json = serde_json::to_vec_pretty(&snapshot)
            .map_err(|e| StorageError::new(StorageErrorKind::Corrupt(e.to_string())))?;

        let temp_path = path.with_extension("json.tmp");
        tokio::fs::write(&temp_path, &json).await.map_err(|e| {
            StorageError::new(StorageErrorKind::FileWrite(format!(
                "{}: {}",
                temp_path.display(),
                e
            )))
        })?;

        tokio::fs::rename(&temp_path, &path).await.map_err(|e| {
            StorageError::new(StorageErrorKind::FileWrite(format!(
                "rename {} to {}: {}",
                temp_path.display(),
                path.display(),
                e
            )))
        })?;

        tracing::info!(path = %path.display(), size = json.len(), "Saved session");
        Ok(())
    }

    #[tracing::instrument(skip(self))]
    async fn load(&self, id: &str) -> LoreweaveResult<Option<GameState>> {
        let path = self.path_for(id)?;

        let bytes = match tokio::fs::read(&path).await {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                tracing::debug!(path = %path.display(), "No save for session");
                return Ok(None);
            }
            Err(e) => {
                return Err(StorageError::new(StorageErrorKind::FileRead(format!(
                    "{}: {}",
                    path.display(),
                    e
                )))
                .into());
            }
        };

        let state = serde_json::from_slice(&bytes).map_err(|e| {
            StorageError::new(StorageErrorKind::Corrupt(format!(
                "{}: {}",
                path.display(),
                e
            )))
        })?;
        Ok(Some(state))
    }

    #[tracing::instrument(skip(self))]
    async fn delete(&self, id: &str) -> LoreweaveResult<()> {
        let path = self.path_for(id)?;

        match tokio::fs::remove_file(&path).await {
            Ok(()) => {
                tracing::info!(path = %path.display(), "Deleted save");
                Ok(())
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(StorageError::new(StorageErrorKind::FileDelete(format!(
                "{}: {}",
                path.display(),
                e
            )))
            .into()),
        }
    }

    #[tracing::instrument(skip(self))]
    async fn list(&self) -> LoreweaveResult<Vec<SaveMetadata>> {
        let mut entries = tokio::fs::read_dir(&self.base_path).await.map_err(|e| {
            StorageError::new(StorageErrorKind::FileRead(format!(
                "{}: {}",
                self.base_path.display(),
                e
            )))
        })?;

        let mut saves = Vec::new();
        loop {
            let entry = entries.next_entry().await.map_err(|e| {
                StorageError::new(StorageErrorKind::FileRead(format!(
                    "{}: {}",
                    self.base_path.display(),
                    e
                )))
            })?;
            let Some(entry) = entry else { break };

            let path = entry.path();
            if path.extension().and_then(|ext| ext.to_str()) != Some("json") {
                continue;
            }

            let bytes = match tokio::fs::read(&path).await {
                Ok(bytes) => bytes,
                Err(e) => {
                    tracing::warn!(path = %path.display(), error = %e, "Skipping unreadable save");
                    continue;
                }
            };
            match serde_json::from_slice::<GameState>(&bytes) {
                Ok(state) => saves.push(SaveMetadata::from_state(&state)),
                Err(e) => {
                    tracing::warn!(path = %path.display(), error = %e, "Skipping corrupt save");
                }
            }
        }

        sort_recent_first(&mut saves);
        tracing::debug!(count = saves.len(), "Listed saves");
        Ok(saves)
    }
}
