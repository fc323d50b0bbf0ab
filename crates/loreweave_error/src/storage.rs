//! Save store error types.

/// Kinds of save store errors.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, derive_more::Display)]
pub enum StorageErrorKind {
    /// Failed to create the save directory
    #[display("Failed to create save directory: {}", _0)]
    DirectoryCreation(String),
    /// Failed to write a save file
    #[display("Failed to write save: {}", _0)]
    FileWrite(String),
    /// Failed to read a save file
    #[display("Failed to read save: {}", _0)]
    FileRead(String),
    /// Failed to delete a save file
    #[display("Failed to delete save: {}", _0)]
    FileDelete(String),
    /// No save exists for the session id
    #[display("Save not found: {}", _0)]
    NotFound(String),
    /// Session id cannot be used as a save key
    #[display("Invalid session id: {}", _0)]
    InvalidId(String),
    /// Save contents could not be encoded or decoded
    #[display("Corrupt save: {}", _0)]
    Corrupt(String),
}

/// Save store error with location tracking.
///
/// # Examples
///
/// ```
/// use loreweave_error::{StorageError, StorageErrorKind};
///
/// let err = StorageError::new(StorageErrorKind::InvalidId("../etc".to_string()));
/// assert!(format!("{}", err).contains("Invalid session id"));
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Storage Error: {} at line {} in {}", kind, line, file)]
pub struct StorageError {
    /// The kind of error that occurred
    pub kind: StorageErrorKind,
    /// Line number where error was created
    pub line: u32,
    /// File where error was created
    pub file: &'static str,
}

impl StorageError {
    /// Create a new storage error with automatic location tracking.
    #[track_caller]
    pub fn new(kind: StorageErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}
