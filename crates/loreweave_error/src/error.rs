//! Top-level error wrapper types.

use crate::{BuilderError, ConfigError, GenerationError, JsonError, NarrativeError, StorageError};

/// Every error condition the workspace can report.
///
/// # Examples
///
/// ```
/// use loreweave_error::{ConfigError, LoreweaveError};
///
/// let err: LoreweaveError = ConfigError::new("bad separator").into();
/// assert!(format!("{}", err).contains("Configuration Error"));
/// ```
#[derive(Debug, derive_more::From, derive_more::Display, derive_more::Error)]
pub enum LoreweaveErrorKind {
    /// JSON encoding/decoding error
    #[from(JsonError)]
    Json(JsonError),
    /// Configuration error
    #[from(ConfigError)]
    Config(ConfigError),
    /// Builder error
    #[from(BuilderError)]
    Builder(BuilderError),
    /// Text generation backend error
    #[from(GenerationError)]
    Generation(GenerationError),
    /// Save store error
    #[from(StorageError)]
    Storage(StorageError),
    /// Session or story error
    #[from(NarrativeError)]
    Narrative(NarrativeError),
}

/// Loreweave error with kind discrimination.
#[derive(Debug, derive_more::Display, derive_more::Error)]
#[display("Loreweave Error: {}", _0)]
pub struct LoreweaveError(Box<LoreweaveErrorKind>);

impl LoreweaveError {
    /// Create a new error from a kind.
    pub fn new(kind: LoreweaveErrorKind) -> Self {
        Self(Box::new(kind))
    }

    /// Get the error kind.
    pub fn kind(&self) -> &LoreweaveErrorKind {
        &self.0
    }
}

impl<T> From<T> for LoreweaveError
where
    T: Into<LoreweaveErrorKind>,
{
    fn from(err: T) -> Self {
        Self::new(err.into())
    }
}

/// Result type for Loreweave operations.
pub type LoreweaveResult<T> = std::result::Result<T, LoreweaveError>;
