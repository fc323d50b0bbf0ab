//! Error types for the Loreweave narrative engine.
//!
//! # Error Hierarchy
//!
//! All errors follow the `ErrorKind` + wrapper struct pattern:
//! - `*ErrorKind` enum defines specific error conditions
//! - `*Error` struct wraps the kind with source location tracking
//! - All errors use `#[track_caller]` for automatic location capture
//!
//! # Examples
//!
//! ```
//! use loreweave_error::{LoreweaveResult, StorageError, StorageErrorKind};
//!
//! fn load_save() -> LoreweaveResult<String> {
//!     Err(StorageError::new(StorageErrorKind::NotFound("sess_1".to_string())))?
//! }
//!
//! assert!(load_save().is_err());
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod builder;
mod config;
mod error;
mod generation;
mod json;
mod narrative;
mod storage;

pub use builder::{BuilderError, BuilderErrorKind};
pub use config::ConfigError;
pub use error::{LoreweaveError, LoreweaveErrorKind, LoreweaveResult};
pub use generation::GenerationError;
pub use json::JsonError;
pub use narrative::{NarrativeError, NarrativeErrorKind};
pub use storage::{StorageError, StorageErrorKind};
