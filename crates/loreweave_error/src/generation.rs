//! Text generation error types.

/// Failure reported by a text generation backend while opening or reading a stream.
///
/// # Examples
///
/// ```
/// use loreweave_error::GenerationError;
///
/// let err = GenerationError::new("connection reset");
/// assert!(format!("{}", err).contains("connection reset"));
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Generation Error: {} at line {} in {}", message, line, file)]
pub struct GenerationError {
    /// Backend-supplied description
    pub message: String,
    /// Line number where the error occurred
    pub line: u32,
    /// File where the error occurred
    pub file: &'static str,
}

impl GenerationError {
    /// Create a new GenerationError at the current location.
    #[track_caller]
    pub fn new(message: impl Into<String>) -> Self {
        let location = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: location.line(),
            file: location.file(),
        }
    }
}
