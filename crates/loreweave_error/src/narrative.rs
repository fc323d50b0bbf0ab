//! Narrative session error types.

/// Specific error conditions for session and story operations.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, derive_more::Display)]
pub enum NarrativeErrorKind {
    /// A turn was started while another one is still in flight
    #[display("Turn already in progress at tick {}", _0)]
    TurnInProgress(u64),
    /// A turn was completed without being started
    #[display("No turn in progress")]
    NoTurnInProgress,
    /// Requested scenario template does not exist
    #[display("Unknown scenario: {}", _0)]
    UnknownScenario(String),
    /// New-story form is missing required content
    #[display("Invalid story form: {}", _0)]
    InvalidStoryForm(String),
    /// Bundled scenario data could not be parsed
    #[display("Failed to parse scenarios: {}", _0)]
    ScenarioParse(String),
}

/// Error type for narrative operations.
///
/// # Examples
///
/// ```
/// use loreweave_error::{NarrativeError, NarrativeErrorKind};
///
/// let err = NarrativeError::new(NarrativeErrorKind::TurnInProgress(3));
/// assert!(format!("{}", err).contains("in progress"));
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Narrative Error: {} at line {} in {}", kind, line, file)]
pub struct NarrativeError {
    /// The specific error condition
    pub kind: NarrativeErrorKind,
    /// Line number where the error occurred
    pub line: u32,
    /// Source file where the error occurred
    pub file: &'static str,
}

impl NarrativeError {
    /// Create a new NarrativeError with automatic location tracking.
    #[track_caller]
    pub fn new(kind: NarrativeErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}
