//! Player input.

use serde::{Deserialize, Serialize};

/// How the player's text should be interpreted.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    derive_more::Display,
    strum::EnumIter,
    strum::EnumString,
)]
#[serde(rename_all = "UPPERCASE")]
#[strum(ascii_case_insensitive)]
pub enum InputKind {
    /// An action the player character attempts
    #[default]
    #[display("DO")]
    Do,
    /// Something the player character says aloud
    #[display("SAY")]
    Say,
    /// An out-of-character steer of the story itself
    #[display("STORY")]
    Story,
}

/// The player's contribution to a turn.
///
/// # Examples
///
/// ```
/// use loreweave_core::{InputKind, PlayerInput};
///
/// let input = PlayerInput::new(InputKind::Say, "Who sent you?");
/// assert_eq!(input.kind.to_string(), "SAY");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerInput {
    /// Interpretation of the content
    #[serde(rename = "type")]
    pub kind: InputKind,
    /// Raw player text
    pub content: String,
}

impl PlayerInput {
    /// Create a player input.
    pub fn new(kind: InputKind, content: impl Into<String>) -> Self {
        Self {
            kind,
            content: content.into(),
        }
    }
}
