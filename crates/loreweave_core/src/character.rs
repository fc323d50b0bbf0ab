//! Characters and their psychological state.

use derive_builder::Builder;
use serde::{Deserialize, Serialize};

/// Emotional readout of a character. Each axis is nominally 0..=100.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Emotions {
    /// 0 = paranoid, 100 = blind faith
    pub trust: i32,
    /// 0 = brave, 100 = terrified
    pub fear: i32,
    /// Hostility
    pub anger: i32,
    /// Optimism
    pub hope: i32,
}

impl Default for Emotions {
    fn default() -> Self {
        Self {
            trust: 50,
            fear: 20,
            anger: 10,
            hope: 50,
        }
    }
}

/// A member of the cast.
///
/// # Examples
///
/// ```
/// use loreweave_core::CharacterState;
///
/// let jax = CharacterState::builder()
///     .id("char_jax")
///     .name("Jax")
///     .role("Fixer")
///     .build()
///     .unwrap();
///
/// assert_eq!(jax.status, "Normal");
/// assert_eq!(jax.emotions.trust, 50);
/// assert!(!jax.is_dead());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Builder)]
#[builder(setter(into))]
pub struct CharacterState {
    /// Stable id referenced by turn deltas
    pub id: String,
    /// Display name
    pub name: String,
    /// Narrative role
    #[builder(default)]
    pub role: String,
    /// Appearance and background
    #[builder(default)]
    pub description: String,
    /// Free-text condition label
    #[builder(default = "\"Normal\".to_string()")]
    pub status: String,
    /// Psychological state
    #[builder(default)]
    pub emotions: Emotions,
}

impl CharacterState {
    /// Create a new builder.
    pub fn builder() -> CharacterStateBuilder {
        CharacterStateBuilder::default()
    }

    /// Whether the status marks the character as dead ("Dead" or "Deceased", any case).
    pub fn is_dead(&self) -> bool {
        let status = self.status.trim();
        status.eq_ignore_ascii_case("dead") || status.eq_ignore_ascii_case("deceased")
    }
}
