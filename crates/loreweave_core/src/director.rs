//! Director directives steering the next turn.

use serde::{Deserialize, Serialize};

/// Narrative pacing chosen by the director.
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
#[strum(ascii_case_insensitive)]
pub enum Pacing {
    /// Lingering, descriptive prose
    Slow,
    /// Balanced prose
    #[default]
    Normal,
    /// Short, punchy prose
    Fast,
}

/// Director state: pacing, tension and the directive for the next turn.
///
/// # Examples
///
/// ```
/// use loreweave_core::{DirectorDecision, Pacing};
///
/// let director = DirectorDecision::default();
/// assert_eq!(director.pacing, Pacing::Normal);
/// assert_eq!(director.tension, 10);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DirectorDecision {
    /// Prose pacing
    pub pacing: Pacing,
    /// Dramatic tension, nominally 0..=100
    pub tension: i32,
    /// Directive for the next turn
    pub narrative_focus: String,
    /// Short player-facing suggestions, replaced wholesale each turn
    pub suggested_hints: Vec<String>,
}

impl Default for DirectorDecision {
    fn default() -> Self {
        Self {
            pacing: Pacing::Normal,
            tension: 10,
            narrative_focus: "Establish the scene and introduce the characters.".to_string(),
            suggested_hints: vec![
                "Observe the surroundings".to_string(),
                "Talk to the characters".to_string(),
            ],
        }
    }
}
