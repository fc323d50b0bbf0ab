//! Structured turn deltas emitted by the model after the narrative.

use crate::DirectorDecision;
use serde::{Deserialize, Serialize};

/// The decoded structured block of one model response.
///
/// # Examples
///
/// ```
/// use loreweave_core::{Pacing, TurnPayload};
///
/// let json = r#"{
///     "director": {"pacing": "Fast", "tension": 70, "narrativeFocus": "Chase", "suggestedHints": ["Run"]},
///     "world": {"characterUpdates": [{"id": "char_jax", "emotions": {"fear": 80}}]}
/// }"#;
/// let payload: TurnPayload = serde_json::from_str(json).unwrap();
/// assert_eq!(payload.director.pacing, Pacing::Fast);
/// assert_eq!(payload.world.character_updates[0].emotions.fear, Some(80));
/// assert!(payload.world.dna_shift.is_none());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TurnPayload {
    /// Directives for the next turn
    pub director: DirectorDecision,
    /// Changes to cast and world
    pub world: WorldDelta,
}

/// Changes to characters, facts and story DNA.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorldDelta {
    /// Per-character emotion and status changes
    #[serde(default)]
    pub character_updates: Vec<CharacterUpdate>,
    /// Facts established this turn
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub new_facts: Vec<String>,
    /// Additive DNA adjustments
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dna_shift: Option<DnaShift>,
    /// Narrative carried by a synthetic delta when generation failed
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub narrative: Option<String>,
}

impl WorldDelta {
    /// A delta that changes nothing and carries only a narrative line.
    pub fn narrative_only(narrative: impl Into<String>) -> Self {
        Self {
            narrative: Some(narrative.into()),
            ..Self::default()
        }
    }
}

/// Update for one character, addressed by id.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CharacterUpdate {
    /// Target character id; unknown ids are ignored
    pub id: String,
    /// Emotion fields to overwrite
    #[serde(default)]
    pub emotions: EmotionDelta,
    /// New status label
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
}

/// Emotion fields present in an update; absent fields stay unchanged.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmotionDelta {
    /// New trust value
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub trust: Option<i32>,
    /// New fear value
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fear: Option<i32>,
    /// New anger value
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub anger: Option<i32>,
    /// New hope value
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hope: Option<i32>,
}

/// Additive adjustments to each DNA axis; absent axes stay unchanged.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DnaShift {
    /// Added to `order_chaos`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub order_chaos: Option<i32>,
    /// Added to `hope_despair`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hope_despair: Option<i32>,
    /// Added to `trust_betrayal`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub trust_betrayal: Option<i32>,
}
