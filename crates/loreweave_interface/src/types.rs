//! Shared types for the collaborator traits.

use futures_util::Stream;
use loreweave_core::{GameState, TurnPayload};
use loreweave_error::LoreweaveResult;
use serde::{Deserialize, Serialize};
use std::pin::Pin;

/// Ordered text fragments from a generation backend.
pub type TextStream = Pin<Box<dyn Stream<Item = LoreweaveResult<String>> + Send>>;

/// Events produced by one turn, consumed exactly once.
pub type TurnStream<'a> = Pin<Box<dyn Stream<Item = TurnEvent> + Send + 'a>>;

/// One event of a turn.
///
/// `Text` carries the whole narrative draft so far, not a diff. At most one
/// `Final` is produced and it always comes after the last `Text`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum TurnEvent {
    /// Current narrative draft
    Text {
        /// Full draft text
        content: String,
    },
    /// Decoded structured block
    Final(TurnPayload),
}

/// Summary of one save, for listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SaveMetadata {
    /// Session id
    pub id: String,
    /// Story title
    pub title: String,
    /// Last save time, milliseconds since the Unix epoch
    pub last_played: i64,
    /// Completed turn count
    pub tick: u64,
    /// Beginning of the latest history entry
    pub preview_text: String,
}

impl SaveMetadata {
    /// Number of characters of the latest entry kept in the preview.
    pub const PREVIEW_CHARS: usize = 100;

    /// Summarize a snapshot.
    ///
    /// # Examples
    ///
    /// ```
    /// # use loreweave_interface::SaveMetadata;
    /// # fn demo(state: &loreweave_core::GameState) {
    /// let meta = SaveMetadata::from_state(state);
    /// assert_eq!(meta.id, state.id);
    /// # }
    /// ```
    pub fn from_state(state: &GameState) -> Self {
        let preview_text = match state.history.last() {
            Some(entry) => {
                let head: String = entry
                    .description
                    .chars()
                    .take(Self::PREVIEW_CHARS)
                    .collect();
                format!("{head}...")
            }
            None => "No history.".to_string(),
        };
        Self {
            id: state.id.clone(),
            title: state.title.clone(),
            last_played: state.last_played,
            tick: state.tick,
            preview_text,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state_with_history(descriptions: &[&str]) -> GameState {
        let history: Vec<serde_json::Value> = descriptions
            .iter()
            .enumerate()
            .map(|(i, d)| {
                serde_json::json!({
                    "id": format!("evt_{i}"), "tick": 0, "type": "NARRATOR",
                    "description": d, "timestamp": 0
                })
            })
            .collect();
        serde_json::from_value(serde_json::json!({
            "id": "sess_1",
            "title": "Tale",
            "tick": 4,
            "history": history,
            "characters": [],
            "storyCards": [],
            "storyDNA": {"orderChaos": 50, "hopeDespair": 50, "trustBetrayal": 50},
            "directorState": {"pacing": "Normal", "tension": 10, "narrativeFocus": "", "suggestedHints": []},
            "world": {"currentLocationId": "loc", "locations": {
                "loc": {"id": "loc", "name": "Loc", "description": ""}
            }, "time": "Dawn"},
            "lastPlayed": 42
        }))
        .unwrap()
    }

    #[test]
    fn preview_truncates_latest_entry() {
        let long = "x".repeat(150);
        let meta = SaveMetadata::from_state(&state_with_history(&["first", &long]));
        assert_eq!(meta.preview_text, format!("{}...", "x".repeat(100)));
        assert_eq!(meta.tick, 4);
        assert_eq!(meta.last_played, 42);
    }

    #[test]
    fn preview_of_empty_history() {
        let meta = SaveMetadata::from_state(&state_with_history(&[]));
        assert_eq!(meta.preview_text, "No history.");
    }

    #[test]
    fn turn_events_are_kind_tagged() {
        let text = TurnEvent::Text {
            content: "Hello".to_string(),
        };
        let value = serde_json::to_value(&text).unwrap();
        assert_eq!(value["kind"], "text");
        assert_eq!(value["content"], "Hello");
    }
}
