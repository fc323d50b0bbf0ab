//! The root session snapshot.

use crate::{CharacterState, DirectorDecision, EventKind, EventLogEntry, StoryCard, StoryDna, WorldState};
use serde::{Deserialize, Serialize};

/// Complete state of one role-play session.
///
/// A snapshot is never patched in place by callers: turn completion and edit
/// operations each produce a new `GameState` from the previous one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameState {
    /// Session id, also the save key
    pub id: String,
    /// Story title
    pub title: String,
    /// Completed turn count
    pub tick: u64,
    /// A turn is in flight
    #[serde(default)]
    pub is_processing: bool,
    /// Ordered event log
    pub history: Vec<EventLogEntry>,
    /// Cast, unique by id
    pub characters: Vec<CharacterState>,
    /// Lore cards, unique by id
    pub story_cards: Vec<StoryCard>,
    /// Tonal axes
    #[serde(rename = "storyDNA")]
    pub story_dna: StoryDna,
    /// Directives for the next turn
    pub director_state: DirectorDecision,
    /// Locations, time and facts
    pub world: WorldState,
    /// Last save time, milliseconds since the Unix epoch
    #[serde(default)]
    pub last_played: i64,
}

impl GameState {
    /// Look up a character by id.
    pub fn character(&self, id: &str) -> Option<&CharacterState> {
        self.characters.iter().find(|c| c.id == id)
    }

    /// Look up a story card by id.
    pub fn card(&self, id: &str) -> Option<&StoryCard> {
        self.story_cards.iter().find(|c| c.id == id)
    }

    /// The most recent `n` history entries, oldest first.
    pub fn recent_history(&self, n: usize) -> &[EventLogEntry] {
        let start = self.history.len().saturating_sub(n);
        &self.history[start..]
    }

    /// The most recent `n` world facts, oldest first.
    pub fn recent_facts(&self, n: usize) -> &[String] {
        let start = self.world.facts.len().saturating_sub(n);
        &self.world.facts[start..]
    }

    /// Whether the log already holds narrator text for the turn in flight.
    pub fn has_draft(&self) -> bool {
        self.history
            .last()
            .is_some_and(|e| e.kind == EventKind::Narrator && e.tick == self.tick + 1)
    }
}
