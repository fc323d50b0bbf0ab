//! Direct edits of cast, lore, locations and director state.
//!
//! Every edit produces a new snapshot. A rejected edit returns the prior state
//! unchanged together with the reason.

use loreweave_core::{CharacterState, GameState, Location, Pacing, StoryCard};
use serde::{Deserialize, Serialize};

/// Partial update of the director state. Absent fields keep their value.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DirectorPatch {
    /// New pacing
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pacing: Option<Pacing>,
    /// New tension
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tension: Option<i32>,
    /// New narrative focus
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub narrative_focus: Option<String>,
    /// Replacement hints
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub suggested_hints: Option<Vec<String>>,
}

/// An edit requested outside of turn execution.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "payload", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EditCommand {
    /// Add a new lore card
    AddCard(StoryCard),
    /// Replace a lore card with the same id
    UpdateCard(StoryCard),
    /// Remove a lore card by id
    DeleteCard(String),
    /// Add a new character
    AddCharacter(CharacterState),
    /// Replace a character with the same id
    UpdateCharacter(CharacterState),
    /// Remove a character by id
    DeleteCharacter(String),
    /// Add a location
    AddLocation(Location),
    /// Replace a location with the same id
    UpdateLocation(Location),
    /// Remove a location by id; the current location cannot be removed
    DeleteLocation(String),
    /// Merge fields into the director state
    UpdateDirector(DirectorPatch),
}

/// Whether an edit took effect.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum EditOutcome {
    /// The new snapshot reflects the edit
    Applied,
    /// The edit was refused and the snapshot is unchanged
    Rejected {
        /// Human-readable reason
        reason: String,
    },
}

impl EditOutcome {
    fn rejected(reason: impl Into<String>) -> Self {
        let reason = reason.into();
        tracing::warn!(%reason, "Edit rejected");
        Self::Rejected { reason }
    }

    /// Whether the edit took effect.
    pub fn is_applied(&self) -> bool {
        matches!(self, Self::Applied)
    }
}

/// Result of [`apply_edit`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditResult {
    /// Snapshot after the edit
    pub state: GameState,
    /// Whether the edit took effect
    pub outcome: EditOutcome,
}

/// Apply an edit to a snapshot.
///
/// # Examples
///
/// ```
/// # use loreweave_core::GameState;
/// # fn demo(state: &GameState) {
/// use loreweave_narrative::{EditCommand, apply_edit};
///
/// let current = state.world.current_location_id.clone();
/// let result = apply_edit(state, EditCommand::DeleteLocation(current));
/// assert!(!result.outcome.is_applied());
/// assert_eq!(&result.state, state);
/// # }
/// ```
#[tracing::instrument(skip_all)]
pub fn apply_edit(prior: &GameState, command: EditCommand) -> EditResult {
    let mut next = prior.clone();
    let outcome = match command {
        EditCommand::AddCard(card) => {
            if next.card(&card.id).is_some() {
                EditOutcome::rejected(format!("card {} already exists", card.id))
            } else {
                next.story_cards.push(card);
                EditOutcome::Applied
            }
        }
        EditCommand::UpdateCard(card) => {
            match next.story_cards.iter_mut().find(|c| c.id == card.id) {
                Some(slot) => {
                    *slot = card;
                    EditOutcome::Applied
                }
                None => EditOutcome::rejected(format!("no card {}", card.id)),
            }
        }
        EditCommand::DeleteCard(id) => {
            let before = next.story_cards.len();
            next.story_cards.retain(|c| c.id != id);
            if next.story_cards.len() == before {
                EditOutcome::rejected(format!("no card {id}"))
            } else {
                EditOutcome::Applied
            }
        }
        EditCommand::AddCharacter(character) => {
            if next.character(&character.id).is_some() {
                EditOutcome::rejected(format!("character {} already exists", character.id))
            } else {
                next.characters.push(character);
                EditOutcome::Applied
            }
        }
        EditCommand::UpdateCharacter(character) => {
            match next.characters.iter_mut().find(|c| c.id == character.id) {
                Some(slot) => {
                    *slot = character;
                    EditOutcome::Applied
                }
                None => EditOutcome::rejected(format!("no character {}", character.id)),
            }
        }
        EditCommand::DeleteCharacter(id) => {
            let before = next.characters.len();
            next.characters.retain(|c| c.id != id);
            if next.characters.len() == before {
                EditOutcome::rejected(format!("no character {id}"))
            } else {
                EditOutcome::Applied
            }
        }
        EditCommand::AddLocation(location) | EditCommand::UpdateLocation(location) => {
            next.world.locations.insert(location.id.clone(), location);
            EditOutcome::Applied
        }
        EditCommand::DeleteLocation(id) => {
            if id == next.world.current_location_id {
                EditOutcome::rejected(format!("{id} is the current location"))
            } else if next.world.locations.remove(&id).is_none() {
                EditOutcome::rejected(format!("no location {id}"))
            } else {
                EditOutcome::Applied
            }
        }
        EditCommand::UpdateDirector(patch) => {
            let director = &mut next.director_state;
            if let Some(pacing) = patch.pacing {
                director.pacing = pacing;
            }
            if let Some(tension) = patch.tension {
                director.tension = tension;
            }
            if let Some(focus) = patch.narrative_focus {
                director.narrative_focus = focus;
            }
            if let Some(hints) = patch.suggested_hints {
                director.suggested_hints = hints;
            }
            EditOutcome::Applied
        }
    };

    match outcome {
        EditOutcome::Applied => EditResult {
            state: next,
            outcome,
        },
        EditOutcome::Rejected { .. } => EditResult {
            state: prior.clone(),
            outcome,
        },
    }
}
