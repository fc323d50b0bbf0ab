//! Core data model for the Loreweave narrative engine.
//!
//! A [`GameState`] is the single authoritative snapshot of a role-play session:
//! its event log, cast, lore cards, tonal "DNA", director directives and world.
//! The delta types ([`TurnPayload`], [`WorldDelta`], ...) describe the structured
//! block a model appends to its narrative each turn.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod card;
mod character;
mod delta;
mod director;
mod dna;
mod event;
mod input;
mod state;
mod world;

pub use card::{StoryCard, StoryCardBuilder};
pub use character::{CharacterState, CharacterStateBuilder, Emotions};
pub use delta::{CharacterUpdate, DnaShift, EmotionDelta, TurnPayload, WorldDelta};
pub use director::{DirectorDecision, Pacing};
pub use dna::StoryDna;
pub use event::{EventKind, EventLogEntry};
pub use input::{InputKind, PlayerInput};
pub use state::GameState;
pub use world::{Location, WorldState};

/// Current wall-clock time in milliseconds since the Unix epoch.
pub fn now_millis() -> i64 {
    chrono::Utc::now().timestamp_millis()
}
