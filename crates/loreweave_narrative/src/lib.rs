//! Turn execution engine for Loreweave.
//!
//! A turn flows through five stages:
//!
//! - **Lore matching** ([`match_lore`]): keyword scan of recent history and input
//! - **Prompt assembly** ([`assemble_prompt`]): state, psychology, lore, instructions
//! - **Stream demultiplexing** ([`StreamDemux`]): live narrative drafts, buffered tail
//! - **Payload parsing** ([`parse_payload`]): fence-tolerant, failure-tolerant JSON decode
//! - **State reduction** ([`apply_turn`]): delta merged into the next snapshot
//!
//! [`TurnExecutor`] wires the first four together behind a
//! [`TextGenerator`](loreweave_interface::TextGenerator); [`Session`] owns the
//! state and applies the result.
//!
//! # Example
//!
//! ```rust,no_run
//! use loreweave_core::{InputKind, PlayerInput};
//! use loreweave_narrative::{ScriptedGenerator, Session, TurnExecutor, new_game_from_scenario};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let mut session = Session::new(new_game_from_scenario("scen_cyberpunk")?);
//! let executor = TurnExecutor::new(ScriptedGenerator::new("Jax flinches.\n___METADATA___\n{}"));
//!
//! let input = PlayerInput::new(InputKind::Say, "Jax, who is at the door?");
//! session.play_turn(&executor, &input, |draft| println!("{draft}")).await?;
//! assert_eq!(session.state().tick, 1);
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod config;
mod demux;
mod edit;
mod executor;
mod lore;
mod payload;
mod prompt;
mod reducer;
mod scenario;
mod scripted;
mod session;

pub use config::{LoreweaveConfig, NarrativeConfig, NarrativeConfigBuilder, StorageConfig};
pub use demux::{DemuxEnd, DemuxPhase, StreamDemux};
pub use edit::{DirectorPatch, EditCommand, EditOutcome, EditResult, apply_edit};
pub use executor::TurnExecutor;
pub use lore::{match_lore, triggered_cards};
pub use payload::{parse_json, parse_payload, strip_code_fence};
pub use prompt::{assemble_prompt, character_line};
pub use reducer::{apply_turn, fallback_payload};
pub use scenario::{
    CharacterForm, ScenarioTemplate, StoryForm, bundled_scenarios, game_from_form,
    new_game_from_scenario,
};
pub use scripted::ScriptedGenerator;
pub use session::Session;
