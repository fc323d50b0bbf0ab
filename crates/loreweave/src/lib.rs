//! Loreweave - streaming turn engine for LLM-driven interactive fiction.
//!
//! A player submits an action, the engine assembles a prompt from the session
//! state and triggered lore, streams the model's prose back as a growing draft,
//! then applies the structured metadata block the model appends after a
//! separator. The resulting snapshot is saved through a [`SaveStore`].
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use loreweave::{InputKind, PlayerInput, ScriptedGenerator, Session, TurnExecutor};
//!
//! let state = loreweave::new_game_from_scenario("scen_cyberpunk")?;
//! let executor = TurnExecutor::new(ScriptedGenerator::new(recorded_response));
//! let mut session = Session::new(state);
//! let input = PlayerInput::new(InputKind::Do, "Check the terminal");
//! session.play_turn(&executor, &input, |draft| println!("{draft}")).await?;
//! ```
//!
//! # Architecture
//!
//! - `loreweave_error` - Error types
//! - `loreweave_core` - Session snapshot and delta types
//! - `loreweave_interface` - `TextGenerator` and `SaveStore` traits
//! - `loreweave_storage` - Filesystem and in-memory save stores
//! - `loreweave_narrative` - Prompting, stream demultiplexing, reducer, edits and sessions
//!
//! This crate re-exports everything for convenience.

pub use loreweave_core::*;
pub use loreweave_error::*;
pub use loreweave_interface::*;
pub use loreweave_narrative::*;
pub use loreweave_storage::{FileSystemSaveStore, InMemorySaveStore};
