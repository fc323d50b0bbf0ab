//! Trait definitions for the Loreweave narrative engine.
//!
//! Two collaborators sit at the edge of the engine: a [`TextGenerator`] that
//! turns a prompt into an ordered stream of text fragments, and a [`SaveStore`]
//! that persists [`GameState`](loreweave_core::GameState) snapshots.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod traits;
mod types;

pub use traits::{SaveStore, TextGenerator};
pub use types::{SaveMetadata, TextStream, TurnEvent, TurnStream};
