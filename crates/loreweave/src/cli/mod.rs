//! Command-line interface module.
//!
//! This module provides the CLI structure and command handlers for the loreweave binary.

mod commands;
mod play;
mod saves;

pub use commands::{Cli, Commands};
pub use play::{RecordedTurn, play_recorded_turn, print_prompt};
pub use saves::{delete_session, list_saves, list_scenarios, load_config, new_session, show_session};
