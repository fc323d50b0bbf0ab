//! CLI command definitions.

use clap::{Parser, Subcommand, ValueEnum};
use loreweave::{InputKind, ScriptedGenerator};
use std::path::PathBuf;

/// Loreweave - streaming turn engine for LLM-driven interactive fiction
#[derive(Parser, Debug)]
#[command(name = "loreweave")]
#[command(about = "Streaming turn engine for LLM-driven interactive fiction", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Command to execute
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Configuration file layered over the bundled defaults
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List bundled scenario templates
    Scenarios,

    /// Start a new session from a scenario template and save it
    New {
        /// Scenario template id
        #[arg(long)]
        scenario: String,
    },

    /// List saved sessions, most recent first
    List {
        /// Output format
        #[arg(long, default_value = "human")]
        format: OutputFormat,
    },

    /// Show a saved session
    Show {
        /// Session id
        id: String,

        /// Output format
        #[arg(long, default_value = "human")]
        format: OutputFormat,
    },

    /// Delete a saved session
    Delete {
        /// Session id
        id: String,
    },

    /// Print the prompt the next turn would send
    Prompt {
        /// Session id
        id: String,

        /// How the input is interpreted (do, say, story)
        #[arg(long, default_value = "do")]
        action: InputKind,

        /// Player input
        #[arg(required = true, num_args = 1..)]
        text: Vec<String>,
    },

    /// Play one turn against a recorded model response
    Turn {
        /// Session id
        id: String,

        /// How the input is interpreted (do, say, story)
        #[arg(long, default_value = "do")]
        action: InputKind,

        /// File holding the recorded model response
        #[arg(long)]
        response: PathBuf,

        /// Characters per streamed fragment
        #[arg(long, default_value_t = ScriptedGenerator::DEFAULT_FRAGMENT_SIZE)]
        fragment_size: usize,

        /// Player input
        #[arg(required = true, num_args = 1..)]
        text: Vec<String>,
    },
}

/// Output format options
#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum OutputFormat {
    /// Human-readable format
    Human,
    /// JSON format
    Json,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_turn_with_defaults() {
        let cli = Cli::parse_from([
            "loreweave",
            "turn",
            "game_1",
            "--response",
            "reply.txt",
            "open",
            "the",
            "door",
        ]);
        match cli.command {
            Commands::Turn {
                id,
                action,
                response,
                fragment_size,
                text,
            } => {
                assert_eq!(id, "game_1");
                assert_eq!(action, InputKind::Do);
                assert_eq!(response, PathBuf::from("reply.txt"));
                assert_eq!(fragment_size, ScriptedGenerator::DEFAULT_FRAGMENT_SIZE);
                assert_eq!(text.join(" "), "open the door");
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn action_is_case_insensitive() {
        let cli = Cli::parse_from(["loreweave", "prompt", "game_1", "--action", "SAY", "hi"]);
        match cli.command {
            Commands::Prompt { action, .. } => assert_eq!(action, InputKind::Say),
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn global_flags_after_subcommand() {
        let cli = Cli::parse_from(["loreweave", "list", "--verbose", "--config", "alt.toml"]);
        assert!(cli.verbose);
        assert_eq!(cli.config, Some(PathBuf::from("alt.toml")));
    }

    #[test]
    fn unknown_action_is_rejected() {
        let result = Cli::try_parse_from(["loreweave", "prompt", "game_1", "--action", "sing", "x"]);
        assert!(result.is_err());
    }

    #[test]
    fn turn_requires_response() {
        let result = Cli::try_parse_from(["loreweave", "turn", "game_1", "wait"]);
        assert!(result.is_err());
    }
}
