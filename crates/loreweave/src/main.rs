//! Loreweave CLI binary.
//!
//! This binary provides command-line access to Loreweave's functionality:
//! - Start sessions from bundled scenarios
//! - Inspect and delete saves
//! - Preview prompts and replay recorded model responses as turns

use clap::Parser;
use loreweave::PlayerInput;
use tracing_subscriber::EnvFilter;

mod cli;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    use cli::{
        Cli, Commands, RecordedTurn, delete_session, list_saves, list_scenarios, load_config,
        new_session, play_recorded_turn, print_prompt, show_session,
    };

    let _ = dotenvy::dotenv();

    // Parse command-line arguments
    let cli = Cli::parse();

    // Initialize tracing; RUST_LOG overrides --verbose
    let default_level = if cli.verbose { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    // stdout carries prompts and drafts
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let config = load_config(cli.config.as_deref())?;

    // Execute the requested command
    match cli.command {
        Commands::Scenarios => {
            list_scenarios()?;
        }

        Commands::New { scenario } => {
            new_session(&config, &scenario).await?;
        }

        Commands::List { format } => {
            list_saves(&config, format).await?;
        }

        Commands::Show { id, format } => {
            show_session(&config, &id, format).await?;
        }

        Commands::Delete { id } => {
            delete_session(&config, &id).await?;
        }

        Commands::Prompt { id, action, text } => {
            print_prompt(&config, &id, action, &text.join(" ")).await?;
        }

        Commands::Turn {
            id,
            action,
            response,
            fragment_size,
            text,
        } => {
            let turn = RecordedTurn {
                id,
                input: PlayerInput::new(action, text.join(" ")),
                response,
                fragment_size,
            };
            play_recorded_turn(&config, turn).await?;
        }
    }

    Ok(())
}
