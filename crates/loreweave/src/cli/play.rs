//! Turn handlers: prompt preview and recorded-response replay.

use super::saves::{open_store, require_session};
use loreweave::{
    InputKind, LoreweaveConfig, LoreweaveResult, PlayerInput, ScriptedGenerator, Session,
    StorageError, StorageErrorKind, TurnExecutor, assemble_prompt, match_lore,
};
use std::io::Write;
use std::path::PathBuf;

/// Arguments for replaying one turn.
#[derive(Debug, Clone)]
pub struct RecordedTurn {
    /// Session id
    pub id: String,
    /// Player input
    pub input: PlayerInput,
    /// File holding the recorded model response
    pub response: PathBuf,
    /// Characters per streamed fragment
    pub fragment_size: usize,
}

/// Print the prompt the next turn would send.
pub async fn print_prompt(
    config: &LoreweaveConfig,
    id: &str,
    action: InputKind,
    text: &str,
) -> LoreweaveResult<()> {
    let store = open_store(config)?;
    let state = require_session(&store, id).await?;
    let input = PlayerInput::new(action, text);

    let narrative = config.narrative();
    let lore = match_lore(&state, &input, *narrative.lore_history_window());
    println!("{}", assemble_prompt(&state, &input, &lore, narrative));
    Ok(())
}

/// Play one turn against a recorded response and save the result.
#[tracing::instrument(skip(config, turn), fields(id = %turn.id))]
pub async fn play_recorded_turn(
    config: &LoreweaveConfig,
    turn: RecordedTurn,
) -> LoreweaveResult<()> {
    let store = open_store(config)?;
    let state = require_session(&store, &turn.id).await?;

    let response = tokio::fs::read_to_string(&turn.response)
        .await
        .map_err(|e| {
            StorageError::new(StorageErrorKind::FileRead(format!(
                "{}: {}",
                turn.response.display(),
                e
            )))
        })?;

    let generator = ScriptedGenerator::new(response).with_fragment_size(turn.fragment_size);
    let executor = TurnExecutor::with_config(generator, config.narrative().clone());
    let mut session = Session::with_config(state, config.narrative().clone());

    let mut printer = DraftPrinter::default();
    session
        .play_turn(&executor, &turn.input, |draft| printer.show(draft))
        .await?;
    println!();

    session.persist(&store).await?;

    let state = session.state();
    tracing::info!(tick = state.tick, "Turn saved");
    println!(
        "Tick {}  |  {} pacing, tension {}",
        state.tick, state.director_state.pacing, state.director_state.tension
    );
    for hint in &state.director_state.suggested_hints {
        println!("  Hint: {}", hint);
    }
    Ok(())
}

/// Prints a growing draft incrementally.
#[derive(Debug, Default)]
struct DraftPrinter {
    shown: String,
}

impl DraftPrinter {
    fn show(&mut self, draft: &str) {
        let mut stdout = std::io::stdout().lock();
        let _ = match draft.strip_prefix(self.shown.as_str()) {
            Some(rest) => write!(stdout, "{}", rest),
            // Draft was rewritten (trimmed or replaced), start a fresh line.
            None => write!(stdout, "\n{}", draft),
        };
        let _ = stdout.flush();
        self.shown = draft.to_string();
    }
}
