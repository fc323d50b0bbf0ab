//! The session controller: sole owner and mutator of a game's state.

use crate::{EditCommand, EditOutcome, NarrativeConfig, TurnExecutor, apply_edit, apply_turn};
use futures_util::StreamExt;
use loreweave_core::{EventKind, EventLogEntry, GameState, PlayerInput, TurnPayload};
use loreweave_error::{LoreweaveResult, NarrativeError, NarrativeErrorKind};
use loreweave_interface::{SaveStore, TextGenerator, TurnEvent};

/// Owns one [`GameState`] and moves it through the turn lifecycle.
///
/// ```text
/// idle --begin_turn--> processing --apply_draft*--> processing --complete_turn--> idle
/// ```
///
/// Edits may be applied at any time. Persistence is skipped while a turn is
/// in flight.
#[derive(Debug, Clone)]
pub struct Session {
    state: GameState,
    config: NarrativeConfig,
}

impl Session {
    /// Take ownership of a snapshot.
    pub fn new(state: GameState) -> Self {
        Self::with_config(state, NarrativeConfig::default())
    }

    /// Take ownership of a snapshot with explicit engine settings.
    ///
    /// A snapshot saved mid-turn is settled: its busy flag is cleared and any
    /// unfinished narrator draft is dropped.
    pub fn with_config(state: GameState, config: NarrativeConfig) -> Self {
        Self {
            state: settle(state),
            config,
        }
    }

    /// Current snapshot.
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Release the snapshot.
    pub fn into_state(self) -> GameState {
        self.state
    }

    /// Whether a turn is in flight.
    pub fn is_processing(&self) -> bool {
        self.state.is_processing
    }

    /// Replace the snapshot wholesale, e.g. after loading a save.
    ///
    /// The snapshot is settled the same way as in [`Session::with_config`].
    pub fn replace(&mut self, state: GameState) {
        tracing::info!(id = %state.id, tick = state.tick, "Session state replaced");
        self.state = settle(state);
    }

    /// Record the player's input and mark the turn as in flight.
    ///
    /// # Errors
    ///
    /// Returns `TurnInProgress` if a turn is already in flight.
    #[tracing::instrument(skip_all, fields(tick = self.state.tick, kind = %input.kind))]
    pub fn begin_turn(&mut self, input: &PlayerInput) -> LoreweaveResult<()> {
        if self.state.is_processing {
            return Err(
                NarrativeError::new(NarrativeErrorKind::TurnInProgress(self.state.tick)).into(),
            );
        }
        self.state.history.push(EventLogEntry::new(
            EventKind::Player,
            self.state.tick,
            input.content.clone(),
        ));
        self.state.is_processing = true;
        Ok(())
    }

    /// Show the latest narrative draft.
    ///
    /// The first draft of a turn appends a narrator entry; later drafts
    /// replace its text.
    ///
    /// # Errors
    ///
    /// Returns `NoTurnInProgress` if no turn is in flight.
    pub fn apply_draft(&mut self, text: &str) -> LoreweaveResult<()> {
        if !self.state.is_processing {
            return Err(NarrativeError::new(NarrativeErrorKind::NoTurnInProgress).into());
        }
        if self.state.has_draft() {
            if let Some(entry) = self.state.history.last_mut() {
                entry.description = text.to_string();
            }
        } else {
            self.state.history.push(EventLogEntry::new(
                EventKind::Narrator,
                self.state.tick + 1,
                text,
            ));
        }
        Ok(())
    }

    /// Finish the turn with the decoded payload, or the fallback when `None`.
    ///
    /// # Errors
    ///
    /// Returns `NoTurnInProgress` if no turn is in flight.
    #[tracing::instrument(skip_all, fields(tick = self.state.tick, structured = payload.is_some()))]
    pub fn complete_turn(&mut self, payload: Option<TurnPayload>) -> LoreweaveResult<()> {
        if !self.state.is_processing {
            return Err(NarrativeError::new(NarrativeErrorKind::NoTurnInProgress).into());
        }
        self.state = apply_turn(&self.state, payload.as_ref(), &self.config);
        tracing::info!(tick = self.state.tick, "Turn completed");
        Ok(())
    }

    /// Apply a direct edit.
    pub fn edit(&mut self, command: EditCommand) -> EditOutcome {
        let result = apply_edit(&self.state, command);
        self.state = result.state;
        result.outcome
    }

    /// Run a whole turn: begin, stream drafts into the log, complete.
    ///
    /// `on_draft` sees every draft as it arrives. The turn always completes,
    /// falling back to the failure delta when no structured block arrived.
    ///
    /// # Errors
    ///
    /// Returns `TurnInProgress` if a turn is already in flight.
    pub async fn play_turn<G, F>(
        &mut self,
        executor: &TurnExecutor<G>,
        input: &PlayerInput,
        mut on_draft: F,
    ) -> LoreweaveResult<()>
    where
        G: TextGenerator,
        F: FnMut(&str),
    {
        let mut events = executor.execute_turn(&self.state, input);
        self.begin_turn(input)?;

        let mut payload = None;
        while let Some(event) = events.next().await {
            match event {
                TurnEvent::Text { content } => {
                    self.apply_draft(&content)?;
                    on_draft(&content);
                }
                TurnEvent::Final(decoded) => payload = Some(decoded),
            }
        }

        self.complete_turn(payload)
    }

    /// Save the snapshot unless a turn is in flight.
    ///
    /// Returns whether a save was written.
    ///
    /// # Errors
    ///
    /// Returns the store's error if the write fails.
    pub async fn persist(&self, store: &dyn SaveStore) -> LoreweaveResult<bool> {
        if self.state.is_processing {
            tracing::debug!(id = %self.state.id, "Skipping save while a turn is in flight");
            return Ok(false);
        }
        store.save(&self.state).await?;
        Ok(true)
    }
}

/// Drop the remains of a turn that never completed.
fn settle(mut state: GameState) -> GameState {
    if state.is_processing {
        tracing::warn!(id = %state.id, tick = state.tick, "Discarding unfinished turn");
        if state.has_draft() {
            state.history.pop();
        }
        state.is_processing = false;
    }
    state
}
