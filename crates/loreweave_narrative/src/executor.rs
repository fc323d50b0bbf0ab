//! Turn execution: prompt, stream, split, decode.

use crate::{DemuxEnd, NarrativeConfig, StreamDemux, assemble_prompt, match_lore, parse_payload};
use futures_util::StreamExt;
use loreweave_core::{GameState, PlayerInput};
use loreweave_interface::{TextGenerator, TurnEvent, TurnStream};

/// Runs turns against a text generation backend.
///
/// The executor never mutates state. It turns a snapshot and the player's
/// input into a lazy [`TurnStream`]; applying the result is the job of the
/// [`Session`](crate::Session) or of [`apply_turn`](crate::apply_turn).
///
/// # Example
///
/// ```rust,no_run
/// use futures_util::StreamExt;
/// use loreweave_interface::TurnEvent;
/// use loreweave_narrative::{ScriptedGenerator, TurnExecutor};
///
/// # async fn example(state: loreweave_core::GameState, input: loreweave_core::PlayerInput) {
/// let executor = TurnExecutor::new(ScriptedGenerator::new("The rain stops."));
/// let mut events = executor.execute_turn(&state, &input);
/// while let Some(event) = events.next().await {
///     if let TurnEvent::Text { content } = event {
///         println!("{content}");
///     }
/// }
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct TurnExecutor<G: TextGenerator> {
    generator: G,
    config: NarrativeConfig,
}

impl<G: TextGenerator> TurnExecutor<G> {
    /// Create an executor with default settings.
    pub fn new(generator: G) -> Self {
        Self::with_config(generator, NarrativeConfig::default())
    }

    /// Create an executor with explicit settings.
    pub fn with_config(generator: G, config: NarrativeConfig) -> Self {
        Self { generator, config }
    }

    /// Engine settings.
    pub fn config(&self) -> &NarrativeConfig {
        &self.config
    }

    /// The backend turns are sent to.
    pub fn generator(&self) -> &G {
        &self.generator
    }

    /// Build the prompt the next turn would send.
    pub fn prepare_prompt(&self, state: &GameState, input: &PlayerInput) -> String {
        let lore = match_lore(state, input, *self.config.lore_history_window());
        assemble_prompt(state, input, &lore, &self.config)
    }

    /// Execute one turn.
    ///
    /// The prompt is built immediately; nothing is sent until the returned
    /// stream is first polled. Text events carry the whole draft so far. A
    /// single `Final` event follows the last text event when the model
    /// produced a decodable structured block. If the backend fails at any
    /// point the stream yields one fallback text event and ends without a
    /// `Final`. Dropping the stream early simply stops the turn.
    #[tracing::instrument(skip_all, fields(generator = self.generator.name(), tick = state.tick))]
    pub fn execute_turn<'a>(&'a self, state: &GameState, input: &PlayerInput) -> TurnStream<'a> {
        let prompt = self.prepare_prompt(state, input);
        tracing::debug!(prompt_len = prompt.len(), "Prompt assembled");

        Box::pin(async_stream::stream! {
            let mut fragments = match self.generator.generate_stream(&prompt).await {
                Ok(fragments) => fragments,
                Err(e) => {
                    tracing::error!(error = %e, "Failed to open generation stream");
                    yield TurnEvent::Text { content: self.config.fallback_narrative().clone() };
                    return;
                }
            };

            let mut demux = StreamDemux::new(self.config.separator().clone());
            while let Some(item) = fragments.next().await {
                match item {
                    Ok(fragment) => {
                        if fragment.is_empty() {
                            continue;
                        }
                        if let Some(draft) = demux.push(&fragment) {
                            yield TurnEvent::Text { content: draft };
                        }
                    }
                    Err(e) => {
                        tracing::error!(error = %e, phase = %demux.phase(), "Generation stream failed");
                        yield TurnEvent::Text { content: self.config.fallback_narrative().clone() };
                        return;
                    }
                }
            }

            match demux.finish() {
                DemuxEnd::NarrativeOnly(text) => {
                    tracing::info!("Response ended without a structured block");
                    if !text.is_empty() {
                        yield TurnEvent::Text { content: text };
                    }
                }
                DemuxEnd::Tail(tail) => {
                    if let Some(payload) = parse_payload(&tail) {
                        yield TurnEvent::Final(payload);
                    }
                }
            }
        })
    }
}
