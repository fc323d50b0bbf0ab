//! A generator that replays a recorded response.

use async_trait::async_trait;
use loreweave_error::{GenerationError, LoreweaveResult};
use loreweave_interface::{TextGenerator, TextStream};

/// Replays a fixed response as a stream of fragments.
///
/// Used to run turns offline from recorded model output.
///
/// # Examples
///
/// ```
/// use loreweave_narrative::ScriptedGenerator;
///
/// let generator = ScriptedGenerator::new("abcdef").with_fragment_size(4);
/// assert_eq!(generator.fragments(), vec!["abcd", "ef"]);
/// ```
#[derive(Debug, Clone)]
pub struct ScriptedGenerator {
    response: String,
    fragment_size: usize,
    fail_after: Option<usize>,
}

impl ScriptedGenerator {
    /// Default fragment length in characters.
    pub const DEFAULT_FRAGMENT_SIZE: usize = 16;

    /// Replay `response` in default-sized fragments.
    pub fn new(response: impl Into<String>) -> Self {
        Self {
            response: response.into(),
            fragment_size: Self::DEFAULT_FRAGMENT_SIZE,
            fail_after: None,
        }
    }

    /// Set the fragment length in characters (at least 1).
    pub fn with_fragment_size(mut self, size: usize) -> Self {
        self.fragment_size = size.max(1);
        self
    }

    /// Fail the stream after emitting `count` fragments.
    pub fn failing_after(mut self, count: usize) -> Self {
        self.fail_after = Some(count);
        self
    }

    /// The fragments this generator will emit, split on character boundaries.
    pub fn fragments(&self) -> Vec<String> {
        let chars: Vec<char> = self.response.chars().collect();
        chars
            .chunks(self.fragment_size)
            .map(|chunk| chunk.iter().collect())
            .collect()
    }
}

#[async_trait]
impl TextGenerator for ScriptedGenerator {
    fn name(&self) -> &str {
        "scripted"
    }

    async fn generate_stream(&self, prompt: &str) -> LoreweaveResult<TextStream> {
        tracing::debug!(prompt_len = prompt.len(), "Replaying scripted response");

        let mut items: Vec<LoreweaveResult<String>> = self.fragments().into_iter().map(Ok).collect();
        if let Some(count) = self.fail_after {
            items.truncate(count);
            items.push(Err(GenerationError::new("scripted stream interrupted").into()));
        }
        Ok(Box::pin(futures_util::stream::iter(items)))
    }
}
