//! Splitting a model stream into narrative draft and structured tail.

/// Where the demultiplexer is in the response.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum DemuxPhase {
    /// Still inside the free-text narrative
    Narrating,
    /// Separator seen; buffering the structured block
    AwaitingJson,
}

/// How the stream ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DemuxEnd {
    /// The separator never appeared; the whole buffer is the narrative
    NarrativeOnly(String),
    /// Text received after the separator
    Tail(String),
}

/// Incremental splitter for `narrative SEPARATOR structured-block` streams.
///
/// While narrating, every fragment produces the whole draft so far. The
/// fragment that completes the separator produces the trimmed narrative one
/// last time; everything after it is kept for the payload parser.
///
/// # Examples
///
/// ```
/// use loreweave_narrative::{DemuxEnd, StreamDemux};
///
/// let mut demux = StreamDemux::new("___SEP___");
/// let drafts: Vec<String> = ["Hello ", "world", "___SEP___", "{\"a\":1}"]
///     .into_iter()
///     .filter_map(|f| demux.push(f))
///     .collect();
///
/// assert_eq!(drafts.last().map(String::as_str), Some("Hello world"));
/// assert_eq!(demux.finish(), DemuxEnd::Tail("{\"a\":1}".to_string()));
/// ```
#[derive(Debug, Clone)]
pub struct StreamDemux {
    separator: String,
    buffer: String,
    phase: DemuxPhase,
}

impl StreamDemux {
    /// Create a demultiplexer splitting on `separator`.
    pub fn new(separator: impl Into<String>) -> Self {
        Self {
            separator: separator.into(),
            buffer: String::new(),
            phase: DemuxPhase::Narrating,
        }
    }

    /// Current phase.
    pub fn phase(&self) -> DemuxPhase {
        self.phase
    }

    /// Feed one fragment, returning the draft text to emit, if any.
    pub fn push(&mut self, fragment: &str) -> Option<String> {
        self.buffer.push_str(fragment);

        if self.phase == DemuxPhase::AwaitingJson {
            return None;
        }

        match self.buffer.find(&self.separator) {
            Some(pos) => {
                let narrative = self.buffer[..pos].trim().to_string();
                self.buffer = self.buffer[pos + self.separator.len()..].to_string();
                self.phase = DemuxPhase::AwaitingJson;
                tracing::debug!(
                    narrative_len = narrative.len(),
                    tail_len = self.buffer.len(),
                    "Separator found"
                );
                Some(narrative)
            }
            None => Some(self.buffer.clone()),
        }
    }

    /// Consume the demultiplexer at end of stream.
    pub fn finish(self) -> DemuxEnd {
        match self.phase {
            DemuxPhase::Narrating => DemuxEnd::NarrativeOnly(self.buffer),
            DemuxPhase::AwaitingJson => DemuxEnd::Tail(self.buffer),
        }
    }
}
