//! Narrative event log entries.

use serde::{Deserialize, Serialize};

/// Who produced a log entry.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    derive_more::Display,
    strum::EnumIter,
)]
#[serde(rename_all = "UPPERCASE")]
pub enum EventKind {
    /// Player action or speech
    #[display("PLAYER")]
    Player,
    /// Generated story prose
    #[display("NARRATOR")]
    Narrator,
    /// Director pacing summary
    #[display("DIRECTOR")]
    Director,
}

/// One entry of the session's ordered event log.
///
/// # Examples
///
/// ```
/// use loreweave_core::{EventKind, EventLogEntry};
///
/// let entry = EventLogEntry::new(EventKind::Player, 0, "I open the door");
/// assert_eq!(entry.kind, EventKind::Player);
/// assert_eq!(entry.tick, 0);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventLogEntry {
    /// Unique entry id
    pub id: String,
    /// Turn the entry belongs to
    pub tick: u64,
    /// Producer of the entry
    #[serde(rename = "type")]
    pub kind: EventKind,
    /// Entry text
    pub description: String,
    /// Creation time, milliseconds since the Unix epoch
    pub timestamp: i64,
}

impl EventLogEntry {
    /// Create an entry with a fresh id, stamped now.
    pub fn new(kind: EventKind, tick: u64, description: impl Into<String>) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            tick,
            kind,
            description: description.into(),
            timestamp: crate::now_millis(),
        }
    }
}
