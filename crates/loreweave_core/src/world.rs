//! Locations and world state.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A place the story can be set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Location {
    /// Unique location id
    pub id: String,
    /// Display name
    pub name: String,
    /// Prose description rendered into the prompt
    pub description: String,
}

/// World-level state: where the scene is, when, and what is known.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorldState {
    /// Must always name an entry of `locations`
    pub current_location_id: String,
    /// Locations keyed by id
    pub locations: BTreeMap<String, Location>,
    /// Free-text in-story time
    pub time: String,
    /// Established facts, oldest first
    #[serde(default)]
    pub facts: Vec<String>,
}

impl WorldState {
    /// The location the scene currently takes place in.
    pub fn current_location(&self) -> Option<&Location> {
        self.locations.get(&self.current_location_id)
    }
}
