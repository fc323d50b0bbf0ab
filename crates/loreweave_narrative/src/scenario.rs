//! Scenario templates and the new-story factory.

use loreweave_core::{
    CharacterState, DirectorDecision, EventKind, EventLogEntry, GameState, Location, StoryCard,
    StoryDna, WorldState,
};
use loreweave_error::{LoreweaveResult, NarrativeError, NarrativeErrorKind};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

const BUNDLED_SCENARIOS: &str = include_str!("../../../scenarios.toml");

/// A ready-made story to start from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScenarioTemplate {
    /// Template id
    pub id: String,
    /// Display title
    pub title: String,
    /// One-line pitch
    pub description: String,
    /// Snapshot a new session starts from
    pub initial_state: GameState,
}

impl ScenarioTemplate {
    /// Start a fresh session from this template.
    pub fn instantiate(&self) -> GameState {
        let now = loreweave_core::now_millis();
        let mut state = self.initial_state.clone();
        state.id = format!("game_{}", uuid::Uuid::new_v4().simple());
        state.last_played = now;
        state.is_processing = false;
        for entry in &mut state.history {
            entry.timestamp = now;
        }
        tracing::info!(scenario = %self.id, id = %state.id, "Created session from scenario");
        state
    }
}

#[derive(Debug, Deserialize)]
struct ScenarioFile {
    scenario: Vec<ScenarioTemplate>,
}

/// All bundled scenario templates.
///
/// # Errors
///
/// Returns an error if the bundled data does not parse.
pub fn bundled_scenarios() -> LoreweaveResult<Vec<ScenarioTemplate>> {
    let file: ScenarioFile = toml::from_str(BUNDLED_SCENARIOS).map_err(|e| {
        NarrativeError::new(NarrativeErrorKind::ScenarioParse(e.to_string()))
    })?;
    Ok(file.scenario)
}

/// Create a session from the bundled template with the given id.
///
/// # Errors
///
/// Returns `UnknownScenario` if no template has that id.
pub fn new_game_from_scenario(id: &str) -> LoreweaveResult<GameState> {
    bundled_scenarios()?
        .into_iter()
        .find(|s| s.id == id)
        .map(|s| s.instantiate())
        .ok_or_else(|| NarrativeError::new(NarrativeErrorKind::UnknownScenario(id.to_string())).into())
}

/// One character of a new-story form.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CharacterForm {
    /// Display name
    pub name: String,
    /// Narrative role
    #[serde(default)]
    pub role: String,
    /// Appearance and background
    #[serde(default)]
    pub description: String,
    /// Secret backstory, turned into a lore card keyed on the name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lore: Option<String>,
}

/// Everything needed to start a custom story.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoryForm {
    /// Story title
    pub title: String,
    /// Name of the opening location
    pub setting_name: String,
    /// Prose description of the opening location
    #[serde(default)]
    pub setting_description: String,
    /// Initial cast
    #[serde(default)]
    pub characters: Vec<CharacterForm>,
}

fn character_id(index: usize, name: &str) -> String {
    let slug = name
        .to_lowercase()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join("_");
    format!("char_{index}_{slug}")
}

/// Build a fresh session from a new-story form.
///
/// # Errors
///
/// Returns `InvalidStoryForm` if the title or setting name is blank.
///
/// # Examples
///
/// ```
/// use loreweave_narrative::{CharacterForm, StoryForm, game_from_form};
///
/// let form = StoryForm {
///     title: "Harbor".to_string(),
///     setting_name: "The Docks".to_string(),
///     setting_description: "Gulls wheel overhead.".to_string(),
///     characters: vec![CharacterForm { name: "Old Tam".to_string(), ..Default::default() }],
/// };
/// let state = game_from_form(&form).unwrap();
/// assert_eq!(state.characters[0].id, "char_0_old_tam");
/// assert_eq!(state.world.current_location_id, "loc_start");
/// ```
pub fn game_from_form(form: &StoryForm) -> LoreweaveResult<GameState> {
    if form.title.trim().is_empty() {
        return Err(
            NarrativeError::new(NarrativeErrorKind::InvalidStoryForm("title is required".into()))
                .into(),
        );
    }
    if form.setting_name.trim().is_empty() {
        return Err(NarrativeError::new(NarrativeErrorKind::InvalidStoryForm(
            "setting name is required".into(),
        ))
        .into());
    }

    let now = loreweave_core::now_millis();
    let location_id = "loc_start".to_string();

    let characters: Vec<CharacterState> = form
        .characters
        .iter()
        .enumerate()
        .map(|(i, c)| CharacterState {
            id: character_id(i, &c.name),
            name: c.name.clone(),
            role: c.role.clone(),
            description: c.description.clone(),
            status: "Normal".to_string(),
            emotions: Default::default(),
        })
        .collect();

    let story_cards: Vec<StoryCard> = form
        .characters
        .iter()
        .enumerate()
        .filter_map(|(i, c)| {
            let lore = c.lore.as_ref().filter(|l| !l.trim().is_empty())?;
            Some(StoryCard {
                id: format!("card_lore_{i}"),
                title: format!("{}'s Secret", c.name),
                keys: vec![c.name.to_lowercase()],
                entry: lore.clone(),
                character_id: Some(character_id(i, &c.name)),
                location_id: None,
                is_active: false,
            })
        })
        .collect();

    let names = characters
        .iter()
        .map(|c| c.name.as_str())
        .collect::<Vec<_>>()
        .join(" and ");
    let opening = format!(
        "You find yourself in {}. {} Nearby, {} are waiting.",
        form.setting_name, form.setting_description, names
    );

    let mut locations = BTreeMap::new();
    locations.insert(
        location_id.clone(),
        Location {
            id: location_id.clone(),
            name: form.setting_name.clone(),
            description: form.setting_description.clone(),
        },
    );

    let mut opening_entry = EventLogEntry::new(EventKind::Narrator, 0, opening);
    opening_entry.id = "evt_init".to_string();

    Ok(GameState {
        id: format!("custom_{}", uuid::Uuid::new_v4().simple()),
        title: form.title.clone(),
        tick: 0,
        is_processing: false,
        history: vec![opening_entry],
        characters,
        story_cards,
        story_dna: StoryDna::default(),
        director_state: DirectorDecision::default(),
        world: WorldState {
            current_location_id: location_id,
            locations,
            time: "Start".to_string(),
            facts: vec![format!("Setting: {}", form.setting_name)],
        },
        last_played: now,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bundled_scenarios_parse() {
        let scenarios = bundled_scenarios().unwrap();
        let ids: Vec<&str> = scenarios.iter().map(|s| s.id.as_str()).collect();
        assert_eq!(ids, vec!["scen_cyberpunk", "scen_fantasy"]);

        let neon = &scenarios[0].initial_state;
        assert_eq!(neon.title, "The Neon Protocol");
        assert_eq!(neon.world.locations.len(), 2);
        assert_eq!(neon.characters.len(), 2);
        assert_eq!(neon.story_cards.len(), 4);
        assert_eq!(neon.director_state.tension, 15);
        assert_eq!(neon.story_dna.hope_despair, 30);
        assert!(neon.world.current_location().is_some());
    }

    #[test]
    fn every_scenario_has_resolvable_location_and_unique_ids() {
        for scenario in bundled_scenarios().unwrap() {
            let state = &scenario.initial_state;
            assert!(state.world.current_location().is_some(), "{}", scenario.id);
            let mut ids: Vec<&str> = state.characters.iter().map(|c| c.id.as_str()).collect();
            ids.sort_unstable();
            ids.dedup();
            assert_eq!(ids.len(), state.characters.len());
        }
    }

    #[test]
    fn instantiate_gives_fresh_identity() {
        let a = new_game_from_scenario("scen_fantasy").unwrap();
        let b = new_game_from_scenario("scen_fantasy").unwrap();
        assert_ne!(a.id, b.id);
        assert!(a.id.starts_with("game_"));
        assert!(a.last_played > 0);
        assert_eq!(a.director_state.pacing, loreweave_core::Pacing::Slow);
    }

    #[test]
    fn unknown_scenario_errors() {
        assert!(new_game_from_scenario("scen_missing").is_err());
    }

    #[test]
    fn form_builds_cast_and_lore() {
        let form = StoryForm {
            title: "Night Market".to_string(),
            setting_name: "Lantern Row".to_string(),
            setting_description: "Stalls glow in the fog.".to_string(),
            characters: vec![
                CharacterForm {
                    name: "Mei Lin".to_string(),
                    role: "Vendor".to_string(),
                    description: "Sells maps.".to_string(),
                    lore: Some("Her maps are forgeries.".to_string()),
                },
                CharacterForm {
                    name: "Oskar".to_string(),
                    role: "Guard".to_string(),
                    description: "Bored.".to_string(),
                    lore: None,
                },
            ],
        };

        let state = game_from_form(&form).unwrap();
        assert_eq!(state.characters[0].id, "char_0_mei_lin");
        assert_eq!(state.characters[1].id, "char_1_oskar");
        assert_eq!(state.characters[0].emotions.fear, 20);
        assert_eq!(state.story_cards.len(), 1);
        let card = &state.story_cards[0];
        assert_eq!(card.id, "card_lore_0");
        assert_eq!(card.title, "Mei Lin's Secret");
        assert_eq!(card.keys, vec!["mei lin".to_string()]);
        assert_eq!(card.character_id.as_deref(), Some("char_0_mei_lin"));
        assert_eq!(state.world.facts, vec!["Setting: Lantern Row".to_string()]);
        assert_eq!(
            state.history[0].description,
            "You find yourself in Lantern Row. Stalls glow in the fog. Nearby, Mei Lin and Oskar are waiting."
        );
        assert_eq!(state.tick, 0);
    }

    #[test]
    fn form_requires_title_and_setting() {
        let form = StoryForm {
            title: " ".to_string(),
            setting_name: "Somewhere".to_string(),
            ..StoryForm::default()
        };
        assert!(game_from_form(&form).is_err());

        let form = StoryForm {
            title: "Tale".to_string(),
            ..StoryForm::default()
        };
        assert!(game_from_form(&form).is_err());
    }
}
