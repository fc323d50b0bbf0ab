use loreweave_core::{
    CharacterState, DirectorDecision, EventKind, EventLogEntry, GameState, InputKind, Location,
    Pacing, PlayerInput, StoryCard, StoryDna, TurnPayload, WorldState,
};
use std::collections::BTreeMap;
use std::str::FromStr;

fn sample_state() -> GameState {
    let mut locations = BTreeMap::new();
    locations.insert(
        "loc_bar".to_string(),
        Location {
            id: "loc_bar".to_string(),
            name: "The Bar".to_string(),
            description: "Smoky.".to_string(),
        },
    );
    GameState {
        id: "sess_1".to_string(),
        title: "Test".to_string(),
        tick: 2,
        is_processing: false,
        history: vec![EventLogEntry::new(EventKind::Narrator, 2, "Rain falls.")],
        characters: vec![
            CharacterState::builder()
                .id("char_a")
                .name("A")
                .build()
                .unwrap(),
        ],
        story_cards: vec![
            StoryCard::builder()
                .id("card_a")
                .title("A's Secret")
                .keys(vec!["a".to_string()])
                .character_id(Some("char_a".to_string()))
                .build()
                .unwrap(),
        ],
        story_dna: StoryDna::default(),
        director_state: DirectorDecision::default(),
        world: WorldState {
            current_location_id: "loc_bar".to_string(),
            locations,
            time: "Night".to_string(),
            facts: vec!["It rains.".to_string()],
        },
        last_played: 0,
    }
}

#[test]
fn game_state_uses_camel_case_field_names() {
    let value = serde_json::to_value(sample_state()).unwrap();
    assert!(value.get("storyDNA").is_some());
    assert!(value.get("directorState").is_some());
    assert!(value.get("isProcessing").is_some());
    assert_eq!(value["world"]["currentLocationId"], "loc_bar");
    assert_eq!(value["history"][0]["type"], "NARRATOR");
    assert_eq!(value["storyCards"][0]["characterId"], "char_a");
    assert_eq!(value["storyDNA"]["trustBetrayal"], 50);
}

#[test]
fn game_state_survives_json() {
    let state = sample_state();
    let json = serde_json::to_string(&state).unwrap();
    let back: GameState = serde_json::from_str(&json).unwrap();
    assert_eq!(back, state);
}

#[test]
fn payload_rejects_unknown_pacing() {
    let json = r#"{
        "director": {"pacing": "Glacial", "tension": 5, "narrativeFocus": "", "suggestedHints": []},
        "world": {"characterUpdates": []}
    }"#;
    assert!(serde_json::from_str::<TurnPayload>(json).is_err());
}

#[test]
fn payload_optional_blocks_default() {
    let json = r#"{
        "director": {"pacing": "Slow", "tension": 5, "narrativeFocus": "Wait", "suggestedHints": []},
        "world": {"characterUpdates": [{"id": "char_a", "emotions": {}}], "newFacts": ["X"]}
    }"#;
    let payload: TurnPayload = serde_json::from_str(json).unwrap();
    assert_eq!(payload.director.pacing, Pacing::Slow);
    assert_eq!(payload.world.new_facts, vec!["X".to_string()]);
    assert!(payload.world.dna_shift.is_none());
    assert!(payload.world.character_updates[0].status.is_none());
}

#[test]
fn dead_status_is_case_insensitive() {
    let mut c = CharacterState::builder().id("x").name("X").build().unwrap();
    c.status = "DECEASED".to_string();
    assert!(c.is_dead());
    c.status = "dead".to_string();
    assert!(c.is_dead());
    c.status = "Wounded".to_string();
    assert!(!c.is_dead());
}

#[test]
fn input_kind_parses_case_insensitively() {
    assert_eq!(InputKind::from_str("say").unwrap(), InputKind::Say);
    assert_eq!(InputKind::from_str("STORY").unwrap(), InputKind::Story);
    let input = PlayerInput::new(InputKind::Do, "wave");
    assert_eq!(serde_json::to_value(&input).unwrap()["type"], "DO");
}

#[test]
fn recent_windows_clip_to_available_entries() {
    let state = sample_state();
    assert_eq!(state.recent_history(8).len(), 1);
    assert_eq!(state.recent_facts(5), &["It rains.".to_string()]);
    assert!(state.world.current_location().is_some());
    assert!(state.card("card_a").is_some());
    assert!(state.character("nope").is_none());
}
