//! Session lifecycle: turns, drafts, edits and persistence.

mod test_utils;

use loreweave_core::{EventKind, EventLogEntry, GameState, InputKind, PlayerInput, TurnPayload};
use loreweave_error::{LoreweaveErrorKind, NarrativeErrorKind};
use loreweave_interface::SaveStore;
use loreweave_narrative::{EditCommand, EditOutcome, ScriptedGenerator, Session, TurnExecutor};
use loreweave_storage::InMemorySaveStore;
use test_utils::{MockGenerator, TRUST_PAYLOAD, one_character_state};

fn count(session: &Session, kind: EventKind) -> usize {
    session
        .state()
        .history
        .iter()
        .filter(|e| e.kind == kind)
        .count()
}

#[tokio::test]
async fn test_end_to_end_trust_turn() {
    let response = format!("Ada relaxes a little.\n___METADATA___\n{TRUST_PAYLOAD}");
    let generator = MockGenerator::fragments(&[&response[..10], &response[10..]]);
    let executor = TurnExecutor::new(generator);

    let mut session = Session::new(one_character_state());
    let dna_before = session.state().story_dna.trust_betrayal;
    let directors_before = count(&session, EventKind::Director);

    let mut drafts = Vec::new();
    let input = PlayerInput::new(InputKind::Say, "I'm on your side.");
    session
        .play_turn(&executor, &input, |d| drafts.push(d.to_string()))
        .await
        .unwrap();

    let state = session.state();
    assert_eq!(state.tick, 1);
    assert!(!state.is_processing);
    let ada = state.character("char_a").unwrap();
    assert_eq!(ada.emotions.trust, 65);
    assert_eq!(ada.emotions.fear, 20);
    assert_eq!(ada.emotions.anger, 10);
    assert_eq!(ada.emotions.hope, 50);
    assert_eq!(state.story_dna.trust_betrayal, dna_before + 10);
    assert_eq!(count(&session, EventKind::Director), directors_before + 1);

    assert_eq!(drafts.last().unwrap(), "Ada relaxes a little.");
    let narrator: Vec<_> = state
        .history
        .iter()
        .filter(|e| e.kind == EventKind::Narrator && e.tick == 1)
        .collect();
    assert_eq!(narrator.len(), 1);
    assert_eq!(narrator[0].description, "Ada relaxes a little.");

    let player = state
        .history
        .iter()
        .find(|e| e.kind == EventKind::Player)
        .unwrap();
    assert_eq!(player.tick, 0);
    assert_eq!(player.description, "I'm on your side.");
}

#[tokio::test]
async fn test_history_order_for_one_turn() {
    let generator = MockGenerator::fragments(&["Rain.", "___METADATA___", TRUST_PAYLOAD]);
    let executor = TurnExecutor::new(generator);
    let mut session = Session::new(one_character_state());
    let before = session.state().history.len();

    let input = PlayerInput::new(InputKind::Do, "listen");
    session.play_turn(&executor, &input, |_| {}).await.unwrap();

    let kinds: Vec<EventKind> = session.state().history[before..]
        .iter()
        .map(|e| e.kind)
        .collect();
    assert_eq!(
        kinds,
        vec![EventKind::Player, EventKind::Narrator, EventKind::Director]
    );
}

#[tokio::test]
async fn test_connection_failure_still_completes() {
    let executor = TurnExecutor::new(MockGenerator::open_error("down"));
    let mut session = Session::new(one_character_state());
    let prior = session.state().clone();

    let input = PlayerInput::new(InputKind::Do, "knock");
    session.play_turn(&executor, &input, |_| {}).await.unwrap();

    let state = session.state();
    assert_eq!(state.tick, 1);
    assert!(!state.is_processing);
    assert_eq!(state.characters, prior.characters);
    assert_eq!(state.director_state, prior.director_state);
    let last_narrator = state
        .history
        .iter()
        .rev()
        .find(|e| e.kind == EventKind::Narrator)
        .unwrap();
    assert_eq!(
        last_narrator.description,
        "The simulation wavers... (Connection Error)"
    );
}

#[tokio::test]
async fn test_malformed_payload_keeps_narrative() {
    let generator = MockGenerator::fragments(&["The lamp gutters.", "___METADATA___", "{not json"]);
    let executor = TurnExecutor::new(generator);
    let mut session = Session::new(one_character_state());
    let prior = session.state().clone();

    let input = PlayerInput::new(InputKind::Do, "wait");
    session.play_turn(&executor, &input, |_| {}).await.unwrap();

    let state = session.state();
    assert_eq!(state.tick, 1);
    assert!(!state.is_processing);
    assert_eq!(state.characters, prior.characters);
    let narrators: Vec<_> = state
        .history
        .iter()
        .filter(|e| e.kind == EventKind::Narrator && e.tick == 1)
        .collect();
    assert_eq!(narrators.len(), 1);
    assert_eq!(narrators[0].description, "The lamp gutters.");
}

#[tokio::test]
async fn test_second_turn_rejected_while_processing() {
    let mut session = Session::new(one_character_state());
    let input = PlayerInput::new(InputKind::Do, "wait");
    session.begin_turn(&input).unwrap();

    let err = session.begin_turn(&input).unwrap_err();
    match err.kind() {
        LoreweaveErrorKind::Narrative(e) => {
            assert_eq!(e.kind, NarrativeErrorKind::TurnInProgress(0))
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[tokio::test]
async fn test_draft_replaces_entry_under_construction() {
    let mut session = Session::new(one_character_state());
    let before = session.state().history.len();
    session
        .begin_turn(&PlayerInput::new(InputKind::Do, "look"))
        .unwrap();

    session.apply_draft("The").unwrap();
    session.apply_draft("The room").unwrap();
    session.apply_draft("The room is dark.").unwrap();

    let history = &session.state().history;
    assert_eq!(history.len(), before + 2);
    assert_eq!(history.last().unwrap().description, "The room is dark.");
    assert_eq!(history.last().unwrap().tick, 1);

    session.complete_turn(None).unwrap();
    assert_eq!(session.state().tick, 1);
    assert!(
        !session
            .state()
            .history
            .iter()
            .any(|e| e.description == "System Failure.")
    );
}

#[tokio::test]
async fn test_complete_without_begin_is_rejected() {
    let mut session = Session::new(one_character_state());
    let payload: TurnPayload = serde_json::from_str(TRUST_PAYLOAD).unwrap();
    assert!(session.complete_turn(Some(payload)).is_err());
    assert!(session.apply_draft("text").is_err());
    assert_eq!(session.state().tick, 0);
}

#[tokio::test]
async fn test_edit_protects_current_location() {
    let mut session = Session::new(one_character_state());
    let prior = session.state().clone();
    let current = prior.world.current_location_id.clone();

    let outcome = session.edit(EditCommand::DeleteLocation(current));
    assert!(matches!(outcome, EditOutcome::Rejected { .. }));
    assert_eq!(session.state(), &prior);
}

#[tokio::test]
async fn test_persist_skipped_while_processing() {
    let store = InMemorySaveStore::new();
    let mut session = Session::new(one_character_state());

    session
        .begin_turn(&PlayerInput::new(InputKind::Do, "wait"))
        .unwrap();
    assert!(!session.persist(&store).await.unwrap());
    assert!(store.is_empty().await);

    session.complete_turn(None).unwrap();
    assert!(session.persist(&store).await.unwrap());

    let saved = store.load(&session.state().id).await.unwrap().unwrap();
    assert_eq!(saved.tick, 1);
}

fn saved_mid_turn() -> GameState {
    let mut state = one_character_state();
    state
        .history
        .push(EventLogEntry::new(EventKind::Player, 0, "Open the hatch"));
    state
        .history
        .push(EventLogEntry::new(EventKind::Narrator, 1, "The hatch cre"));
    state.is_processing = true;
    let json = serde_json::to_string(&state).unwrap();
    serde_json::from_str(&json).unwrap()
}

#[tokio::test]
async fn test_snapshot_saved_mid_turn_can_play_again() {
    let store = InMemorySaveStore::new();
    let stuck = saved_mid_turn();
    store.save(&stuck).await.unwrap();
    let loaded = store.load(&stuck.id).await.unwrap().unwrap();
    assert!(loaded.is_processing);

    let mut session = Session::new(loaded);
    assert!(!session.is_processing());
    assert!(
        !session
            .state()
            .history
            .iter()
            .any(|e| e.description == "The hatch cre")
    );

    let generator = MockGenerator::fragments(&["It swings wide.", "___METADATA___", TRUST_PAYLOAD]);
    let executor = TurnExecutor::new(generator);
    let input = PlayerInput::new(InputKind::Do, "Open the hatch");
    session.play_turn(&executor, &input, |_| {}).await.unwrap();

    let state = session.state();
    assert_eq!(state.tick, 1);
    assert!(!state.is_processing);
    let narrators: Vec<_> = state
        .history
        .iter()
        .filter(|e| e.kind == EventKind::Narrator && e.tick == 1)
        .collect();
    assert_eq!(narrators.len(), 1);
    assert_eq!(narrators[0].description, "It swings wide.");
}

#[tokio::test]
async fn test_replace_settles_unfinished_turn() {
    let mut session = Session::new(one_character_state());
    session.replace(saved_mid_turn());
    assert!(!session.is_processing());
    assert!(
        session
            .begin_turn(&PlayerInput::new(InputKind::Do, "again"))
            .is_ok()
    );
}

#[tokio::test]
async fn test_interrupted_replay_falls_back() {
    let response = format!("The lamp flickers and dies.\n___METADATA___\n{TRUST_PAYLOAD}");
    let generator = ScriptedGenerator::new(response)
        .with_fragment_size(4)
        .failing_after(2);
    let executor = TurnExecutor::new(generator);
    let mut session = Session::new(one_character_state());
    let prior = session.state().clone();

    let mut drafts = Vec::new();
    let input = PlayerInput::new(InputKind::Do, "wait");
    session
        .play_turn(&executor, &input, |d| drafts.push(d.to_string()))
        .await
        .unwrap();

    assert_eq!(
        drafts,
        vec![
            "The ".to_string(),
            "The lamp".to_string(),
            "The simulation wavers... (Connection Error)".to_string(),
        ]
    );
    let state = session.state();
    assert_eq!(state.tick, 1);
    assert!(!state.is_processing);
    assert_eq!(state.characters, prior.characters);
    assert_eq!(
        state.history.last().map(|e| e.kind),
        Some(EventKind::Director)
    );
}
