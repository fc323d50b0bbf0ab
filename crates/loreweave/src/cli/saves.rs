//! Session and save management handlers.

use super::commands::OutputFormat;
use loreweave::{
    FileSystemSaveStore, GameState, JsonError, LoreweaveConfig, LoreweaveResult, SaveStore,
    StorageError, StorageErrorKind, bundled_scenarios, new_game_from_scenario,
};
use std::path::Path;

/// Load layered configuration, or an explicit file over the bundled defaults.
pub fn load_config(path: Option<&Path>) -> LoreweaveResult<LoreweaveConfig> {
    match path {
        Some(path) => LoreweaveConfig::from_file(path),
        None => LoreweaveConfig::load(),
    }
}

/// Open the filesystem save store named by the configuration.
pub(crate) fn open_store(config: &LoreweaveConfig) -> LoreweaveResult<FileSystemSaveStore> {
    FileSystemSaveStore::new(config.storage().resolved_save_dir())
}

/// Load a save or fail with `NotFound`.
pub(crate) async fn require_session(
    store: &dyn SaveStore,
    id: &str,
) -> LoreweaveResult<GameState> {
    store
        .load(id)
        .await?
        .ok_or_else(|| StorageError::new(StorageErrorKind::NotFound(id.to_string())).into())
}

/// List bundled scenario templates.
pub fn list_scenarios() -> LoreweaveResult<()> {
    for scenario in bundled_scenarios()? {
        println!("{:<20} {}", scenario.id, scenario.title);
        println!("{:<20} {}", "", scenario.description);
    }
    Ok(())
}

/// Create and save a session from a scenario template.
pub async fn new_session(config: &LoreweaveConfig, scenario: &str) -> LoreweaveResult<()> {
    let store = open_store(config)?;
    let state = new_game_from_scenario(scenario)?;
    store.save(&state).await?;
    tracing::info!(id = %state.id, scenario, "Session created");
    println!("{}", state.id);
    Ok(())
}

/// List saves, most recent first.
pub async fn list_saves(config: &LoreweaveConfig, format: OutputFormat) -> LoreweaveResult<()> {
    let store = open_store(config)?;
    let saves = store.list().await?;

    match format {
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(&saves)
                .map_err(|e| JsonError::new(e.to_string()))?;
            println!("{}", json);
        }
        OutputFormat::Human => {
            if saves.is_empty() {
                println!("No saved sessions.");
                return Ok(());
            }
            for save in &saves {
                println!("{}  [tick {}]  {}", save.id, save.tick, save.title);
                println!("    {}", save.preview_text);
            }
            println!("Total: {} sessions", saves.len());
        }
    }

    Ok(())
}

/// Print a session summary.
pub async fn show_session(
    config: &LoreweaveConfig,
    id: &str,
    format: OutputFormat,
) -> LoreweaveResult<()> {
    let store = open_store(config)?;
    let state = require_session(&store, id).await?;

    match format {
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(&state)
                .map_err(|e| JsonError::new(e.to_string()))?;
            println!("{}", json);
        }
        OutputFormat::Human => {
            print!("{}", summarize(&state, *config.narrative().history_window()));
        }
    }

    Ok(())
}

/// Delete a save.
pub async fn delete_session(config: &LoreweaveConfig, id: &str) -> LoreweaveResult<()> {
    let store = open_store(config)?;
    store.delete(id).await?;
    println!("Deleted {}", id);
    Ok(())
}

fn summarize(state: &GameState, history_window: usize) -> String {
    let mut out = String::new();
    out.push_str(&format!("{} ({})\n", state.title, state.id));
    out.push_str(&format!("Tick {}  |  {}\n", state.tick, state.world.time));

    if let Some(location) = state.world.current_location() {
        out.push_str(&format!("Location: {} - {}\n", location.name, location.description));
    } else {
        out.push_str(&format!("Location: {} (missing)\n", state.world.current_location_id));
    }

    let dna = &state.story_dna;
    out.push_str(&format!(
        "DNA: order/chaos {}  hope/despair {}  trust/betrayal {}\n",
        dna.order_chaos, dna.hope_despair, dna.trust_betrayal
    ));

    let director = &state.director_state;
    out.push_str(&format!(
        "Director: {} pacing, tension {}\n  Focus: {}\n",
        director.pacing, director.tension, director.narrative_focus
    ));
    for hint in &director.suggested_hints {
        out.push_str(&format!("  Hint: {}\n", hint));
    }

    out.push_str("Characters:\n");
    for c in &state.characters {
        out.push_str(&format!(
            "  {} ({}) [{}] trust {} fear {} anger {} hope {}\n",
            c.name,
            c.role,
            c.status,
            c.emotions.trust,
            c.emotions.fear,
            c.emotions.anger,
            c.emotions.hope
        ));
    }

    out.push_str("Recent history:\n");
    for entry in state.recent_history(history_window) {
        out.push_str(&format!("  [{}] {}: {}\n", entry.tick, entry.kind, entry.description));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn summary_lists_cast_and_director() {
        let state = new_game_from_scenario("scen_cyberpunk").unwrap();
        let summary = summarize(&state, 8);
        assert!(summary.contains(&state.title));
        assert!(summary.contains("Normal pacing"));
        for c in &state.characters {
            assert!(summary.contains(&c.name));
        }
    }

    #[tokio::test]
    async fn missing_session_is_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileSystemSaveStore::new(dir.path()).unwrap();
        let err = require_session(&store, "game_missing").await.unwrap_err();
        assert!(err.to_string().contains("Save not found"));
    }
}
