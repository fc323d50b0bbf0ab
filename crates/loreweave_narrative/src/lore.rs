//! Keyword-triggered lore lookup.
//!
//! Matching is a plain case-folded substring scan over recent history and the
//! player's input. No tokenization is done, so a key like `"ark"` also fires on
//! `"dark"`.

use loreweave_core::{GameState, PlayerInput, StoryCard};

/// Cards whose keys appear in the scanned text, in card order.
pub fn triggered_cards<'a>(
    state: &'a GameState,
    input: &PlayerInput,
    history_window: usize,
) -> Vec<&'a StoryCard> {
    if state.story_cards.is_empty() {
        return Vec::new();
    }

    let recent = state
        .recent_history(history_window)
        .iter()
        .map(|entry| entry.description.as_str())
        .collect::<Vec<_>>()
        .join(" ");
    let scanned = format!("{} {}", recent, input.content).to_lowercase();

    state
        .story_cards
        .iter()
        .filter(|card| {
            card.keys.iter().any(|key| {
                let key = key.trim().to_lowercase();
                !key.is_empty() && scanned.contains(&key)
            })
        })
        .collect()
}

/// Render triggered lore as one `[World Info - title]: entry` line per card.
///
/// Returns an empty string when nothing matched.
///
/// # Examples
///
/// ```
/// # use loreweave_core::{GameState, InputKind, PlayerInput};
/// # fn demo(state: &GameState) {
/// use loreweave_narrative::match_lore;
///
/// let lore = match_lore(state, &PlayerInput::new(InputKind::Do, "I sit down"), 3);
/// println!("{lore}");
/// # }
/// ```
pub fn match_lore(state: &GameState, input: &PlayerInput, history_window: usize) -> String {
    let cards = triggered_cards(state, input, history_window);
    tracing::debug!(
        triggered = cards.len(),
        ids = ?cards.iter().map(|c| c.id.as_str()).collect::<Vec<_>>(),
        "Matched lore cards"
    );
    cards
        .iter()
        .map(|card| format!("[World Info - {}]: {}", card.title, card.entry))
        .collect::<Vec<_>>()
        .join("\n")
}
