//! Applying a turn's structured delta to produce the next snapshot.

use crate::NarrativeConfig;
use loreweave_core::{
    CharacterState, DnaShift, EmotionDelta, EventKind, EventLogEntry, GameState, StoryDna,
    TurnPayload, WorldDelta,
};

const BOUND_MIN: i32 = 0;
const BOUND_MAX: i32 = 100;

/// The delta used when a turn produced no structured block.
///
/// Keeps the prior director state and carries only a failure narrative.
pub fn fallback_payload(prior: &GameState, config: &NarrativeConfig) -> TurnPayload {
    TurnPayload {
        director: prior.director_state.clone(),
        world: WorldDelta::narrative_only(config.failure_narrative().clone()),
    }
}

/// Complete a turn: advance the tick and merge the delta into a new snapshot.
///
/// With `None` the fallback payload is applied, so the turn still advances and
/// the busy flag clears. Malformed parts of a delta degrade independently:
/// updates for unknown character ids are skipped, absent fields stay as they
/// were.
///
/// # Examples
///
/// ```
/// # use loreweave_core::GameState;
/// # fn demo(state: &GameState) {
/// use loreweave_narrative::{NarrativeConfig, apply_turn};
///
/// let next = apply_turn(state, None, &NarrativeConfig::default());
/// assert_eq!(next.tick, state.tick + 1);
/// assert!(!next.is_processing);
/// # }
/// ```
#[tracing::instrument(skip_all, fields(tick = prior.tick, fallback = payload.is_none()))]
pub fn apply_turn(
    prior: &GameState,
    payload: Option<&TurnPayload>,
    config: &NarrativeConfig,
) -> GameState {
    let fallback;
    let payload = match payload {
        Some(payload) => payload,
        None => {
            fallback = fallback_payload(prior, config);
            &fallback
        }
    };
    let clamp = *config.clamp_bounds();
    let turn_tick = prior.tick + 1;
    let mut next = prior.clone();

    if let Some(narrative) = &payload.world.narrative {
        if !prior.has_draft() {
            next.history.push(EventLogEntry::new(
                EventKind::Narrator,
                turn_tick,
                narrative.clone(),
            ));
        }
    }

    for update in &payload.world.character_updates {
        match next.characters.iter_mut().find(|c| c.id == update.id) {
            Some(character) => {
                merge_emotions(character, &update.emotions, clamp);
                // A blank status keeps the current label.
                if let Some(status) = update.status.as_deref().filter(|s| !s.trim().is_empty()) {
                    character.status = status.to_string();
                }
            }
            None => {
                tracing::debug!(id = %update.id, "Ignoring update for unknown character");
            }
        }
    }

    next.tick = turn_tick;

    next.director_state = payload.director.clone();
    if clamp {
        next.director_state.tension = bound(next.director_state.tension);
    }
    next.history.push(EventLogEntry::new(
        EventKind::Director,
        turn_tick,
        format!("Director: {} Pacing", next.director_state.pacing),
    ));

    if let Some(shift) = &payload.world.dna_shift {
        shift_dna(&mut next.story_dna, shift, clamp);
    }

    next.world
        .facts
        .extend(payload.world.new_facts.iter().cloned());

    for card in &mut next.story_cards {
        card.is_active = false;
    }

    next.is_processing = false;

    tracing::debug!(
        tick = next.tick,
        updates = payload.world.character_updates.len(),
        new_facts = payload.world.new_facts.len(),
        "Turn applied"
    );
    next
}

fn merge_emotions(character: &mut CharacterState, delta: &EmotionDelta, clamp: bool) {
    let fix = |v: i32| if clamp { bound(v) } else { v };
    let emotions = &mut character.emotions;
    if let Some(v) = delta.trust {
        emotions.trust = fix(v);
    }
    if let Some(v) = delta.fear {
        emotions.fear = fix(v);
    }
    if let Some(v) = delta.anger {
        emotions.anger = fix(v);
    }
    if let Some(v) = delta.hope {
        emotions.hope = fix(v);
    }
}

fn shift_dna(dna: &mut StoryDna, shift: &DnaShift, clamp: bool) {
    let apply = |axis: &mut i32, delta: Option<i32>| {
        if let Some(delta) = delta {
            let shifted = axis.saturating_add(delta);
            *axis = if clamp { bound(shifted) } else { shifted };
        }
    };
    apply(&mut dna.order_chaos, shift.order_chaos);
    apply(&mut dna.hope_despair, shift.hope_despair);
    apply(&mut dna.trust_betrayal, shift.trust_betrayal);
}

fn bound(value: i32) -> i32 {
    value.clamp(BOUND_MIN, BOUND_MAX)
}
