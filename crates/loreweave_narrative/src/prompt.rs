//! Turn prompt assembly.

use crate::NarrativeConfig;
use loreweave_core::{CharacterState, GameState, PlayerInput};

/// Render the full prompt for one turn.
///
/// The prompt is a pure function of its inputs. `lore` is the output of
/// [`match_lore`](crate::match_lore); an empty string omits the lore block.
/// The separator embedded in the output contract comes from `config` and must
/// match the one the demultiplexer splits on.
pub fn assemble_prompt(
    state: &GameState,
    input: &PlayerInput,
    lore: &str,
    config: &NarrativeConfig,
) -> String {
    let mut prompt = String::with_capacity(4096);

    prompt.push_str(
        "You are the core engine of an interactive role-play simulation.\n\
         Weave a consequence-driven narrative in which characters are psychologically deep \
         and the world reacts realistically to the player.\n\n",
    );

    prompt.push_str("=== CURRENT SIMULATION STATE ===\n");
    prompt.push_str(&format!("Title: {}\n", state.title));
    match state.world.current_location() {
        Some(location) => {
            prompt.push_str(&format!(
                "Location: {} ({})\n",
                location.name, location.description
            ));
        }
        None => {
            tracing::warn!(
                location = %state.world.current_location_id,
                "Current location does not resolve"
            );
            prompt.push_str(&format!("Location: {}\n", state.world.current_location_id));
        }
    }
    prompt.push_str(&format!("Time/Context: {}\n\n", state.world.time));

    let dna = &state.story_dna;
    prompt.push_str(&format!(
        "[STORY DNA] (Thematic Resonance)\n\
         - Order <--> Chaos ({}/100): Low=Strict/Stagnant, High=Anarchy/Unpredictable.\n\
         - Hope <--> Despair ({}/100): Low=Optimistic, High=Grim/Nihilistic.\n\
         - Trust <--> Betrayal ({}/100): Low=Honest, High=Deceptive.\n\n",
        dna.order_chaos, dna.hope_despair, dna.trust_betrayal
    ));

    let director = &state.director_state;
    prompt.push_str(&format!(
        "[DIRECTOR OVERRIDE]\n\
         - Target Tension: {}/100\n\
         - Pacing: {}\n\
         - Current Narrative Focus: \"{}\"\n\n",
        director.tension, director.pacing, director.narrative_focus
    ));

    prompt.push_str("[CHARACTERS PRESENT]\n");
    for character in &state.characters {
        prompt.push_str(&character_line(character));
        prompt.push('\n');
    }
    prompt.push('\n');

    prompt.push_str("[KNOWLEDGE BASE (Active Context)]\n");
    prompt.push_str(&format!(
        "Facts: {}\n",
        state.recent_facts(*config.fact_window()).join("; ")
    ));
    if !lore.is_empty() {
        prompt.push_str(&format!("Triggered Lore:\n{}\n", lore));
    }
    prompt.push('\n');

    prompt.push_str("[RECENT HISTORY]\n");
    for entry in state.recent_history(*config.history_window()) {
        prompt.push_str(&format!("[{}] {}\n", entry.kind, entry.description));
    }
    prompt.push('\n');

    prompt.push_str(&format!(
        "=== PLAYER INPUT ===\nType: {}\nContent: \"{}\"\n\n",
        input.kind, input.content
    ));

    prompt.push_str(&instructions(config.separator()));
    prompt
}

/// One character's block: id, role, status and emotion readout with anchors.
pub fn character_line(character: &CharacterState) -> String {
    let e = &character.emotions;
    format!(
        "ID[{}] Name[{}] Role[{}]\n   - Status: {}\n   - Psychology: [Trust:{} (0=Paranoid, 100=Blind Faith), Fear:{} (0=Brave, 100=Terrified), Anger:{}, Hope:{}]\n   - Description: {}",
        character.id,
        character.name,
        character.role,
        character.status,
        e.trust,
        e.fear,
        e.anger,
        e.hope,
        character.description
    )
}

fn instructions(separator: &str) -> String {
    format!(
        r#"=== INSTRUCTIONS ===

PHASE 1: NARRATIVE GENERATION
Write the next segment of the story.
1. Show, don't tell: use sensory details (sound, smell, light) to ground the scene.
2. Psychological consistency: characters MUST act according to their current stats.
   - High Fear (>70): stuttering, defensive posture, irrationality.
   - Low Trust (<30): withholding information, suspicion, lying.
   - High Anger (>70): aggression, shouting, impulsiveness.
3. Consequence: the player's input matters. If they fail, let them fail. If they succeed, reward them. Never narrate outcomes that unilaterally favor the player (no god-moding).
4. Director influence:
   - If Tension is high (>70), use short sentences, cliffhangers and immediate threats.
   - If Pacing is Fast, skip pleasantries and move to action.
   - If Pacing is Slow, let the scene breathe with atmosphere and detail.
5. Output: just the story text. No prefixes.

PHASE 2: SEPARATOR
Output exactly "{separator}" on a line of its own.

PHASE 3: STATE SIMULATION (JSON)
Analyze the narrative you just wrote and update the state of the world.

1. Character updates:
   - Adjust emotions based on events. Player threatens NPC: Fear +15, Trust -20. Player helps NPC: Hope +10, Trust +15.
   - Update status strings (e.g. "Wounded", "Terrified", "Unconscious") if changed.
   - If a character dies, set status to "Dead".
2. Story DNA mutation:
   - Scene became more chaotic or violent: increase orderChaos.
   - A secret was revealed or a lie told: increase trustBetrayal.
   - The situation looks grim: increase hopeDespair.
   - Shift by 1-5 for minor events, 10-25 for major plot twists.
3. Director logic:
   - Tension: lower it if the player resolved the threat, raise it if they made things worse.
   - Pacing: decide whether the next scene should breathe (Slow) or accelerate (Fast).
   - Narrative focus: a short directive for the next turn.
   - Hints: 3 short, actionable options for the player.
4. World updates: add new facts if learned.

Output valid JSON matching this schema:
{{
  "director": {{
    "pacing": "Slow" | "Normal" | "Fast",
    "tension": number,
    "narrativeFocus": string,
    "suggestedHints": string[]
  }},
  "world": {{
    "characterUpdates": [
      {{
        "id": string,
        "emotions": {{ "trust": number, "fear": number, "anger": number, "hope": number }},
        "status": string
      }}
    ],
    "newFacts": string[],
    "dnaShift": {{ "orderChaos": number, "hopeDespair": number, "trustBetrayal": number }}
  }}
}}
"#
    )
}
