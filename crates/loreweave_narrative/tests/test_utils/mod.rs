//! Shared fixtures for turn engine tests.

#![allow(dead_code)]

use async_trait::async_trait;
use loreweave_core::{CharacterState, Emotions, GameState};
use loreweave_error::{GenerationError, LoreweaveResult};
use loreweave_interface::{TextGenerator, TextStream};
use std::sync::{Arc, Mutex};

/// What the mock backend does when asked to generate.
#[derive(Debug, Clone)]
pub enum MockBehavior {
    /// Stream the fragments, then end
    Fragments(Vec<String>),
    /// Fail before producing a stream
    OpenError(String),
    /// Stream the fragments, then yield an error
    FailMidStream(Vec<String>, String),
}

/// Mock text generator that records every prompt it receives.
#[derive(Debug, Clone)]
pub struct MockGenerator {
    behavior: MockBehavior,
    prompts: Arc<Mutex<Vec<String>>>,
}

impl MockGenerator {
    pub fn fragments(fragments: &[&str]) -> Self {
        Self::with_behavior(MockBehavior::Fragments(
            fragments.iter().map(|f| f.to_string()).collect(),
        ))
    }

    pub fn open_error(message: &str) -> Self {
        Self::with_behavior(MockBehavior::OpenError(message.to_string()))
    }

    pub fn fail_mid_stream(fragments: &[&str], message: &str) -> Self {
        Self::with_behavior(MockBehavior::FailMidStream(
            fragments.iter().map(|f| f.to_string()).collect(),
            message.to_string(),
        ))
    }

    pub fn with_behavior(behavior: MockBehavior) -> Self {
        Self {
            behavior,
            prompts: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn prompts(&self) -> Vec<String> {
        self.prompts.lock().unwrap().clone()
    }
}

#[async_trait]
impl TextGenerator for MockGenerator {
    fn name(&self) -> &str {
        "mock"
    }

    async fn generate_stream(&self, prompt: &str) -> LoreweaveResult<TextStream> {
        self.prompts.lock().unwrap().push(prompt.to_string());

        let items: Vec<LoreweaveResult<String>> = match &self.behavior {
            MockBehavior::Fragments(fragments) => fragments.iter().cloned().map(Ok).collect(),
            MockBehavior::OpenError(message) => {
                return Err(GenerationError::new(message.clone()).into());
            }
            MockBehavior::FailMidStream(fragments, message) => fragments
                .iter()
                .cloned()
                .map(Ok)
                .chain(std::iter::once(Err(GenerationError::new(message.clone()).into())))
                .collect(),
        };
        Ok(Box::pin(futures_util::stream::iter(items)))
    }
}

/// A minimal session at tick 0 with one character, `char_a`, at trust 50.
pub fn one_character_state() -> GameState {
    let mut state = loreweave_narrative::game_from_form(&loreweave_narrative::StoryForm {
        title: "Test".to_string(),
        setting_name: "Harbor".to_string(),
        setting_description: "Fog rolls in.".to_string(),
        characters: vec![],
    })
    .unwrap();
    state.characters.push(CharacterState {
        id: "char_a".to_string(),
        name: "Ada".to_string(),
        role: "Smuggler".to_string(),
        description: "Watches the water.".to_string(),
        status: "Normal".to_string(),
        emotions: Emotions {
            trust: 50,
            fear: 20,
            anger: 10,
            hope: 50,
        },
    });
    state
}

pub const TRUST_PAYLOAD: &str = r#"{
  "director": {"pacing": "Normal", "tension": 10, "narrativeFocus": "Establish the scene and introduce the characters.", "suggestedHints": ["Observe the surroundings", "Talk to the characters"]},
  "world": {
    "characterUpdates": [{"id": "char_a", "emotions": {"trust": 65}}],
    "dnaShift": {"trustBetrayal": 10}
  }
}"#;
