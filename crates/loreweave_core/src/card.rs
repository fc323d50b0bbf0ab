//! Keyword-triggered lore cards.

use derive_builder::Builder;
use serde::{Deserialize, Serialize};

/// A lore snippet injected into the prompt when one of its keys appears in play.
///
/// # Examples
///
/// ```
/// use loreweave_core::StoryCard;
///
/// let card = StoryCard::builder()
///     .id("card_sword")
///     .title("The Blade")
///     .keys(vec!["sword".to_string()])
///     .entry("The blade hums near its maker.")
///     .build()
///     .unwrap();
///
/// assert!(card.character_id.is_none());
/// assert!(!card.is_active);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Builder)]
#[serde(rename_all = "camelCase")]
#[builder(setter(into))]
pub struct StoryCard {
    /// Unique card id
    pub id: String,
    /// Heading shown next to the injected entry
    pub title: String,
    /// Trigger keywords, matched case-insensitively as substrings
    #[builder(default)]
    pub keys: Vec<String>,
    /// Text injected when triggered
    #[builder(default)]
    pub entry: String,
    /// Character this card describes, lookup only
    #[builder(default)]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub character_id: Option<String>,
    /// Location this card describes, lookup only
    #[builder(default)]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location_id: Option<String>,
    /// Display hint, cleared every turn
    #[builder(default)]
    #[serde(default)]
    pub is_active: bool,
}

impl StoryCard {
    /// Create a new builder.
    pub fn builder() -> StoryCardBuilder {
        StoryCardBuilder::default()
    }
}
