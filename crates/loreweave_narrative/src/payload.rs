//! Decoding the structured block that follows the separator.

use loreweave_core::TurnPayload;
use loreweave_error::{JsonError, LoreweaveResult};

/// Strip one optional surrounding code fence and trim whitespace.
///
/// A leading fence may carry a language tag (`` ```json ``).
///
/// # Examples
///
/// ```
/// use loreweave_narrative::strip_code_fence;
///
/// assert_eq!(strip_code_fence("\n```json\n{\"a\":1}\n```\n"), "{\"a\":1}");
/// assert_eq!(strip_code_fence("  {\"a\":1} "), "{\"a\":1}");
/// ```
pub fn strip_code_fence(text: &str) -> &str {
    let mut body = text.trim();
    if let Some(rest) = body.strip_prefix("```") {
        body = rest.trim_start_matches(|c: char| c.is_ascii_alphanumeric());
    }
    if let Some(rest) = body.trim_end().strip_suffix("```") {
        body = rest;
    }
    body.trim()
}

/// Parse JSON into `T`, logging a bounded preview of the input on failure.
///
/// # Errors
///
/// Returns an error if the text cannot be decoded into `T`.
pub fn parse_json<T>(json_str: &str) -> LoreweaveResult<T>
where
    T: serde::de::DeserializeOwned,
{
    serde_json::from_str(json_str).map_err(|e| {
        let preview = json_str.chars().take(100).collect::<String>();

        tracing::warn!(
            error = %e,
            json_preview = %preview,
            "Structured payload did not decode"
        );

        JsonError::new(format!("Failed to parse JSON: {} (JSON: {}...)", e, preview)).into()
    })
}

/// Decode the buffered tail into a turn payload.
///
/// Returns `None` when the tail is empty after fence stripping (the model
/// omitted the block) or when it does not decode. Neither case is an error for
/// the turn.
pub fn parse_payload(tail: &str) -> Option<TurnPayload> {
    let body = strip_code_fence(tail);
    if body.is_empty() {
        tracing::debug!("Structured block is empty");
        return None;
    }
    parse_json(body).ok()
}
