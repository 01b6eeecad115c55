//! Decoding of the `translate_a/single` response body.
//!
//! The endpoint answers with positional JSON arrays rather than objects:
//!
//! - `[0]` sentence chunks, each `[translated, original, ...]`
//! - `[2]` detected source language
//! - `[7]` spelling suggestion `[marked_up, plain, _, _, _, auto_corrected]`
//! - `[8]` language detection `[[iso, ...], ...]`

use anyhow::{Context, Result};
use serde_json::Value;

/// Source language as reported by the service.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DetectedLanguage {
    pub iso: String,
    /// The service replaced the language it was given or first guessed.
    pub did_you_mean: bool,
}

/// Spelling feedback on the source text.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SourceText {
    /// Corrected source text, with corrections wrapped in `[` `]`.
    pub value: String,
    pub auto_corrected: bool,
    pub did_you_mean: bool,
}

/// A decoded translation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TranslationResult {
    pub text: String,
    pub language: DetectedLanguage,
    pub source: SourceText,
}

/// Decodes a raw response body.
pub fn parse_response(body: &str) -> Result<TranslationResult> {
    let value: Value = serde_json::from_str(body).context("Response is not valid JSON")?;
    decode(&value)
}

fn decode(body: &Value) -> Result<TranslationResult> {
    let sentences = body
        .get(0)
        .and_then(Value::as_array)
        .context("Response has no sentence list")?;

    let text: String = sentences
        .iter()
        .filter_map(|sentence| sentence.get(0).and_then(Value::as_str))
        .collect();

    let reported = body.get(2).and_then(Value::as_str);
    let detected = body
        .get(8)
        .and_then(|d| d.get(0))
        .and_then(|d| d.get(0))
        .and_then(Value::as_str);

    let language = match (reported, detected) {
        (Some(reported), Some(detected)) if reported != detected => DetectedLanguage {
            iso: detected.to_string(),
            did_you_mean: true,
        },
        (Some(iso), _) | (None, Some(iso)) => DetectedLanguage {
            iso: iso.to_string(),
            did_you_mean: false,
        },
        (None, None) => anyhow::bail!("Response has no detected language"),
    };

    let source = body
        .get(7)
        .and_then(|s| {
            let marked = s.get(0).and_then(Value::as_str)?;
            Some((marked, s.get(5).and_then(Value::as_bool) == Some(true)))
        })
        .filter(|(marked, _)| !marked.is_empty())
        .map(|(marked, auto_corrected)| SourceText {
            value: marked.replace("<b><i>", "[").replace("</i></b>", "]"),
            auto_corrected,
            did_you_mean: !auto_corrected,
        })
        .unwrap_or_default();

    Ok(TranslationResult {
        text,
        language,
        source,
    })
}
