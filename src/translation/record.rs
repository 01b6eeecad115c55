use serde::Serialize;

use super::directive::ParsedInput;
use super::language::display_name;
use super::response::TranslationResult;
use crate::tieq::{TIEQ_VIET, tieq_viet};

const VIETNAMESE: &str = "vi";

/// The JSON summary printed for a successful translation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OutputRecord {
    pub text: String,
    pub from: String,
    pub to: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub did_you_mean: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub auto_corrected: Option<String>,
}

impl OutputRecord {
    /// Builds the record for `input` from the service's answer.
    ///
    /// Vietnamese text sent to Vietnamese is respelled locally as Tiếq Việt
    /// instead of using the service's echo.
    pub fn build(input: &ParsedInput, result: &TranslationResult) -> Self {
        let vietnamese = result.language.iso == VIETNAMESE && input.languages.to == VIETNAMESE;

        let (text, to) = if vietnamese {
            (tieq_viet(&input.text), TIEQ_VIET.to_string())
        } else {
            (
                result.text.clone(),
                display_name(&input.languages.to).to_string(),
            )
        };

        let from = display_name(&result.language.iso).to_string();
        let did_you_mean = result.language.did_you_mean.then(|| from.clone());

        let auto_corrected = (result.source.auto_corrected || result.source.did_you_mean)
            .then(|| result.source.value.replace(['[', ']'], "___"));

        Self {
            text,
            from,
            to,
            did_you_mean,
            auto_corrected,
        }
    }

    /// Serializes the record as a single JSON line.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}
