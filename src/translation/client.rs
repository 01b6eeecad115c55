use anyhow::{Context, Result};
use reqwest::{Client, Url};

use super::directive::LanguagePair;
use super::language::is_supported;
use super::response::{TranslationResult, parse_response};

/// Public Google Translate web endpoint.
pub const DEFAULT_ENDPOINT: &str = "https://translate.googleapis.com";

#[derive(Debug, Clone)]
pub struct TranslationRequest {
    pub source_text: String,
    pub languages: LanguagePair,
}

/// A remote service that can translate one request.
pub trait Translator {
    fn translate(
        &self,
        request: &TranslationRequest,
    ) -> impl Future<Output = Result<TranslationResult>> + Send;
}

pub struct TranslationClient {
    client: Client,
    endpoint: String,
}

impl TranslationClient {
    pub fn new(endpoint: String) -> Self {
        Self {
            client: Client::new(),
            endpoint,
        }
    }

    fn request_url(&self, request: &TranslationRequest) -> Result<Url> {
        let base = format!("{}/translate_a/single", self.endpoint.trim_end_matches('/'));
        let LanguagePair { from, to } = &request.languages;

        Url::parse_with_params(
            &base,
            &[
                ("client", "gtx"),
                ("sl", from.as_str()),
                ("tl", to.as_str()),
                ("hl", "en"),
                ("dt", "t"),
                ("dt", "ld"),
                ("dt", "qca"),
                ("ie", "UTF-8"),
                ("oe", "UTF-8"),
                ("q", request.source_text.as_str()),
            ],
        )
        .with_context(|| format!("Invalid API endpoint: {}", self.endpoint))
    }
}

impl Translator for TranslationClient {
    async fn translate(&self, request: &TranslationRequest) -> Result<TranslationResult> {
        let LanguagePair { from, to } = &request.languages;
        for code in [from, to] {
            if !is_supported(code) {
                anyhow::bail!("The language '{code}' is not supported");
            }
        }

        let url = self.request_url(request)?;
        crate::verbose!("GET {}", url.as_str());

        let response = self
            .client
            .get(url)
            .send()
            .await
            .with_context(|| format!("Failed to connect to API endpoint: {}", self.endpoint))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            anyhow::bail!("API request failed with status {status}: {body}");
        }

        let body = response
            .text()
            .await
            .context("Failed to read API response")?;

        let result = parse_response(&body)?;
        crate::verbose!(
            "detected language '{}' (suggested: {})",
            result.language.iso,
            result.language.did_you_mean
        );

        Ok(result)
    }
}
