use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};
use reqwest::Client;
use serde::Deserialize;

use crate::error::RequestError;

/// Characters escaped when a value is embedded in a URL path segment.
/// Everything outside the RFC 3986 unreserved set is encoded, so the trip
/// through the instance is lossless.
const PATH_SEGMENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'.')
    .remove(b'_')
    .remove(b'~');

/// A single translation query.
#[derive(Debug, Clone)]
pub struct TranslationRequest {
    /// Source language code, `auto` lets the instance detect it.
    pub source: String,
    /// Target language code.
    pub target: String,
    /// Raw text to translate.
    pub text: String,
}

/// Decoded response for a translation query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranslationResult {
    pub translated_text: String,
    /// Language the instance detected, reported when the source was `auto`.
    pub detected_source: Option<String>,
    /// Phonetic transcription of the query text.
    pub source_pronunciation: Option<String>,
    /// Phonetic transcription of the translated text.
    pub target_pronunciation: Option<String>,
    /// Alternate word choices, grouped by part of speech, in response order.
    pub alternate_translations: Vec<AlternateGroup>,
}

/// Alternate word choices for one part of speech.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AlternateGroup {
    pub part_of_speech: String,
    pub words: Vec<String>,
}

/// One entry of a language listing.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct LanguageEntry {
    pub code: String,
    pub name: String,
}

/// Which side of a translation a language listing is for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Source,
    Target,
}

impl Direction {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Source => "source",
            Self::Target => "target",
        }
    }
}

// Wire shapes as the API serves them. `translation` and `info` are
// required; everything inside `info` is optional.

#[derive(Debug, Deserialize)]
struct TranslateResponse {
    translation: String,
    info: TranslateInfo,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct TranslateInfo {
    #[serde(default)]
    detected_source: Option<String>,
    #[serde(default)]
    pronunciation: Pronunciation,
    #[serde(default)]
    extra_translations: Vec<ExtraTranslation>,
}

#[derive(Debug, Default, Deserialize)]
struct Pronunciation {
    #[serde(default)]
    query: Option<String>,
    #[serde(default)]
    translation: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ExtraTranslation {
    #[serde(rename = "type")]
    kind: String,
    list: Vec<ExtraWord>,
}

#[derive(Debug, Deserialize)]
struct ExtraWord {
    word: String,
}

#[derive(Debug, Deserialize)]
struct LanguagesResponse {
    languages: Vec<LanguageEntry>,
}

/// HTTP client for one Lingva instance.
///
/// Performs a single GET per operation with reqwest's defaults: no timeout
/// override, no retry, default redirect following.
pub struct LingvaClient {
    client: Client,
    instance: String,
}

impl LingvaClient {
    /// Creates a client for the given instance base URL.
    pub fn new(instance: &str) -> Self {
        Self {
            client: Client::new(),
            instance: instance.to_string(),
        }
    }

    /// Translates `request.text` from `request.source` to `request.target`.
    pub async fn translate(
        &self,
        request: &TranslationRequest,
    ) -> Result<TranslationResult, RequestError> {
        let url = format!(
            "{}/api/v1/{}/{}/{}",
            self.instance,
            encode_segment(&request.source),
            encode_segment(&request.target),
            encode_segment(&request.text),
        );

        let body = self.get(&url).await?;
        let response: TranslateResponse = serde_json::from_str(&body)?;

        Ok(TranslationResult {
            translated_text: response.translation,
            detected_source: response.info.detected_source,
            source_pronunciation: response.info.pronunciation.query,
            target_pronunciation: response.info.pronunciation.translation,
            alternate_translations: response
                .info
                .extra_translations
                .into_iter()
                .map(|group| AlternateGroup {
                    part_of_speech: group.kind,
                    words: group.list.into_iter().map(|entry| entry.word).collect(),
                })
                .collect(),
        })
    }

    /// Fetches the language codes the instance accepts for `direction`.
    pub async fn languages(
        &self,
        direction: Direction,
    ) -> Result<Vec<LanguageEntry>, RequestError> {
        let url = format!("{}/api/v1/languages/{}", self.instance, direction.as_str());
        let body = self.get(&url).await?;
        let response: LanguagesResponse = serde_json::from_str(&body)?;
        Ok(response.languages)
    }

    async fn get(&self, url: &str) -> Result<String, RequestError> {
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(RequestError::Transport)?;

        let status = response.status();
        if !status.is_success() {
            return Err(RequestError::Status { status });
        }

        response.text().await.map_err(RequestError::Transport)
    }
}

/// Percent-encodes a value for use as one URL path segment.
fn encode_segment(value: &str) -> String {
    utf8_percent_encode(value, PATH_SEGMENT).to_string()
}
