use crate::error::ChatError;
use crate::translation::TranslationClient;
use serde_json::Value;

const DEFAULT_BASE_URL: &str = "https://translate.googleapis.com";
const DEFAULT_SOURCE_LANG: &str = "en";

/// Translation client backed by the unauthenticated Google Translate
/// endpoint. Responses with the target equal to the source language are
/// short-circuited without any network activity.
pub struct GoogleTranslateClient {
    client: reqwest::Client,
    base_url: String,
    source_lang: String,
}

impl GoogleTranslateClient {
    pub fn new() -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: DEFAULT_BASE_URL.to_string(),
            source_lang: DEFAULT_SOURCE_LANG.to_string(),
        }
    }

    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    pub fn with_source_lang(mut self, lang: impl Into<String>) -> Self {
        self.source_lang = lang.into();
        self
    }
}

impl Default for GoogleTranslateClient {
    fn default() -> Self {
        Self::new()
    }
}

/// The endpoint answers with a nested array: the first top-level group
/// holds segment entries whose first element is the translated text.
fn extract_translation(body: &Value) -> Result<String, ChatError> {
    let segments = body
        .get(0)
        .and_then(|v| v.as_array())
        .ok_or_else(|| ChatError::Translation("malformed response: no segments".to_string()))?;

    let translated: String = segments
        .iter()
        .filter_map(|segment| segment.get(0).and_then(|t| t.as_str()))
        .collect();

    if translated.is_empty() {
        return Err(ChatError::Translation(
            "malformed response: empty translation".to_string(),
        ));
    }

    Ok(translated)
}

#[async_trait::async_trait]
impl TranslationClient for GoogleTranslateClient {
    async fn translate(&self, text: &str, target_lang: &str) -> Result<String, ChatError> {
        // Identity fast-path: nothing to translate, no external call.
        if target_lang == self.source_lang {
            return Ok(text.to_string());
        }

        let url = format!("{}/translate_a/single", self.base_url);
        let response = self
            .client
            .get(&url)
            .query(&[
                ("client", "gtx"),
                ("sl", "auto"),
                ("tl", target_lang),
                ("dt", "t"),
                ("q", text),
            ])
            .send()
            .await
            .map_err(|e| ChatError::Translation(format!("request failed: {e}")))?;

        let status = response.status();
        if !status.is_success() {
            return Err(ChatError::Translation(format!(
                "translate endpoint error ({status})"
            )));
        }

        let body: Value = response
            .json()
            .await
            .map_err(|e| ChatError::Translation(format!("failed to parse response: {e}")))?;

        extract_translation(&body)
    }
}
