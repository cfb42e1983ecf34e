use std::time::Duration;

use async_trait::async_trait;

use crate::{LanguageCode, ProviderMetadata, TranslateError, Translation, Translator};

/// Keyless Google Translate web endpoint (`client=gtx`)
#[derive(Clone)]
pub struct GoogleTranslator {
    client: reqwest::Client,
    api_url: String,
}

impl GoogleTranslator {
    pub fn new(api_url: String, timeout: Duration) -> Result<Self, TranslateError> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;

        Ok(Self { client, api_url })
    }
}

#[async_trait]
impl Translator for GoogleTranslator {
    async fn translate(
        &self,
        text: &str,
        from: LanguageCode,
        to: LanguageCode,
    ) -> Result<Translation, TranslateError> {
        let params = [
            ("client", "gtx"),
            ("sl", from.as_str()),
            ("tl", to.as_str()),
            ("dt", "t"),
            ("q", text),
        ];

        tracing::debug!("Google translate {from} -> {to}: '{text}'");
        let response = self.client.get(&self.api_url).query(&params).send().await?;

        if let Some(err) = TranslateError::from_status(response.status()) {
            return Err(err);
        }

        let json: serde_json::Value = response.json().await.map_err(|e| {
            TranslateError::ApiError(format!("Failed to parse response: {}", e))
        })?;

        let translated_text = parse_segments(&json)
            .ok_or_else(|| TranslateError::ApiError("No translation in response".to_string()))?;

        Ok(Translation {
            text: translated_text,
            from,
            to,
            provider: "google".to_string(),
        })
    }

    fn metadata(&self) -> ProviderMetadata {
        ProviderMetadata {
            name: "Google Translate".to_string(),
        }
    }
}

/// Response is `[[["translated", "source", ...], ...], ...]`; join the segments.
fn parse_segments(json: &serde_json::Value) -> Option<String> {
    let text: String = json
        .get(0)?
        .as_array()?
        .iter()
        .filter_map(|segment| segment.get(0).and_then(|t| t.as_str()))
        .collect();

    let text = text.trim();
    if text.is_empty() {
        None
    } else {
        Some(text.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_parse_segments_joins_parts() {
        let json = json!([[["Hello ", "Hallo ", null], ["world", "Welt", null]], null, "de"]);
        assert_eq!(parse_segments(&json).as_deref(), Some("Hello world"));
    }

    #[test]
    fn test_parse_segments_empty() {
        assert_eq!(parse_segments(&json!([[]])), None);
        assert_eq!(parse_segments(&json!({"error": "bad"})), None);
    }
}
