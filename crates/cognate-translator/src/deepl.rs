use std::time::Duration;

use async_trait::async_trait;

use crate::{LanguageCode, ProviderMetadata, TranslateError, Translation, Translator};

#[derive(Clone)]
pub struct DeepLTranslator {
    client: reqwest::Client,
    api_key: String,
    api_url: String,
}

impl DeepLTranslator {
    pub fn new(api_key: String, api_url: String, timeout: Duration) -> Result<Self, TranslateError> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;

        Ok(Self {
            client,
            api_key,
            api_url,
        })
    }
}

#[async_trait]
impl Translator for DeepLTranslator {
    async fn translate(
        &self,
        text: &str,
        from: LanguageCode,
        to: LanguageCode,
    ) -> Result<Translation, TranslateError> {
        if self.api_key.is_empty() {
            return Err(TranslateError::AuthenticationError);
        }

        if UNSUPPORTED.contains(&from.as_str()) || UNSUPPORTED.contains(&to.as_str()) {
            return Err(TranslateError::UnsupportedLanguagePair { from, to });
        }

        let source_lang = match from.as_str() {
            "no" => "NB".to_string(),
            other => other.to_uppercase(),
        };
        let target_lang = deepl_target(&to);
        let params = [
            ("text", text),
            ("source_lang", source_lang.as_str()),
            ("target_lang", target_lang.as_str()),
        ];

        let response = self
            .client
            .post(&self.api_url)
            .header("Authorization", format!("DeepL-Auth-Key {}", self.api_key))
            .form(&params)
            .send()
            .await?;

        if let Some(err) = TranslateError::from_status(response.status()) {
            return Err(err);
        }

        let json: serde_json::Value = response.json().await.map_err(|e| {
            TranslateError::ApiError(format!("Failed to parse response: {}", e))
        })?;

        let translated_text = json["translations"]
            .get(0)
            .and_then(|t| t["text"].as_str())
            .ok_or_else(|| TranslateError::ApiError("No translation in response".to_string()))?;

        Ok(Translation {
            text: translated_text.to_string(),
            from,
            to,
            provider: "deepl".to_string(),
        })
    }

    fn metadata(&self) -> ProviderMetadata {
        ProviderMetadata {
            name: "DeepL".to_string(),
        }
    }
}

/// Languages in our set that DeepL does not cover
const UNSUPPORTED: [&str; 2] = ["fa", "hi"];

/// DeepL rejects bare "EN"/"PT" as targets and wants a regional variant
fn deepl_target(code: &str) -> String {
    match code {
        "en" => "EN-US".to_string(),
        "pt" => "PT-PT".to_string(),
        "no" => "NB".to_string(),
        other => other.to_uppercase(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deepl_target_variants() {
        assert_eq!(deepl_target("en"), "EN-US");
        assert_eq!(deepl_target("no"), "NB");
        assert_eq!(deepl_target("de"), "DE");
    }

    #[tokio::test]
    async fn test_missing_key_is_auth_error() {
        let translator = DeepLTranslator::new(
            String::new(),
            "http://127.0.0.1:9/v2/translate".to_string(),
            Duration::from_secs(1),
        )
        .unwrap();

        let result = translator
            .translate("haus", "de".to_string(), "en".to_string())
            .await;
        assert!(matches!(result, Err(TranslateError::AuthenticationError)));
    }

    #[tokio::test]
    async fn test_unsupported_pair() {
        let translator = DeepLTranslator::new(
            "key".to_string(),
            "http://127.0.0.1:9/v2/translate".to_string(),
            Duration::from_secs(1),
        )
        .unwrap();

        let result = translator
            .translate("namaste", "hi".to_string(), "de".to_string())
            .await;
        assert!(matches!(
            result,
            Err(TranslateError::UnsupportedLanguagePair { .. })
        ));
    }
}
