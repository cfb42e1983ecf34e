use std::env;

use serde::{Deserialize, Serialize};

fn default_provider() -> String {
    "google".to_string()
}

fn default_api_url() -> String {
    "https://api-free.deepl.com/v2/translate".to_string()
}

fn default_google_url() -> String {
    "https://translate.googleapis.com/translate_a/single".to_string()
}

/// General translation service used for flashcard meanings
#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct TranslatorConfig {
    /// "google" or "deepl"
    #[serde(default = "default_provider")]
    pub provider: String,
    #[serde(default)]
    pub api_key: String,
    /// DeepL endpoint
    #[serde(default = "default_api_url")]
    pub api_url: String,
    #[serde(default = "default_google_url")]
    pub google_url: String,
}

impl TranslatorConfig {
    pub fn new() -> Self {
        let provider = env::var("COGNATE_TRANSLATOR").unwrap_or_else(|_| default_provider());
        let api_key = env::var("DEEPL_API_KEY").unwrap_or_default();
        let api_url = env::var("DEEPL_API_URL").unwrap_or_else(|_| default_api_url());

        Self {
            provider,
            api_key,
            api_url,
            google_url: default_google_url(),
        }
    }
}

impl Default for TranslatorConfig {
    fn default() -> Self {
        Self {
            provider: default_provider(),
            api_key: String::new(),
            api_url: default_api_url(),
            google_url: default_google_url(),
        }
    }
}
