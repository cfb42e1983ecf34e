use std::env;

use serde::{Deserialize, Serialize};

fn default_base_url() -> String {
    "https://raw.githubusercontent.com/hermitdave/FrequencyWords/master/content/2016".to_string()
}

fn default_fallback_lang() -> String {
    "en".to_string()
}

fn default_buffer_count() -> usize {
    100
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SourceConfig {
    /// Root of the FrequencyWords tree, `{base_url}/{lang}/{lang}_50k.txt`
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Language used when the requested one has no list
    #[serde(default = "default_fallback_lang")]
    pub fallback_lang: String,
    /// How many frequent words are ranked before truncating
    #[serde(default = "default_buffer_count")]
    pub buffer_count: usize,
}

impl SourceConfig {
    pub fn new() -> Self {
        let base_url = env::var("COGNATE_SOURCE_URL").unwrap_or_else(|_| default_base_url());
        let fallback_lang =
            env::var("COGNATE_FALLBACK_LANG").unwrap_or_else(|_| default_fallback_lang());
        let buffer_count = env::var("COGNATE_BUFFER_COUNT")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or_else(default_buffer_count);

        Self {
            base_url,
            fallback_lang,
            buffer_count,
        }
    }
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            fallback_lang: default_fallback_lang(),
            buffer_count: default_buffer_count(),
        }
    }
}
