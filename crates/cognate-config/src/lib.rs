use std::env;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use serde::{Deserialize, Serialize};

use self::lexicon::LexiconConfig;
use self::network::NetworkConfig;
use self::source::SourceConfig;
use self::translator::TranslatorConfig;

pub mod lexicon;
pub mod network;
pub mod source;
pub mod translator;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub network: NetworkConfig,
    pub source: SourceConfig,
    pub lexicon: LexiconConfig,
    pub translator: TranslatorConfig,

    /// Language the learner wants to study
    pub learn_lang: String,
    /// Learner's native language
    pub native_lang: String,
    /// Number of flashcards to produce
    pub word_count: usize,
}

impl Config {
    pub fn new() -> Self {
        // Missing .env is the common case
        let _ = dotenvy::dotenv();

        let learn_lang = env::var("COGNATE_LEARN_LANG").unwrap_or_else(|_| "it".to_string());
        let native_lang = env::var("COGNATE_NATIVE_LANG").unwrap_or_else(|_| "de".to_string());

        let word_count = env::var("COGNATE_WORD_COUNT")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(10);

        Config {
            network: NetworkConfig::new(),
            source: SourceConfig::new(),
            lexicon: LexiconConfig::new(),
            translator: TranslatorConfig::new(),

            learn_lang,
            native_lang,
            word_count,
        }
    }

    /// Load a JSON config file. Fields missing from the file keep their defaults.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        tracing::info!("Loading config from {}", path.display());
        let file = File::open(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;
        let reader = BufReader::new(file);
        let config = serde_json::from_reader(reader)?;
        Ok(config)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config {path}: {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },

    #[error("Invalid config: {0}")]
    Parse(#[from] serde_json::Error),
}
