/// Caller misuse. The only error that reaches the presentation layer.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigurationError {
    #[error("Unsupported language: {0}")]
    UnsupportedLanguage(String),

    #[error("Word count {count} out of range {min}..={max}")]
    CountOutOfRange { count: usize, min: usize, max: usize },
}

/// Frequency list could not be retrieved
#[derive(Debug, thiserror::Error)]
pub enum SourceError {
    #[error("Fetch failed: {0}")]
    Fetch(String),

    #[error("HTTP {0}")]
    Status(u16),

    #[error("Request timed out")]
    Timeout,
}

/// Bilingual lexicon could not be loaded for a language pair
#[derive(Debug, thiserror::Error)]
pub enum LexiconError {
    #[error("No lexicon for {from} -> {to}")]
    Unavailable { from: String, to: String },

    #[error("Fetch failed: {0}")]
    Fetch(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Request timed out")]
    Timeout,
}
