mod deepl;
mod google;

pub use deepl::DeepLTranslator;
pub use google::GoogleTranslator;

pub type LanguageCode = String;

/// General translation service. Supplies the human-readable meaning shown on
/// a flashcard; similarity scoring goes through the bilingual lexicon instead.
#[async_trait::async_trait]
pub trait Translator: Send + Sync {
    /// Translate text from source to target language
    async fn translate(
        &self,
        text: &str,
        from: LanguageCode,
        to: LanguageCode,
    ) -> Result<Translation, TranslateError>;

    /// Provider metadata
    fn metadata(&self) -> ProviderMetadata;
}

#[derive(Debug, Clone)]
pub struct Translation {
    pub text: String,
    pub from: LanguageCode,
    pub to: LanguageCode,
    pub provider: String,
}

#[derive(Debug, Clone)]
pub struct ProviderMetadata {
    pub name: String,
}

#[derive(Debug, thiserror::Error)]
pub enum TranslateError {
    #[error("API error: {0}")]
    ApiError(String),

    #[error("Network error: {0}")]
    NetworkError(#[from] reqwest::Error),

    #[error("Unsupported language pair: {from} -> {to}")]
    UnsupportedLanguagePair { from: String, to: String },

    #[error("Rate limit exceeded")]
    RateLimitExceeded,

    #[error("Authentication error")]
    AuthenticationError,
}

impl TranslateError {
    /// Map the status codes every provider treats the same way
    pub(crate) fn from_status(status: reqwest::StatusCode) -> Option<Self> {
        match status.as_u16() {
            429 => Some(TranslateError::RateLimitExceeded),
            401 | 403 => Some(TranslateError::AuthenticationError),
            _ if !status.is_success() => Some(TranslateError::ApiError(format!("HTTP {status}"))),
            _ => None,
        }
    }
}
