use async_trait::async_trait;

use crate::error::SourceError;
use crate::language::Language;

/// Provider of frequency-ordered word lists
#[async_trait]
pub trait FrequencySource: Send + Sync {
    /// Up to `count` words of `language`, most frequent first
    async fn fetch(&self, language: Language, count: usize) -> Result<Vec<String>, SourceError>;
}
