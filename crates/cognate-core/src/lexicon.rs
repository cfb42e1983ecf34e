use std::sync::Arc;

use async_trait::async_trait;

use crate::error::LexiconError;
use crate::language::Language;

/// Bilingual word list for one language pair
pub trait Lexicon: Send + Sync {
    /// Candidate translations, most relevant first
    fn lookup(&self, word: &str) -> Option<&[String]>;

    /// Get lexicon metadata
    fn metadata(&self) -> LexiconMetadata;

    /// First candidate for `word`, retrying lower-cased
    fn first_translation(&self, word: &str) -> Option<String> {
        self.lookup(word)
            .or_else(|| self.lookup(&word.to_lowercase()))
            .and_then(|candidates| candidates.first())
            .cloned()
    }
}

/// Resolve a lexicon for a language pair (file, network, ...)
#[async_trait]
pub trait LexiconLoader: Send + Sync {
    async fn load(&self, from: Language, to: Language) -> Result<Arc<dyn Lexicon>, LexiconError>;
}

#[derive(Debug, Clone)]
pub struct LexiconMetadata {
    pub name: String,
    pub from: Language,
    pub to: Language,
    pub entry_count: usize,
}
