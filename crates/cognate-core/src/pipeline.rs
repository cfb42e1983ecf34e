use std::sync::Arc;
use std::time::Duration;

use cognate_config::Config;
use cognate_translator::Translator;
use futures_util::stream::{self, StreamExt};
use tokio::time::timeout;

use crate::cache::ReadThroughCache;
use crate::error::ConfigurationError;
use crate::language::Language;
use crate::lexicon::{Lexicon, LexiconLoader};
use crate::rank::rank;
use crate::similarity::score_translations;
use crate::source::FrequencySource;
use crate::types::{Flashcard, MeaningMap, ScoredPair, TranslationMap, WordEntry};

pub const MIN_WORD_COUNT: usize = 5;
pub const MAX_WORD_COUNT: usize = 100;

#[derive(Debug, Clone)]
pub struct PipelineOptions {
    /// Word list used when the learned language has none
    pub fallback: Language,
    /// Frequent words considered before truncating to the requested count
    pub buffer_count: usize,
    /// Max in-flight meaning lookups
    pub concurrency: usize,
    /// Per external call
    pub timeout: Duration,
}

impl PipelineOptions {
    pub fn from_config(config: &Config) -> Result<Self, ConfigurationError> {
        Ok(Self {
            fallback: config.source.fallback_lang.parse()?,
            buffer_count: config.source.buffer_count,
            concurrency: config.network.concurrency.max(1),
            timeout: config.network.timeout(),
        })
    }
}

impl Default for PipelineOptions {
    fn default() -> Self {
        Self {
            fallback: Language::English,
            buffer_count: 100,
            concurrency: 8,
            timeout: Duration::from_secs(10),
        }
    }
}

/// (word list, source language, target language)
type PairKey = (Vec<String>, Language, Language);

/// Word source -> lexicon translation -> similarity -> ranking -> meanings.
///
/// Stage results are memoized for the lifetime of the pipeline. Results that
/// came out of a failed or empty external call are not cached, so a transient
/// outage does not stick.
pub struct Pipeline {
    source: Arc<dyn FrequencySource>,
    lexicons: Arc<dyn LexiconLoader>,
    translator: Arc<dyn Translator>,
    options: PipelineOptions,

    words: ReadThroughCache<(Language, Language, usize), Vec<String>>,
    lexicon_pairs: ReadThroughCache<(Language, Language), Arc<dyn Lexicon>>,
    translations: ReadThroughCache<PairKey, TranslationMap>,
    scores: ReadThroughCache<Vec<(String, String)>, Vec<ScoredPair>>,
    meanings: ReadThroughCache<PairKey, MeaningMap>,
}

impl Pipeline {
    pub fn new(
        source: Arc<dyn FrequencySource>,
        lexicons: Arc<dyn LexiconLoader>,
        translator: Arc<dyn Translator>,
        options: PipelineOptions,
    ) -> Self {
        Self {
            source,
            lexicons,
            translator,
            options,
            words: ReadThroughCache::new(),
            lexicon_pairs: ReadThroughCache::new(),
            translations: ReadThroughCache::new(),
            scores: ReadThroughCache::new(),
            meanings: ReadThroughCache::new(),
        }
    }

    /// Same as [`Pipeline::run`] with language codes or names
    pub async fn run_codes(
        &self,
        learn: &str,
        native: &str,
        count: usize,
    ) -> Result<Vec<Flashcard>, ConfigurationError> {
        let learn: Language = learn.parse()?;
        let native: Language = native.parse()?;

        self.run(learn, native, count).await
    }

    /// Build the `count` flashcards of `learn` that look most like `native`.
    ///
    /// External failures only shorten the result; the error is reserved for
    /// an out-of-range count.
    pub async fn run(
        &self,
        learn: Language,
        native: Language,
        count: usize,
    ) -> Result<Vec<Flashcard>, ConfigurationError> {
        check_count(count)?;
        tracing::info!("Building {count} flashcards {learn} -> {native}");

        let buffer = self.options.buffer_count.max(count);
        let words = self.top_words(learn, buffer).await;

        let translations = self.translate_words(&words, learn, native).await;
        if translations.is_empty() {
            tracing::warn!("No words to rank for {learn} -> {native}");
            return Ok(Vec::new());
        }
        let scores = self.similarity_scores(&translations).await;
        let ranked = rank(scores.to_vec(), count);

        let selected: Vec<String> = ranked.iter().map(|pair| pair.word.clone()).collect();
        let meanings = self.meanings(&selected, learn, native).await;

        let cards: Vec<Flashcard> = ranked
            .into_iter()
            .map(|pair| Flashcard::new(pair, &meanings))
            .collect();

        tracing::info!("Built {} flashcards", cards.len());
        Ok(cards)
    }

    /// Most frequent words of `language`, falling back to the configured
    /// language when the primary list is empty. Empty when both are.
    pub async fn top_words(&self, language: Language, count: usize) -> Arc<Vec<String>> {
        let fallback = self.options.fallback;
        let key = (language, fallback, count);

        if let Some(words) = self.words.get(&key).await {
            return words;
        }

        let mut words = self.fetch_words(language, count).await;

        if words.is_empty() && language != fallback {
            tracing::warn!("No word list for {language}, falling back to {fallback}");
            words = self.fetch_words(fallback, count).await;
        }

        if words.is_empty() {
            tracing::warn!("No word list for {language} or {fallback}");
            return Arc::new(words);
        }

        tracing::info!("Fetched {} frequent words", words.len());
        self.words.insert(key, words).await
    }

    async fn fetch_words(&self, language: Language, count: usize) -> Vec<String> {
        match timeout(self.options.timeout, self.source.fetch(language, count)).await {
            Ok(Ok(mut words)) => {
                words.truncate(count);
                words
            }
            Ok(Err(e)) => {
                tracing::warn!("Word list for {language} unavailable: {e}");
                Vec::new()
            }
            Err(_) => {
                tracing::warn!("Word list for {language} timed out");
                Vec::new()
            }
        }
    }

    async fn lexicon(&self, from: Language, to: Language) -> Option<Arc<dyn Lexicon>> {
        if let Some(lexicon) = self.lexicon_pairs.get(&(from, to)).await {
            return Some(Arc::clone(&*lexicon));
        }

        match timeout(self.options.timeout, self.lexicons.load(from, to)).await {
            Ok(Ok(lexicon)) => {
                let metadata = lexicon.metadata();
                tracing::info!(
                    "Loaded lexicon {} ({} -> {}, {} entries)",
                    metadata.name,
                    metadata.from,
                    metadata.to,
                    metadata.entry_count
                );
                let stored = self.lexicon_pairs.insert((from, to), lexicon).await;
                Some(Arc::clone(&*stored))
            }
            Ok(Err(e)) => {
                tracing::warn!("Lexicon {from} -> {to} unavailable: {e}");
                None
            }
            Err(_) => {
                tracing::warn!("Lexicon {from} -> {to} timed out");
                None
            }
        }
    }

    /// First lexicon candidate per word. Misses are recorded as `None`.
    pub async fn translate_words(
        &self,
        words: &[String],
        from: Language,
        to: Language,
    ) -> Arc<TranslationMap> {
        let key = (words.to_vec(), from, to);

        if let Some(translations) = self.translations.get(&key).await {
            return translations;
        }

        let lexicon = self.lexicon(from, to).await;

        let entries = WordEntry::from_words(words)
            .into_iter()
            .map(|entry| {
                let translation = lexicon
                    .as_ref()
                    .and_then(|lexicon| lexicon.first_translation(&entry.word));
                if translation.is_none() {
                    tracing::debug!("No translation for '{}'", entry.word);
                }
                (entry, translation)
            })
            .collect();

        let translations = TranslationMap::new(entries);
        tracing::info!(
            "Translated {}/{} words {from} -> {to}",
            translations.present_len(),
            translations.len()
        );

        if lexicon.is_none() {
            return Arc::new(translations);
        }

        self.translations.insert(key, translations).await
    }

    /// Levenshtein ratio for every present translation
    pub async fn similarity_scores(&self, translations: &TranslationMap) -> Arc<Vec<ScoredPair>> {
        let key: Vec<(String, String)> = translations
            .present()
            .map(|(entry, translation)| (entry.word.clone(), translation.to_string()))
            .collect();

        self.scores
            .get_or_insert_with(key, || async { score_translations(translations) })
            .await
    }

    /// Display meanings from the general translation service
    pub async fn meanings(&self, words: &[String], from: Language, to: Language) -> Arc<MeaningMap> {
        let key = (words.to_vec(), from, to);

        if let Some(meanings) = self.meanings.get(&key).await {
            return meanings;
        }

        let results: Vec<(String, Option<String>)> = stream::iter(words.iter().cloned())
            .map(|word| async move {
                let meaning = self.meaning(&word, from, to).await;
                (word, meaning)
            })
            .buffer_unordered(self.options.concurrency.max(1))
            .collect()
            .await;

        let complete = results.iter().all(|(_, meaning)| meaning.is_some());
        let meanings: MeaningMap = results.into_iter().collect();

        if !complete {
            return Arc::new(meanings);
        }

        self.meanings.insert(key, meanings).await
    }

    async fn meaning(&self, word: &str, from: Language, to: Language) -> Option<String> {
        let request = self
            .translator
            .translate(word, from.code().to_string(), to.code().to_string());

        match timeout(self.options.timeout, request).await {
            Ok(Ok(translation)) => Some(translation.text),
            Ok(Err(e)) => {
                tracing::warn!("Meaning lookup failed for '{word}': {e}");
                None
            }
            Err(_) => {
                tracing::warn!("Meaning lookup timed out for '{word}'");
                None
            }
        }
    }
}

fn check_count(count: usize) -> Result<(), ConfigurationError> {
    if (MIN_WORD_COUNT..=MAX_WORD_COUNT).contains(&count) {
        Ok(())
    } else {
        Err(ConfigurationError::CountOutOfRange {
            count,
            min: MIN_WORD_COUNT,
            max: MAX_WORD_COUNT,
        })
    }
}
