use std::collections::HashMap;

use serde::Serialize;

/// Shown on a flashcard when the meaning lookup failed
pub const NO_TRANSLATION: &str = "[No translation]";

/// A word from the frequency list. `rank` 0 is the most frequent.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct WordEntry {
    pub word: String,
    pub rank: usize,
}

impl WordEntry {
    pub fn from_words(words: &[String]) -> Vec<WordEntry> {
        words
            .iter()
            .enumerate()
            .map(|(rank, word)| WordEntry {
                word: word.clone(),
                rank,
            })
            .collect()
    }
}

/// Source word -> first lexicon candidate, `None` when the lookup missed.
/// Iterates in frequency order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TranslationMap {
    entries: Vec<(WordEntry, Option<String>)>,
}

impl TranslationMap {
    pub fn new(entries: Vec<(WordEntry, Option<String>)>) -> Self {
        Self { entries }
    }

    /// `None` both for unknown words and for recorded misses
    pub fn translation(&self, word: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(entry, _)| entry.word == word)
            .and_then(|(_, translation)| translation.as_deref())
    }

    /// Entries with a present translation, frequency order
    pub fn present(&self) -> impl Iterator<Item = (&WordEntry, &str)> {
        self.entries
            .iter()
            .filter_map(|(entry, translation)| translation.as_deref().map(|t| (entry, t)))
    }

    pub fn present_len(&self) -> usize {
        self.present().count()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoredPair {
    pub word: String,
    pub translation: String,
    /// Levenshtein ratio in [0.0, 1.0]
    pub score: f64,
    /// Frequency rank, used as tie-break
    pub rank: usize,
}

/// Scored pairs, best first, truncated to the requested count
pub type RankedList = Vec<ScoredPair>;

/// Display meanings for the selected words, `None` when the service failed
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MeaningMap {
    meanings: HashMap<String, Option<String>>,
}

impl MeaningMap {
    fn get(&self, word: &str) -> Option<&str> {
        self.meanings.get(word).and_then(|m| m.as_deref())
    }

    /// Meaning or the "no translation" sentinel
    pub fn display(&self, word: &str) -> &str {
        self.get(word).unwrap_or(NO_TRANSLATION)
    }
}

impl FromIterator<(String, Option<String>)> for MeaningMap {
    fn from_iter<I: IntoIterator<Item = (String, Option<String>)>>(iter: I) -> Self {
        Self {
            meanings: iter.into_iter().collect(),
        }
    }
}

/// One learner-facing card, the pipeline's output unit
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Flashcard {
    pub word: String,
    pub translation: String,
    pub score: f64,
    pub meaning: String,
    pub exact_match: bool,
}

impl Flashcard {
    pub fn new(pair: ScoredPair, meanings: &MeaningMap) -> Self {
        let meaning = meanings.display(&pair.word).to_string();

        Self {
            exact_match: pair.score == 1.0,
            word: pair.word,
            translation: pair.translation,
            score: pair.score,
            meaning,
        }
    }
}
