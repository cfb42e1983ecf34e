use std::collections::HashMap;
use std::path::Path;

use cognate_core::error::LexiconError;
use cognate_core::language::Language;
use cognate_core::lexicon::{Lexicon, LexiconMetadata};

/// MUSE bilingual dictionary: one `<source> <target>` pair per line.
/// A word with several senses spans several lines, most relevant first.
#[derive(Debug, Clone)]
pub struct MuseLexicon {
    from: Language,
    to: Language,
    entries: HashMap<String, Vec<String>>,
}

impl MuseLexicon {
    pub fn new(from: Language, to: Language) -> Self {
        Self {
            from,
            to,
            entries: HashMap::new(),
        }
    }

    /// Parse dictionary text. Malformed lines are skipped.
    pub fn from_text(from: Language, to: Language, text: &str) -> Self {
        let mut lexicon = Self::new(from, to);

        for line in text.lines() {
            let mut parts = line.split_whitespace();
            let (Some(source), Some(target)) = (parts.next(), parts.next()) else {
                continue;
            };

            let candidates = lexicon.entries.entry(source.to_string()).or_default();
            if !candidates.iter().any(|c| c == target) {
                candidates.push(target.to_string());
            }
        }

        lexicon
    }

    pub fn load_from_file(from: Language, to: Language, path: &Path) -> Result<Self, LexiconError> {
        tracing::info!("Loading lexicon from file: {}", path.display());
        let text = std::fs::read_to_string(path)?;
        let lexicon = Self::from_text(from, to, &text);
        tracing::info!("Loaded {} lexicon entries from file", lexicon.entry_count());
        Ok(lexicon)
    }

    pub fn entry_count(&self) -> usize {
        self.entries.len()
    }

    /// Merge another lexicon into this one. Candidates from `other` are
    /// appended after the existing ones.
    pub fn merge(mut self, other: MuseLexicon) -> Self {
        for (word, candidates) in other.entries {
            let existing = self.entries.entry(word).or_default();
            for candidate in candidates {
                if !existing.contains(&candidate) {
                    existing.push(candidate);
                }
            }
        }

        self
    }
}

impl MuseLexicon {
    /// Chain `first` (A -> pivot) and `second` (pivot -> B) into A -> B.
    /// Only the first candidate is followed at each hop.
    pub fn pivot(first: &MuseLexicon, second: &MuseLexicon) -> Self {
        let mut lexicon = Self::new(first.from, second.to);

        for (word, candidates) in &first.entries {
            let Some(target) = candidates
                .first()
                .and_then(|middle| second.first_translation(middle))
            else {
                continue;
            };
            lexicon.entries.insert(word.clone(), vec![target]);
        }

        lexicon
    }
}

impl Lexicon for MuseLexicon {
    fn lookup(&self, word: &str) -> Option<&[String]> {
        self.entries.get(word).map(Vec::as_slice)
    }

    fn metadata(&self) -> LexiconMetadata {
        LexiconMetadata {
            name: format!("MUSE {}-{}", self.from, self.to),
            from: self.from,
            to: self.to,
            entry_count: self.entries.len(),
        }
    }
}
