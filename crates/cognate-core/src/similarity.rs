use crate::preprocess::normalize;
use crate::types::{ScoredPair, TranslationMap};

/// Edit distance where a substitution costs 2 (one delete plus one insert)
pub fn edit_distance(a: &str, b: &str) -> usize {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();

    if a.is_empty() {
        return b.len();
    }
    if b.is_empty() {
        return a.len();
    }

    let mut prev: Vec<usize> = (0..=b.len()).collect();
    let mut curr = vec![0; b.len() + 1];

    for (i, ca) in a.iter().enumerate() {
        curr[0] = i + 1;
        for (j, cb) in b.iter().enumerate() {
            let substitution = if ca == cb { prev[j] } else { prev[j] + 2 };
            curr[j + 1] = substitution.min(prev[j + 1] + 1).min(curr[j] + 1);
        }
        std::mem::swap(&mut prev, &mut curr);
    }

    prev[b.len()]
}

/// Levenshtein ratio `(|a| + |b| - d) / (|a| + |b|)` in [0.0, 1.0].
/// Two empty strings are identical.
pub fn ratio(a: &str, b: &str) -> f64 {
    let total = a.chars().count() + b.chars().count();
    if total == 0 {
        return 1.0;
    }

    let distance = edit_distance(a, b);
    (total - distance) as f64 / total as f64
}

/// Similarity of a word and its translation after ASCII folding
pub fn similarity(word: &str, translation: &str) -> f64 {
    ratio(&normalize(word), &normalize(translation))
}

/// Score every present translation. Misses get no entry.
pub fn score_translations(translations: &TranslationMap) -> Vec<ScoredPair> {
    translations
        .present()
        .map(|(entry, translation)| {
            let score = similarity(&entry.word, translation);
            tracing::debug!("'{}' ~ '{}': {:.3}", entry.word, translation, score);

            ScoredPair {
                word: entry.word.clone(),
                translation: translation.to_string(),
                score,
                rank: entry.rank,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::WordEntry;

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 0.01
    }

    #[test]
    fn test_edit_distance() {
        assert_eq!(edit_distance("", "abc"), 3);
        assert_eq!(edit_distance("abc", "abc"), 0);
        // a substitution is a delete plus an insert
        assert_eq!(edit_distance("a", "b"), 2);
        assert_eq!(edit_distance("haus", "house"), 3);
    }

    #[test]
    fn test_reference_pairs() {
        assert!(close(similarity("haus", "house"), 0.67));
        assert!(close(similarity("auto", "car"), 0.29));
        assert!(close(similarity("buch", "book"), 0.25));
    }

    #[test]
    fn test_identical_after_normalization() {
        assert_eq!(similarity("Café", "cafe"), 1.0);
        assert_eq!(similarity("", ""), 1.0);
        assert!(similarity("cafe", "cafes") < 1.0);
    }

    #[test]
    fn test_disjoint_is_zero() {
        assert_eq!(ratio("abc", "xyz"), 0.0);
    }

    #[test]
    fn test_score_range() {
        let pairs = [
            ("Ärger", "anger"),
            ("москва", "moscow"),
            ("x", "quite a long translation"),
            ("nacht", "night"),
        ];
        for (a, b) in pairs {
            let score = similarity(a, b);
            assert!((0.0..=1.0).contains(&score), "{a}/{b}: {score}");
        }
    }

    #[test]
    fn test_misses_are_not_scored() {
        let map = TranslationMap::new(vec![
            (
                WordEntry {
                    word: "haus".to_string(),
                    rank: 0,
                },
                Some("house".to_string()),
            ),
            (
                WordEntry {
                    word: "doch".to_string(),
                    rank: 1,
                },
                None,
            ),
        ]);

        let scored = score_translations(&map);
        assert_eq!(scored.len(), 1);
        assert_eq!(scored[0].word, "haus");
        assert_eq!(scored[0].rank, 0);
    }
}
