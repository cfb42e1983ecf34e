use std::cmp::Ordering;

use crate::types::{RankedList, ScoredPair};

/// Best score first; equal scores keep frequency order so runs are reproducible.
pub fn rank(mut pairs: Vec<ScoredPair>, count: usize) -> RankedList {
    pairs.sort_by(|a, b| {
        b.score
            .partial_cmp(&a.score)
            .unwrap_or(Ordering::Equal)
            .then_with(|| a.rank.cmp(&b.rank))
    });
    pairs.truncate(count);
    pairs
}
