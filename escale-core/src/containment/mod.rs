//! Shared containment primitives: subsequence embedding and support
//! counting. Every miner family and the closure test sit on these two
//! functions.

use crate::types::Sequence;

/// Decide whether `pattern`'s itemsets embed into `sequence`'s in order.
///
/// A single cursor scans `sequence` left to right; each pattern itemset
/// consumes through the first unconsumed sequence itemset that is a
/// superset of it. Superset matching is monotone in position — if any
/// embedding exists, the leftmost one does too — so the greedy scan is
/// sound and complete without backtracking. O(|pattern| + |sequence|)
/// itemset comparisons.
pub fn is_subsequence(pattern: &Sequence, sequence: &Sequence) -> bool {
    let mut cursor = sequence.itemsets().iter();
    pattern
        .itemsets()
        .iter()
        .all(|wanted| cursor.any(|candidate| candidate.is_superset(wanted)))
}

/// Number of sequences that contain `pattern`.
///
/// Entity-level support: a sequence counts once no matter how many
/// embeddings it admits.
pub fn count_support(pattern: &Sequence, sequences: &[Sequence]) -> usize {
    sequences
        .iter()
        .filter(|sequence| is_subsequence(pattern, sequence))
        .count()
}
