//! The PrefixSpan scaffold with a closure gate.

use std::borrow::Cow;

use tracing::debug;

use crate::config::MiningConfig;
use crate::containment::{count_support, is_subsequence};
use crate::errors::MiningError;
use crate::prefixspan::explore;
use crate::types::{Database, Pattern, Sequence};

/// Closed-pattern miner of the CloSpan family.
///
/// Runs the identical prefix/projection walk of [`PrefixSpan`], but a
/// candidate that fails the closure test is neither emitted nor used as a
/// prefix for further extension, trading exhaustive closure-correctness
/// for a smaller search.
///
/// [`PrefixSpan`]: crate::prefixspan::PrefixSpan
#[derive(Debug, Clone)]
pub struct CloSpan {
    min_support: usize,
}

impl CloSpan {
    pub fn new(min_support: usize) -> Self {
        Self { min_support }
    }

    /// Build a miner from a shared configuration.
    pub fn from_config(config: &MiningConfig) -> Self {
        Self::new(config.min_support)
    }

    /// Mine patterns that pass the closure gate.
    ///
    /// The output is always a subset of what [`PrefixSpan`] mines for the
    /// same database and threshold.
    ///
    /// [`PrefixSpan`]: crate::prefixspan::PrefixSpan
    pub fn mine(&self, database: &Database) -> Result<Vec<Pattern>, MiningError> {
        if self.min_support == 0 {
            return Err(MiningError::InvalidMinSupport(self.min_support));
        }
        database.validate()?;

        let mut results = Vec::new();
        explore(
            Cow::Borrowed(database.sequences()),
            Vec::new(),
            self.min_support,
            &mut |pattern, support, view| is_closed(pattern, view, support),
            &mut results,
        );

        debug!(
            sequences = database.len(),
            min_support = self.min_support,
            patterns = results.len(),
            "clospan mining finished"
        );
        Ok(results)
    }
}

/// Sequence-local closure test.
///
/// A candidate is rejected when some sequence of the current view contains
/// it and, read as a pattern itself, matches exactly `support` sequences
/// of that view: a super-pattern of equal support is then already in hand.
///
/// Narrower than the bidirectional extension checks of textbook CloSpan:
/// the test only consults sequences of the current view.
fn is_closed(pattern: &Sequence, view: &[Sequence], support: usize) -> bool {
    view.iter()
        .filter(|sequence| is_subsequence(pattern, sequence))
        .all(|sequence| count_support(sequence, view) != support)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Item, Itemset};

    fn seq(itemsets: &[&[u32]]) -> Sequence {
        Sequence::new(
            itemsets
                .iter()
                .map(|items| Itemset::new(items.iter().map(|&i| Item::new(i))))
                .collect(),
        )
    }

    #[test]
    fn test_is_closed_rejects_equal_support_superpattern() {
        // Every sequence containing <{1}> is <{1},{2}> itself, with the
        // same support: <{1}> is not closed in this view.
        let view = vec![seq(&[&[1], &[2]]), seq(&[&[1], &[2]])];
        assert!(!is_closed(&seq(&[&[1]]), &view, 2));
    }

    #[test]
    fn test_is_closed_keeps_distinct_support() {
        let view = vec![seq(&[&[1], &[2]]), seq(&[&[1], &[3]]), seq(&[&[1], &[2]])];
        // <{1}> has support 3; no containing sequence reaches 3.
        assert!(is_closed(&seq(&[&[1]]), &view, 3));
    }

    #[test]
    fn test_uniform_database_collapses_entirely() {
        // Both root candidates are absorbed by the identical sequences, so
        // pruning kills both branches before anything is emitted.
        let db = Database::new(vec![seq(&[&[1], &[2]]), seq(&[&[1], &[2]])]);
        let patterns = CloSpan::new(2).mine(&db).unwrap();
        assert!(patterns.is_empty());
    }

    #[test]
    fn test_mine_emits_closed_patterns() {
        let db = Database::new(vec![
            seq(&[&[1], &[2]]),
            seq(&[&[1], &[3]]),
            seq(&[&[1], &[2]]),
        ]);
        let patterns = CloSpan::new(2).mine(&db).unwrap();

        let expected = [(seq(&[&[1]]), 3), (seq(&[&[1], &[2]]), 2)];
        assert_eq!(patterns.len(), expected.len());
        for (sequence, support) in expected {
            assert!(patterns
                .iter()
                .any(|p| p.sequence == sequence && p.support == support));
        }
    }

    #[test]
    fn test_zero_min_support_rejected() {
        let db = Database::new(vec![seq(&[&[1]])]);
        assert!(matches!(
            CloSpan::new(0).mine(&db),
            Err(MiningError::InvalidMinSupport(0))
        ));
    }
}
