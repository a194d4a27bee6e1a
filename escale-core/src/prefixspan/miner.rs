//! The projection walker and the exhaustive PrefixSpan miner.

use std::borrow::Cow;

use rustc_hash::FxHashMap;
use tracing::debug;

use crate::config::MiningConfig;
use crate::errors::MiningError;
use crate::types::{Database, Item, Itemset, Pattern, Sequence};

use super::projection::project;

/// Frequent-item census of a database view.
///
/// An item occurring in several itemsets of one sequence counts once for
/// that sequence. The result is sorted ascending by item value: the
/// canonical enumeration order that makes output reproducible.
pub(crate) fn frequent_items(view: &[Sequence], min_support: usize) -> Vec<(Item, usize)> {
    let mut counts: FxHashMap<Item, usize> = FxHashMap::default();
    for sequence in view {
        for item in sequence.distinct_items() {
            *counts.entry(item).or_insert(0) += 1;
        }
    }

    let mut frequent: Vec<(Item, usize)> = counts
        .into_iter()
        .filter(|&(_, count)| count >= min_support)
        .collect();
    frequent.sort_unstable_by_key(|&(item, _)| item);
    frequent
}

/// One unit of pending exploration: a projected view plus the prefix that
/// produced it. The view is owned by its frame and dropped with it.
struct Frame<'a> {
    view: Cow<'a, [Sequence]>,
    prefix: Vec<Itemset>,
}

/// Depth-first walk of the pattern space rooted at `prefix`.
///
/// An explicit stack replaces native recursion, so exploration depth is
/// bounded by the length of the longest frequent pattern rather than by
/// the thread stack. Each popped frame enumerates its frequent items in
/// canonical order; every admitted extension is emitted before any frame
/// derived from it is processed, so a prefix's pattern always precedes its
/// descendants' patterns. The gate decides whether a candidate is emitted
/// and extended; rejecting prunes the whole branch below it.
///
/// Terminates because every child frame's candidate alphabet is
/// support-filtered from a strictly smaller view.
pub(crate) fn explore(
    view: Cow<'_, [Sequence]>,
    prefix: Vec<Itemset>,
    min_support: usize,
    admit: &mut dyn FnMut(&Sequence, usize, &[Sequence]) -> bool,
    results: &mut Vec<Pattern>,
) {
    let mut stack = vec![Frame { view, prefix }];

    while let Some(Frame { view, prefix }) = stack.pop() {
        let mut children = Vec::new();

        for (item, support) in frequent_items(&view, min_support) {
            let mut extended = prefix.clone();
            extended.push(Itemset::singleton(item));
            let pattern = Sequence::new(extended);

            if !admit(&pattern, support, &view) {
                continue;
            }
            results.push(Pattern::new(pattern.clone(), support));

            let projected = project(&view, item);
            if !projected.is_empty() {
                children.push(Frame {
                    view: Cow::Owned(projected),
                    prefix: pattern.into_itemsets(),
                });
            }
        }

        // Reverse push keeps sibling branches in canonical item order.
        while let Some(child) = children.pop() {
            stack.push(child);
        }
    }
}

/// Exhaustive frequent-pattern miner of the PrefixSpan family.
///
/// Grows prefixes of singleton itemsets by projection: for each frequent
/// item of the current view, emit the extended prefix with its support,
/// then descend into the view projected on that item.
#[derive(Debug, Clone)]
pub struct PrefixSpan {
    min_support: usize,
}

impl PrefixSpan {
    pub fn new(min_support: usize) -> Self {
        Self { min_support }
    }

    /// Build a miner from a shared configuration.
    pub fn from_config(config: &MiningConfig) -> Self {
        Self::new(config.min_support)
    }

    /// Mine every pattern with support at or above the configured minimum.
    ///
    /// Within one branch the pattern for a prefix is emitted before any
    /// pattern extending it.
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
            &mut |_, _, _| true,
            &mut results,
        );

        debug!(
            sequences = database.len(),
            min_support = self.min_support,
            patterns = results.len(),
            "prefixspan mining finished"
        );
        Ok(results)
    }
}
