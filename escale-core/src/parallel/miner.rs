//! Bounded worker-pool fan-out: one task per frequent root item.

use std::borrow::Cow;

use rayon::prelude::*;
use tracing::debug;

use crate::config::{MiningConfig, DEFAULT_WORKERS};
use crate::errors::MiningError;
use crate::prefixspan::{explore, frequent_items, project};
use crate::types::{Database, Item, Itemset, Pattern, Sequence};

/// PrefixSpan with one layer of parallelism at the root.
///
/// Each frequent root item gets a private projected database and one task
/// on a bounded worker pool; recursion inside a task is fully sequential.
/// Tasks share nothing mutable — every working set is derived from the
/// read-only root database and owned by exactly one task — so the only
/// synchronization is the join barrier collecting task results.
#[derive(Debug, Clone)]
pub struct ParallelPrefixSpan {
    min_support: usize,
    workers: usize,
}

impl ParallelPrefixSpan {
    pub fn new(min_support: usize) -> Self {
        Self {
            min_support,
            workers: DEFAULT_WORKERS,
        }
    }

    /// Build a miner from a shared configuration.
    pub fn from_config(config: &MiningConfig) -> Self {
        Self::new(config.min_support).with_workers(config.workers)
    }

    /// Set the worker-pool size. Values below 1 are clamped to 1.
    pub fn with_workers(mut self, workers: usize) -> Self {
        self.workers = workers.max(1);
        self
    }

    /// Mine the same pattern set as the sequential miner.
    ///
    /// Output order across branches depends on scheduling; compare results
    /// as sets. Within one branch, a prefix's pattern still precedes its
    /// descendants'.
    pub fn mine(&self, database: &Database) -> Result<Vec<Pattern>, MiningError> {
        if self.min_support == 0 {
            return Err(MiningError::InvalidMinSupport(self.min_support));
        }
        database.validate()?;

        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(self.workers)
            .build()?;

        let roots = frequent_items(database.sequences(), self.min_support);

        // Derive every branch's private view before dispatch. Roots whose
        // projection is empty have nothing to explore but still contribute
        // their singleton below.
        let branches: Vec<(Item, Vec<Sequence>)> = roots
            .iter()
            .map(|&(item, _)| (item, project(database.sequences(), item)))
            .filter(|(_, view)| !view.is_empty())
            .collect();

        let min_support = self.min_support;
        let branch_results: Vec<Vec<Pattern>> = pool.install(|| {
            branches
                .into_par_iter()
                .map(|(item, view)| {
                    let mut results = Vec::new();
                    explore(
                        Cow::Owned(view),
                        vec![Itemset::singleton(item)],
                        min_support,
                        &mut |_, _, _| true,
                        &mut results,
                    );
                    results
                })
                .collect()
        });

        let mut results: Vec<Pattern> = branch_results.into_iter().flatten().collect();

        // Root singletons join after the fan-in, one per frequent root item.
        results.extend(roots.into_iter().map(|(item, support)| {
            Pattern::new(
                Sequence::new(vec![Itemset::singleton(item)]),
                support,
            )
        }));

        debug!(
            sequences = database.len(),
            min_support = self.min_support,
            workers = self.workers,
            patterns = results.len(),
            "parallel prefixspan mining finished"
        );
        Ok(results)
    }
}
