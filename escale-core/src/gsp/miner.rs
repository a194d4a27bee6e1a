//! Breadth-first level-wise mining.

use std::collections::BTreeSet;

use tracing::debug;

use crate::config::MiningConfig;
use crate::containment::count_support;
use crate::errors::MiningError;
use crate::types::{Database, Item, Itemset, Pattern, Sequence};

use super::join::generate_candidates;

/// Level-wise miner of the GSP family.
///
/// An algorithm family independent from the projection miners, useful as a
/// cross-check: candidates of length k+1 are joined from the frequent
/// patterns of length k, and each level is support-filtered against the
/// full database.
#[derive(Debug, Clone)]
pub struct Gsp {
    min_support: usize,
}

impl Gsp {
    pub fn new(min_support: usize) -> Self {
        Self { min_support }
    }

    /// Build a miner from a shared configuration.
    pub fn from_config(config: &MiningConfig) -> Self {
        Self::new(config.min_support)
    }

    /// Mine frequent patterns level by level until a level yields nothing.
    pub fn mine(&self, database: &Database) -> Result<Vec<Pattern>, MiningError> {
        if self.min_support == 0 {
            return Err(MiningError::InvalidMinSupport(self.min_support));
        }
        database.validate()?;

        // k = 1 seed: one singleton per distinct item, ascending by item
        // value for deterministic enumeration.
        let mut items: BTreeSet<Item> = BTreeSet::new();
        for sequence in database.iter() {
            items.extend(sequence.distinct_items());
        }
        let mut candidates: Vec<Sequence> = items
            .into_iter()
            .map(|item| Sequence::new(vec![Itemset::singleton(item)]))
            .collect();

        let mut results: Vec<Pattern> = Vec::new();

        while !candidates.is_empty() {
            let frequent: Vec<Pattern> = candidates
                .iter()
                .filter_map(|candidate| {
                    let support = count_support(candidate, database.sequences());
                    (support >= self.min_support)
                        .then(|| Pattern::new(candidate.clone(), support))
                })
                .collect();

            if frequent.is_empty() {
                break;
            }

            let survivors: Vec<Sequence> = frequent
                .iter()
                .map(|pattern| pattern.sequence.clone())
                .collect();
            results.extend(frequent);
            candidates = generate_candidates(&survivors);
        }

        debug!(
            sequences = database.len(),
            min_support = self.min_support,
            patterns = results.len(),
            "gsp mining finished"
        );
        Ok(results)
    }
}
