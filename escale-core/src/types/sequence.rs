//! Items, itemsets, sequences, databases, and mined patterns.
//!
//! Itemsets are unordered; sequence order is temporal and significant.
//! The non-empty-itemset invariant is enforced at miner entry: an empty
//! itemset never enters or survives the mining pipeline.

use std::collections::BTreeSet;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::errors::MiningError;

/// Encoded port identifier.
///
/// Wrapping the raw integer keeps a port ID from being confused with a
/// support count or a sequence index.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub struct Item(pub u32);

impl Item {
    /// Create an item from its raw encoded value.
    pub fn new(id: u32) -> Self {
        Self(id)
    }

    /// The raw encoded value.
    pub fn value(self) -> u32 {
        self.0
    }
}

impl fmt::Display for Item {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// An unordered set of items observed together.
///
/// Backed by a `BTreeSet` so equality and hashing are content-based and
/// iteration is always ascending by item value.
#[derive(
    Debug, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub struct Itemset(BTreeSet<Item>);

impl Itemset {
    /// Build an itemset from any iterator of items; duplicates collapse.
    pub fn new(items: impl IntoIterator<Item = Item>) -> Self {
        Self(items.into_iter().collect())
    }

    /// Itemset holding exactly one item.
    pub fn singleton(item: Item) -> Self {
        Self(BTreeSet::from([item]))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn contains(&self, item: Item) -> bool {
        self.0.contains(&item)
    }

    /// True when every item of `other` is also present in `self`.
    pub fn is_superset(&self, other: &Itemset) -> bool {
        self.0.is_superset(&other.0)
    }

    /// Copy of `self` with `item` removed.
    pub fn without(&self, item: Item) -> Itemset {
        let mut items = self.0.clone();
        items.remove(&item);
        Itemset(items)
    }

    /// Items in ascending order.
    pub fn iter(&self) -> impl Iterator<Item = Item> + '_ {
        self.0.iter().copied()
    }
}

impl FromIterator<Item> for Itemset {
    fn from_iter<I: IntoIterator<Item = Item>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

/// An ordered list of itemsets; one entity's events in temporal order.
#[derive(
    Debug, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub struct Sequence {
    itemsets: Vec<Itemset>,
}

impl Sequence {
    pub fn new(itemsets: Vec<Itemset>) -> Self {
        Self { itemsets }
    }

    pub fn itemsets(&self) -> &[Itemset] {
        &self.itemsets
    }

    pub fn into_itemsets(self) -> Vec<Itemset> {
        self.itemsets
    }

    /// Number of itemsets (pattern length).
    pub fn len(&self) -> usize {
        self.itemsets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.itemsets.is_empty()
    }

    pub fn last(&self) -> Option<&Itemset> {
        self.itemsets.last()
    }

    /// Copy of `self` with one more trailing itemset.
    pub fn with_itemset(&self, itemset: Itemset) -> Sequence {
        let mut itemsets = Vec::with_capacity(self.itemsets.len() + 1);
        itemsets.extend_from_slice(&self.itemsets);
        itemsets.push(itemset);
        Sequence { itemsets }
    }

    /// Distinct items across all itemsets, ascending.
    ///
    /// An item occurring in several itemsets of this sequence appears once.
    pub fn distinct_items(&self) -> BTreeSet<Item> {
        self.itemsets
            .iter()
            .flat_map(|itemset| itemset.iter())
            .collect()
    }
}

/// A read-only collection of sequences, one per tracked vessel.
///
/// Constructed once by the ingestion layer and handed to a miner; never
/// mutated by mining.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Database {
    sequences: Vec<Sequence>,
}

impl Database {
    pub fn new(sequences: Vec<Sequence>) -> Self {
        Self { sequences }
    }

    pub fn sequences(&self) -> &[Sequence] {
        &self.sequences
    }

    /// Number of tracked entities.
    pub fn len(&self) -> usize {
        self.sequences.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sequences.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Sequence> {
        self.sequences.iter()
    }

    /// Fail fast on input that violates the non-empty-itemset invariant.
    pub(crate) fn validate(&self) -> Result<(), MiningError> {
        for (idx, sequence) in self.sequences.iter().enumerate() {
            if sequence.itemsets().iter().any(Itemset::is_empty) {
                return Err(MiningError::EmptyItemset { sequence: idx });
            }
        }
        Ok(())
    }
}

impl From<Vec<Sequence>> for Database {
    fn from(sequences: Vec<Sequence>) -> Self {
        Self::new(sequences)
    }
}

/// A mined sequence together with its entity-level support.
///
/// Support counts supporting vessels, not occurrences. Immutable once
/// emitted.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Pattern {
    pub sequence: Sequence,
    pub support: usize,
}

impl Pattern {
    pub fn new(sequence: Sequence, support: usize) -> Self {
        Self { sequence, support }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_itemset_identity_is_content_based() {
        let a = Itemset::new([Item::new(2), Item::new(1)]);
        let b = Itemset::new([Item::new(1), Item::new(2), Item::new(2)]);
        assert_eq!(a, b);
        assert_eq!(a.len(), 2);
    }

    #[test]
    fn test_itemset_iteration_is_ascending() {
        let set = Itemset::new([Item::new(9), Item::new(3), Item::new(7)]);
        let values: Vec<u32> = set.iter().map(Item::value).collect();
        assert_eq!(values, vec![3, 7, 9]);
    }

    #[test]
    fn test_itemset_without() {
        let set = Itemset::new([Item::new(1), Item::new(2)]);
        let rest = set.without(Item::new(1));
        assert_eq!(rest, Itemset::singleton(Item::new(2)));
        assert!(set.contains(Item::new(1)), "without must not mutate self");
    }

    #[test]
    fn test_superset() {
        let big = Itemset::new([Item::new(1), Item::new(2), Item::new(3)]);
        let small = Itemset::new([Item::new(1), Item::new(3)]);
        assert!(big.is_superset(&small));
        assert!(!small.is_superset(&big));
        assert!(big.is_superset(&big));
    }

    #[test]
    fn test_sequence_distinct_items_counts_once() {
        let sequence = Sequence::new(vec![
            Itemset::singleton(Item::new(4)),
            Itemset::new([Item::new(4), Item::new(2)]),
        ]);
        let values: Vec<u32> = sequence.distinct_items().iter().map(|i| i.value()).collect();
        assert_eq!(values, vec![2, 4]);
    }

    #[test]
    fn test_database_validate_rejects_empty_itemset() {
        let db = Database::new(vec![Sequence::new(vec![
            Itemset::singleton(Item::new(1)),
            Itemset::default(),
        ])]);
        assert!(db.validate().is_err());
    }

    #[test]
    fn test_database_validate_accepts_empty_sequence() {
        let db = Database::new(vec![Sequence::default()]);
        assert!(db.validate().is_ok());
    }
}
