//! Port-name interning.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::types::{Item, Pattern};

/// Name standing in for a missing departure or arrival port.
pub const PLACEHOLDER_PORT: &str = "FICTIF";

/// Bidirectional mapping between port names and dense item IDs.
///
/// ID 1 is reserved for the placeholder port; real ports are numbered from
/// 2 upward in first-seen order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PortRegistry {
    by_name: FxHashMap<String, Item>,
    names: Vec<String>,
}

impl PortRegistry {
    /// Registry containing only the placeholder port.
    pub fn new() -> Self {
        let mut registry = Self {
            by_name: FxHashMap::default(),
            names: Vec::new(),
        };
        registry.intern(PLACEHOLDER_PORT);
        registry
    }

    /// Item for `name`, interning it on first sight.
    pub fn intern(&mut self, name: &str) -> Item {
        if let Some(&item) = self.by_name.get(name) {
            return item;
        }
        self.names.push(name.to_string());
        let item = Item::new(self.names.len() as u32);
        self.by_name.insert(name.to_string(), item);
        item
    }

    /// Item for `name`, if already known.
    pub fn resolve(&self, name: &str) -> Option<Item> {
        self.by_name.get(name).copied()
    }

    /// Port name for `item`, if known.
    pub fn name(&self, item: Item) -> Option<&str> {
        let index = (item.value() as usize).checked_sub(1)?;
        self.names.get(index).map(String::as_str)
    }

    /// Item standing in for a missing port.
    pub fn placeholder(&self) -> Item {
        Item::new(1)
    }

    /// Number of known ports, placeholder included.
    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Render a mined pattern with port names.
    ///
    /// IDs absent from the registry fall back to `Unknown(id)`, e.g.
    /// `{ROTTERDAM} -> {HAMBURG, ANTWERP} #SUP:3`.
    pub fn decode_pattern(&self, pattern: &Pattern) -> String {
        let itemsets: Vec<String> = pattern
            .sequence
            .itemsets()
            .iter()
            .map(|itemset| {
                let names: Vec<String> = itemset
                    .iter()
                    .map(|item| match self.name(item) {
                        Some(name) => name.to_string(),
                        None => format!("Unknown({})", item.value()),
                    })
                    .collect();
                format!("{{{}}}", names.join(", "))
            })
            .collect();
        format!("{} #SUP:{}", itemsets.join(" -> "), pattern.support)
    }
}

impl Default for PortRegistry {
    fn default() -> Self {
        Self::new()
    }
}
