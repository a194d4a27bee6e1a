//! Value types shared by every miner.

mod sequence;

pub use sequence::{Database, Item, Itemset, Pattern, Sequence};
