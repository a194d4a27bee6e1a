//! Projection-based exhaustive mining (PrefixSpan family).

mod miner;
mod projection;

pub use miner::PrefixSpan;

pub(crate) use miner::{explore, frequent_items};
pub(crate) use projection::project;
