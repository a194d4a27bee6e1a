//! Root-level parallel fan-out over the projection miner.

mod miner;

pub use miner::ParallelPrefixSpan;
