//! Closed-pattern mining (CloSpan family).

mod miner;

pub use miner::CloSpan;
