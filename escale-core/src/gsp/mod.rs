//! Level-wise join-based mining (GSP family).

mod join;
mod miner;

pub use miner::Gsp;
