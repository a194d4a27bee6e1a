//! escale-core: sequential pattern mining over port-call itineraries.
//!
//! Mines frequent and closed ordered patterns from per-vessel port-call
//! sequences under a minimum support threshold:
//! - Containment: shared subsequence embedding and support counting
//! - PrefixSpan: projection-based exhaustive mining
//! - CloSpan: the PrefixSpan scaffold with a closure gate
//! - GSP: independent level-wise join-based mining
//! - Parallel: bounded worker-pool fan-out over PrefixSpan root branches
//! - Ingest: port-name encoding, JSON voyage loading, pattern filtering
//!   and decoding

pub mod clospan;
pub mod config;
pub mod containment;
pub mod errors;
pub mod gsp;
pub mod ingest;
pub mod parallel;
pub mod prefixspan;
pub mod types;

// Re-exports for convenience
pub use clospan::CloSpan;
pub use config::{MiningConfig, DEFAULT_WORKERS};
pub use containment::{count_support, is_subsequence};
pub use errors::{IngestError, MiningError};
pub use gsp::Gsp;
pub use ingest::{
    filter_informative, parse_records, ItineraryBuilder, PortRegistry, VesselKey, VoyageRecord,
    PLACEHOLDER_PORT,
};
pub use parallel::ParallelPrefixSpan;
pub use prefixspan::PrefixSpan;
pub use types::{Database, Item, Itemset, Pattern, Sequence};
