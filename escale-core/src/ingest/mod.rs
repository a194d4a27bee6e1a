//! Surrounding collaborators: port encoding, voyage ingestion, pattern
//! filtering and decoding.
//!
//! Nothing here mines. These produce the [`Database`] the miners consume
//! and turn the [`Pattern`]s they emit into reportable port-name form.
//!
//! [`Database`]: crate::types::Database
//! [`Pattern`]: crate::types::Pattern

mod filter;
mod ports;
mod voyages;

pub use filter::filter_informative;
pub use ports::{PortRegistry, PLACEHOLDER_PORT};
pub use voyages::{parse_records, ItineraryBuilder, VesselKey, VoyageRecord};
