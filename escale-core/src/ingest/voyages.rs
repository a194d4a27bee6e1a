//! Voyage ingestion: JSON leg records to a mining database.
//!
//! A vessel's legs are ordered by arrival date and walked into one long
//! port-call itinerary with consecutive duplicates collapsed, then cut
//! into sequences whenever the accumulated voyage duration crosses a
//! cutoff. The cutoff can be fixed by the caller or derived from the data.

use chrono::NaiveDateTime;
use serde::Deserialize;
use tracing::debug;

use crate::errors::IngestError;
use crate::types::{Database, Item, Itemset, Sequence};

use super::ports::{PortRegistry, PLACEHOLDER_PORT};

/// Timestamp layout used by the voyage exports.
const TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

/// Date substituted for legs whose port, and therefore timestamp, is
/// missing.
const REFERENCE_DATE: &str = "2022-01-01T00:00:00";

/// Cutoff used when fewer than two positive durations are available.
const DEFAULT_CUTOFF_DAYS: f64 = 10.0;

/// Ceiling on the derived cutoff.
const MAX_CUTOFF_DAYS: f64 = 50.0;

/// One voyage leg as exported upstream.
#[derive(Debug, Clone, Deserialize)]
pub struct VoyageRecord {
    #[serde(default)]
    pub imo: Option<u64>,
    #[serde(default)]
    pub mmsi: Option<u64>,
    #[serde(default)]
    pub departure_port: Option<String>,
    #[serde(default)]
    pub arrival_port: Option<String>,
    #[serde(default)]
    pub departure_date: Option<String>,
    #[serde(default)]
    pub arrival_date: Option<String>,
}

/// Identifier used to select one vessel's voyages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VesselKey {
    Imo(u64),
    Mmsi(u64),
}

impl VesselKey {
    fn matches(self, record: &VoyageRecord) -> bool {
        match self {
            VesselKey::Imo(imo) => record.imo == Some(imo),
            VesselKey::Mmsi(mmsi) => record.mmsi == Some(mmsi),
        }
    }

    fn value(self) -> u64 {
        match self {
            VesselKey::Imo(value) | VesselKey::Mmsi(value) => value,
        }
    }
}

/// Parse a JSON array of voyage records.
pub fn parse_records(json: &str) -> Result<Vec<VoyageRecord>, IngestError> {
    Ok(serde_json::from_str(json)?)
}

/// One leg after port defaulting and duration computation.
struct Leg {
    departure: String,
    arrival: String,
    duration_days: f64,
}

/// Builds per-vessel itineraries and cuts them into sequences.
#[derive(Debug, Clone, Default)]
pub struct ItineraryBuilder {
    cutoff_days: Option<f64>,
}

impl ItineraryBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Use a fixed cutoff instead of deriving one from the durations.
    pub fn with_cutoff_days(mut self, days: f64) -> Self {
        self.cutoff_days = Some(days);
        self
    }

    /// Build the database of port-call sequences for one vessel.
    ///
    /// Fails fast when the vessel has no voyages rather than handing the
    /// miners a silently empty database.
    pub fn build(
        &self,
        records: &[VoyageRecord],
        key: VesselKey,
        registry: &mut PortRegistry,
    ) -> Result<Database, IngestError> {
        let legs = collect_legs(records, key)?;
        if legs.is_empty() {
            return Err(IngestError::UnknownVessel {
                vessel: key.value(),
            });
        }
        let cutoff = self.cutoff_days.unwrap_or_else(|| derive_cutoff(&legs));

        let mut sequences = Vec::new();
        let mut current: Vec<Itemset> = Vec::new();
        let mut accumulated = 0.0;
        let mut last_port: Option<Item> = None;

        for leg in &legs {
            let departure = registry.intern(&leg.departure);
            let arrival = registry.intern(&leg.arrival);

            if last_port != Some(departure) {
                current.push(Itemset::singleton(departure));
                last_port = Some(departure);
            }
            if last_port != Some(arrival) {
                current.push(Itemset::singleton(arrival));
                last_port = Some(arrival);
            }

            accumulated += leg.duration_days;
            if accumulated >= cutoff {
                if !current.is_empty() {
                    sequences.push(Sequence::new(std::mem::take(&mut current)));
                }
                accumulated = 0.0;
                last_port = None;
            }
        }
        if !current.is_empty() {
            sequences.push(Sequence::new(current));
        }

        debug!(
            vessel = key.value(),
            legs = legs.len(),
            cutoff_days = cutoff,
            sequences = sequences.len(),
            "itinerary built"
        );
        Ok(Database::new(sequences))
    }
}

/// Select, order, and normalize one vessel's legs.
///
/// A missing port becomes the placeholder and its timestamp the reference
/// date. Legs are ordered by arrival date.
fn collect_legs(records: &[VoyageRecord], key: VesselKey) -> Result<Vec<Leg>, IngestError> {
    let reference = parse_timestamp(REFERENCE_DATE)?;

    let mut legs: Vec<(NaiveDateTime, Leg)> = Vec::new();
    for record in records.iter().filter(|record| key.matches(record)) {
        let departure = record
            .departure_port
            .clone()
            .unwrap_or_else(|| PLACEHOLDER_PORT.to_string());
        let arrival = record
            .arrival_port
            .clone()
            .unwrap_or_else(|| PLACEHOLDER_PORT.to_string());

        let departure_date = if departure == PLACEHOLDER_PORT {
            reference
        } else {
            parse_record_timestamp(record.departure_date.as_deref())?
        };
        let arrival_date = if arrival == PLACEHOLDER_PORT {
            reference
        } else {
            parse_record_timestamp(record.arrival_date.as_deref())?
        };

        let duration_days = (arrival_date - departure_date).num_seconds() as f64 / 86_400.0;
        legs.push((
            arrival_date,
            Leg {
                departure,
                arrival,
                duration_days,
            },
        ));
    }

    legs.sort_by_key(|(arrival_date, _)| *arrival_date);
    Ok(legs.into_iter().map(|(_, leg)| leg).collect())
}

fn parse_record_timestamp(value: Option<&str>) -> Result<NaiveDateTime, IngestError> {
    let value = value.ok_or_else(|| IngestError::Timestamp {
        value: String::new(),
        message: "timestamp missing".to_string(),
    })?;
    parse_timestamp(value)
}

fn parse_timestamp(value: &str) -> Result<NaiveDateTime, IngestError> {
    NaiveDateTime::parse_from_str(value, TIMESTAMP_FORMAT).map_err(|err| {
        IngestError::Timestamp {
            value: value.to_string(),
            message: err.to_string(),
        }
    })
}

/// Largest-gap heuristic over the sorted positive leg durations: the upper
/// end of the widest gap becomes the cutoff, capped at [`MAX_CUTOFF_DAYS`].
fn derive_cutoff(legs: &[Leg]) -> f64 {
    let mut durations: Vec<f64> = legs
        .iter()
        .map(|leg| leg.duration_days)
        .filter(|&days| days > 0.0)
        .collect();
    durations.sort_by(|a, b| a.total_cmp(b));

    if durations.len() < 2 {
        return DEFAULT_CUTOFF_DAYS;
    }

    let mut max_gap = 0.0;
    let mut cutoff = durations[0];
    for window in durations.windows(2) {
        let gap = window[1] - window[0];
        if gap > max_gap {
            max_gap = gap;
            cutoff = window[1];
        }
    }
    cutoff.min(MAX_CUTOFF_DAYS)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(
        imo: u64,
        departure: Option<&str>,
        arrival: Option<&str>,
        dates: (&str, &str),
    ) -> VoyageRecord {
        VoyageRecord {
            imo: Some(imo),
            mmsi: None,
            departure_port: departure.map(String::from),
            arrival_port: arrival.map(String::from),
            departure_date: Some(dates.0.to_string()),
            arrival_date: Some(dates.1.to_string()),
        }
    }

    #[test]
    fn test_consecutive_duplicates_collapse() {
        let records = vec![
            record(
                9000001,
                Some("ROTTERDAM"),
                Some("HAMBURG"),
                ("2023-01-01T00:00:00", "2023-01-02T00:00:00"),
            ),
            record(
                9000001,
                Some("HAMBURG"),
                Some("ANTWERP"),
                ("2023-01-03T00:00:00", "2023-01-04T00:00:00"),
            ),
        ];
        let mut registry = PortRegistry::new();
        let db = ItineraryBuilder::new()
            .with_cutoff_days(100.0)
            .build(&records, VesselKey::Imo(9000001), &mut registry)
            .unwrap();

        assert_eq!(db.len(), 1);
        let calls: Vec<&str> = db.sequences()[0]
            .itemsets()
            .iter()
            .flat_map(|itemset| itemset.iter())
            .map(|item| registry.name(item).unwrap())
            .collect();
        assert_eq!(calls, vec!["ROTTERDAM", "HAMBURG", "ANTWERP"]);
    }

    #[test]
    fn test_cutoff_splits_sequences() {
        let records = vec![
            record(
                9000001,
                Some("ROTTERDAM"),
                Some("HAMBURG"),
                ("2023-01-01T00:00:00", "2023-01-03T00:00:00"),
            ),
            record(
                9000001,
                Some("HAMBURG"),
                Some("ANTWERP"),
                ("2023-01-04T00:00:00", "2023-01-06T00:00:00"),
            ),
        ];
        let mut registry = PortRegistry::new();
        // Each leg lasts two days; a two-day cutoff closes a sequence per leg.
        let db = ItineraryBuilder::new()
            .with_cutoff_days(2.0)
            .build(&records, VesselKey::Imo(9000001), &mut registry)
            .unwrap();

        assert_eq!(db.len(), 2);
        assert_eq!(db.sequences()[0].len(), 2);
        assert_eq!(db.sequences()[1].len(), 2);
    }

    #[test]
    fn test_missing_port_becomes_placeholder() {
        let records = vec![record(
            9000001,
            None,
            Some("HAMBURG"),
            ("2023-01-01T00:00:00", "2023-01-02T00:00:00"),
        )];
        let mut registry = PortRegistry::new();
        let db = ItineraryBuilder::new()
            .with_cutoff_days(100.0)
            .build(&records, VesselKey::Imo(9000001), &mut registry)
            .unwrap();

        let first = db.sequences()[0].itemsets()[0].iter().next().unwrap();
        assert_eq!(first, registry.placeholder());
    }

    #[test]
    fn test_unknown_vessel_fails_fast() {
        let mut registry = PortRegistry::new();
        let result =
            ItineraryBuilder::new().build(&[], VesselKey::Imo(1234567), &mut registry);
        assert!(matches!(
            result,
            Err(IngestError::UnknownVessel { vessel: 1234567 })
        ));
    }

    #[test]
    fn test_derive_cutoff_default_and_cap() {
        let leg = |days: f64| Leg {
            departure: "A".to_string(),
            arrival: "B".to_string(),
            duration_days: days,
        };
        // Fewer than two positive durations: default applies.
        assert_eq!(derive_cutoff(&[leg(3.0)]), DEFAULT_CUTOFF_DAYS);
        // Widest gap is between 5 and 80; the upper end caps at 50.
        assert_eq!(derive_cutoff(&[leg(2.0), leg(5.0), leg(80.0)]), MAX_CUTOFF_DAYS);
        // Widest gap is between 4 and 20.
        assert_eq!(derive_cutoff(&[leg(2.0), leg(4.0), leg(20.0)]), 20.0);
    }
}
