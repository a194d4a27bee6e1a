//! Mining configuration.

use serde::{Deserialize, Serialize};

use crate::errors::MiningError;

/// Default worker-pool size for the parallel miner.
pub const DEFAULT_WORKERS: usize = 4;

/// Default minimum number of supporting vessels.
pub const DEFAULT_MIN_SUPPORT: usize = 2;

/// Tunables shared by the miner families.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MiningConfig {
    /// Minimum number of supporting vessels for a pattern to be kept.
    pub min_support: usize,
    /// Worker-pool size for the parallel miner.
    pub workers: usize,
}

impl Default for MiningConfig {
    fn default() -> Self {
        Self {
            min_support: DEFAULT_MIN_SUPPORT,
            workers: DEFAULT_WORKERS,
        }
    }
}

impl MiningConfig {
    /// Fail fast on values that would make mining meaningless.
    pub fn validate(&self) -> Result<(), MiningError> {
        if self.min_support == 0 {
            return Err(MiningError::InvalidMinSupport(self.min_support));
        }
        Ok(())
    }
}
