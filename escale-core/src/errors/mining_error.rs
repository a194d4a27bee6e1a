//! Mining configuration and input validation errors.

/// Errors raised before or during a mining run.
///
/// There is no transient class here: the core does no I/O, so every error
/// is a configuration or input defect reported before mining starts.
#[derive(Debug, thiserror::Error)]
pub enum MiningError {
    /// Support filtering is meaningless below a threshold of 1.
    #[error("minimum support must be at least 1, got {0}")]
    InvalidMinSupport(usize),

    /// The input database violates the non-empty-itemset invariant.
    #[error("sequence {sequence} contains an empty itemset")]
    EmptyItemset { sequence: usize },

    /// The worker pool for parallel mining could not be constructed.
    #[error("failed to build worker pool: {0}")]
    WorkerPool(#[from] rayon::ThreadPoolBuildError),
}
