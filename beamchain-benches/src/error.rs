//! Benchmark setup error type.
//!
//! Lets setup helpers propagate failures with `?` instead of `.expect()`.

use beamchain_core::{ModelError, PartitionError};

/// Errors that may occur during benchmark setup.
#[derive(Debug, thiserror::Error)]
pub enum BenchSetupError {
    /// The synthetic lattice did not form a valid model.
    #[error("synthetic lattice is not a valid model: {0}")]
    Model(#[from] ModelError),
    /// The warm-up partition failed.
    #[error("partitioning failed: {0}")]
    Partition(#[from] PartitionError),
    /// A zero value was passed where a non-zero integer was required.
    #[error("expected a non-zero value for {context}")]
    ZeroValue {
        /// A description of the parameter that was unexpectedly zero.
        context: &'static str,
    },
}
