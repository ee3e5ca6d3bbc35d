//! Benchmark setup error type.

use crate::source::SyntheticError;
use joinery_core::JoineryError;

/// Errors that may occur while preparing benchmark inputs.
#[derive(Debug, thiserror::Error)]
pub enum BenchSetupError {
    /// Synthetic workload generation failed.
    #[error("synthetic workload generation failed: {0}")]
    Synthetic(#[from] SyntheticError),
    /// Building a graph from the workload failed.
    #[error("graph construction failed: {0}")]
    Core(#[from] JoineryError),
}
