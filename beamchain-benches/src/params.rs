//! Benchmark parameter types.

use std::fmt;

use beamchain_core::SelectionOrder;

/// Parameters for a partition benchmark run.
#[derive(Clone, Debug)]
pub struct PartitionBenchParams {
    /// Number of elements in the lattice.
    pub element_count: usize,
    /// Number of chains the lattice splits into.
    pub chain_count: usize,
    /// Seed selection order.
    pub order: SelectionOrder,
}

impl fmt::Display for PartitionBenchParams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "e={},c={},{}",
            self.element_count,
            self.chain_count,
            self.order.as_str()
        )
    }
}
