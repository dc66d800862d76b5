//! Synthetic comb lattices with shuffled element order.

use beamchain_core::{BeamElement, ConnectivityModel, InMemoryFeed};
use beamchain_test_support::lattice::comb;
use rand::{SeedableRng, rngs::SmallRng, seq::SliceRandom};

use crate::error::BenchSetupError;

/// Shape and shuffle seed of a synthetic lattice.
#[derive(Clone, Copy, Debug)]
pub struct LatticeConfig {
    /// Number of teeth hanging off the spine.
    pub teeth: usize,
    /// Elements per spine segment and per tooth.
    pub segment_len: usize,
    /// Seed for shuffling the element order.
    pub seed: u64,
}

impl LatticeConfig {
    /// Number of chains the lattice partitions into.
    #[must_use]
    pub const fn chain_count(&self) -> usize {
        self.teeth.saturating_mul(2).saturating_add(1)
    }
}

/// A comb lattice fed to the partitioner in shuffled order.
#[derive(Clone, Debug)]
pub struct SyntheticLattice {
    feed: InMemoryFeed,
}

impl SyntheticLattice {
    /// Generates the lattice described by `config`.
    ///
    /// # Errors
    /// Returns [`BenchSetupError::ZeroValue`] when `segment_len` is zero.
    pub fn generate(config: &LatticeConfig) -> Result<Self, BenchSetupError> {
        if config.segment_len == 0 {
            return Err(BenchSetupError::ZeroValue {
                context: "segment_len",
            });
        }
        let mut raw = comb(config.teeth, config.segment_len);
        raw.shuffle(&mut SmallRng::seed_from_u64(config.seed));
        let name = format!("comb-{}x{}", config.teeth, config.segment_len);
        Ok(Self {
            feed: InMemoryFeed::new(name, raw.into_iter().map(BeamElement::from).collect()),
        })
    }

    /// The lattice as an element feed.
    #[must_use]
    pub const fn feed(&self) -> &InMemoryFeed {
        &self.feed
    }

    /// Builds the connectivity model of the lattice.
    ///
    /// # Errors
    /// Returns [`BenchSetupError::Model`] if the generated elements are
    /// inconsistent.
    pub fn model(&self) -> Result<ConnectivityModel, BenchSetupError> {
        use beamchain_core::ElementFeed as _;
        Ok(ConnectivityModel::try_from_elements(
            self.feed.elements().iter().copied(),
        )?)
    }
}
