//! Fixture types for partition property tests.

use crate::BeamElement;

/// Topology family of a generated lattice.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(super) enum LatticeShape {
    /// A random tree; always partitions cleanly.
    Tree,
    /// A random tree with extra bracing elements; may close a pure loop.
    Braced,
    /// A two-rail ladder with rungs; always partitions cleanly.
    Ladder,
    /// Several disjoint trees with offset node ids.
    Forest,
    /// A tree plus a detached ring of pass-through nodes; never partitions.
    TreeWithRing,
}

/// Whether a fixture is expected to contain a closed pass-through loop.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(super) enum LoopExpectation {
    /// No component can be a pure loop.
    Never,
    /// Random bracing may have closed one.
    Possible,
    /// A pure loop was generated on purpose.
    Always,
}

/// A generated lattice in feed order.
#[derive(Clone, Debug)]
pub(super) struct LatticeFixture {
    /// Elements in the order they are fed to the model.
    pub elements: Vec<BeamElement>,
    /// Topology family, kept for failure messages.
    pub shape: LatticeShape,
    /// Whether a closed loop is expected.
    pub loops: LoopExpectation,
}
