//! Strategy builders for partition property tests.
//!
//! Each generator lays out node ids, emits elements with sparse, increasing
//! ids, and finally shuffles the feed so that read order never matches id
//! order by accident.

use proptest::prelude::*;
use rand::rngs::SmallRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

use crate::BeamElement;

use super::types::{LatticeFixture, LatticeShape, LoopExpectation};

/// Maximum node count for a single generated tree.
const MAX_TREE_NODES: u64 = 64;
/// Maximum rail length for ladders.
const MAX_LADDER_RAIL: u64 = 20;
/// Node id offset between disjoint components.
const COMPONENT_STRIDE: u64 = 10_000;

/// Generates lattice fixtures across every [`LatticeShape`].
pub(super) fn lattice_fixture_strategy() -> impl Strategy<Value = LatticeFixture> {
    let shape = prop_oneof![
        3 => Just(LatticeShape::Tree),
        3 => Just(LatticeShape::Braced),
        2 => Just(LatticeShape::Ladder),
        2 => Just(LatticeShape::Forest),
        1 => Just(LatticeShape::TreeWithRing),
    ];
    (shape, any::<u64>()).prop_map(|(shape, seed)| {
        let mut rng = SmallRng::seed_from_u64(seed);
        generate_fixture(shape, &mut rng)
    })
}

/// Generates a fixture of a specific shape.
pub(super) fn generate_fixture(shape: LatticeShape, rng: &mut SmallRng) -> LatticeFixture {
    let mut sink = ElementSink::new(rng.gen_range(1..=1_000));
    let loops = match shape {
        LatticeShape::Tree => {
            let nodes = rng.gen_range(2..=MAX_TREE_NODES);
            push_tree(&mut sink, rng, 0, nodes);
            LoopExpectation::Never
        }
        LatticeShape::Braced => {
            let nodes = rng.gen_range(3..=MAX_TREE_NODES);
            push_tree(&mut sink, rng, 0, nodes);
            let braces = rng.gen_range(1..=nodes / 2);
            for _ in 0..braces {
                let first = rng.gen_range(0..nodes);
                let offset = rng.gen_range(1..nodes);
                sink.push(rng, first, (first + offset) % nodes);
            }
            LoopExpectation::Possible
        }
        LatticeShape::Ladder => {
            let rail = rng.gen_range(3..=MAX_LADDER_RAIL);
            push_ladder(&mut sink, rng, rail);
            LoopExpectation::Never
        }
        LatticeShape::Forest => {
            let trees = rng.gen_range(2..=5);
            for index in 0..trees {
                let nodes = rng.gen_range(2..=16);
                push_tree(&mut sink, rng, index * COMPONENT_STRIDE, nodes);
            }
            LoopExpectation::Never
        }
        LatticeShape::TreeWithRing => {
            let nodes = rng.gen_range(2..=32);
            push_tree(&mut sink, rng, 0, nodes);
            let ring = rng.gen_range(2..=12);
            for index in 0..ring {
                sink.push(
                    rng,
                    COMPONENT_STRIDE + index,
                    COMPONENT_STRIDE + (index + 1) % ring,
                );
            }
            LoopExpectation::Always
        }
    };

    let mut elements = sink.into_elements();
    elements.shuffle(rng);
    LatticeFixture {
        elements,
        shape,
        loops,
    }
}

/// Collects elements with monotonically increasing, gapped ids.
struct ElementSink {
    next_id: u64,
    elements: Vec<BeamElement>,
}

impl ElementSink {
    fn new(first_id: u64) -> Self {
        Self {
            next_id: first_id,
            elements: Vec::new(),
        }
    }

    fn push(&mut self, rng: &mut SmallRng, first: u64, second: u64) {
        self.elements
            .push(BeamElement::from((self.next_id, first, second)));
        self.next_id += rng.gen_range(1..=3);
    }

    fn into_elements(self) -> Vec<BeamElement> {
        self.elements
    }
}

/// Random recursive tree: node `i` hangs off a uniformly chosen earlier node.
fn push_tree(sink: &mut ElementSink, rng: &mut SmallRng, base: u64, nodes: u64) {
    for child in 1..nodes {
        let parent = rng.gen_range(0..child);
        sink.push(rng, base + parent, base + child);
    }
}

/// Two rails of `rail` nodes joined by a rung at every station.
fn push_ladder(sink: &mut ElementSink, rng: &mut SmallRng, rail: u64) {
    for station in 0..rail {
        if station + 1 < rail {
            sink.push(rng, station, station + 1);
            sink.push(rng, rail + station, rail + station + 1);
        }
        sink.push(rng, station, rail + station);
    }
}
