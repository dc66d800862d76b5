//! Helpers shared by the `beamchain-core` integration tests.

use beamchain_core::{Chain, InMemoryFeed, Partition};

/// Builds a named feed from raw `(element, first_node, second_node)` triples.
pub fn feed(name: &str, raw: &[(u64, u64, u64)]) -> InMemoryFeed {
    InMemoryFeed::new(name, raw.iter().copied().map(Into::into).collect())
}

/// Sorted element ids of each chain, with the chains sorted too.
pub fn chain_sets(partition: &Partition) -> Vec<Vec<u64>> {
    let mut sets: Vec<Vec<u64>> = partition.iter().map(ids).collect();
    sets.sort();
    sets
}

/// Sorted element ids of `chain`.
pub fn ids(chain: &Chain) -> Vec<u64> {
    chain.sorted_elements().into_iter().map(u64::from).collect()
}
