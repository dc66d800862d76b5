//! Decomposition of a whole model into maximal chains.
//!
//! The driver scans a fixed worklist of element ids, seeds a chain at the
//! first unassigned element, and marks every member of that chain as
//! assigned. Each element is therefore walked exactly once and the output
//! order depends only on the worklist order.

#[cfg(test)]
mod property;

use std::collections::HashSet;

use tracing::{debug, instrument};

use crate::{
    error::WalkError,
    model::{ConnectivityModel, ElementId},
    walk::{Chain, ChainWalker},
};

/// Order in which the driver picks seed elements.
///
/// # Examples
/// ```
/// use beamchain_core::SelectionOrder;
///
/// assert_eq!(SelectionOrder::default(), SelectionOrder::AscendingId);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SelectionOrder {
    /// Seed chains from the lowest unassigned element id.
    #[default]
    AscendingId,
    /// Seed chains in the order elements were read.
    InputOrder,
}

impl SelectionOrder {
    /// Lower-case label used in logs.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::AscendingId => "ascending-id",
            Self::InputOrder => "input-order",
        }
    }
}

/// Every element of a model, grouped into maximal chains.
///
/// # Examples
/// ```
/// use beamchain_core::{BeamElement, ConnectivityModel, SelectionOrder, partition_all};
///
/// let model = ConnectivityModel::try_from_elements(
///     [(1, 10, 20), (2, 20, 30), (3, 20, 40)].map(BeamElement::from),
/// )?;
/// let partition = partition_all(&model, SelectionOrder::AscendingId)?;
/// assert_eq!(partition.len(), 3);
/// assert_eq!(partition.element_count(), 3);
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Partition {
    chains: Vec<Chain>,
}

impl Partition {
    /// Chains in emission order.
    #[must_use]
    pub fn chains(&self) -> &[Chain] {
        &self.chains
    }

    /// Iterates chains in emission order.
    pub fn iter(&self) -> std::slice::Iter<'_, Chain> {
        self.chains.iter()
    }

    /// Number of chains.
    #[must_use]
    pub fn len(&self) -> usize {
        self.chains.len()
    }

    /// Returns whether the partition has no chains.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.chains.is_empty()
    }

    /// Total number of elements across all chains.
    #[must_use]
    pub fn element_count(&self) -> usize {
        self.chains.iter().map(Chain::len).sum()
    }

    /// Position of the chain holding `element`, if any.
    #[must_use]
    pub fn position_of(&self, element: ElementId) -> Option<usize> {
        self.chains.iter().position(|chain| chain.contains(element))
    }

    /// Consumes the partition and returns its chains.
    #[must_use]
    pub fn into_chains(self) -> Vec<Chain> {
        self.chains
    }
}

impl<'a> IntoIterator for &'a Partition {
    type Item = &'a Chain;
    type IntoIter = std::slice::Iter<'a, Chain>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Partitions every element of `model` into maximal chains.
///
/// # Errors
/// Returns [`WalkError::NonTerminatingChain`] when the model contains a
/// closed loop of pass-through nodes, and [`WalkError::Model`] when the
/// adjacency is inconsistent.
#[instrument(
    name = "core.partition_all",
    err,
    skip(model, order),
    fields(elements = model.element_count(), order = order.as_str()),
)]
pub fn partition_all(
    model: &ConnectivityModel,
    order: SelectionOrder,
) -> Result<Partition, WalkError> {
    let walker = ChainWalker::new(model);
    let worklist: Vec<ElementId> = match order {
        SelectionOrder::AscendingId => model.element_ids().collect(),
        SelectionOrder::InputOrder => model.input_order().to_vec(),
    };

    let mut assigned: HashSet<ElementId> = HashSet::with_capacity(model.element_count());
    let mut chains = Vec::new();
    for seed in worklist {
        if assigned.contains(&seed) {
            continue;
        }
        let chain = walker.chain_containing(seed)?;
        assigned.extend(chain.elements().iter().copied());
        debug!(
            chain = chains.len() + 1,
            seed = seed.get(),
            elements = chain.len(),
            "chain assigned"
        );
        chains.push(chain);
    }

    Ok(Partition { chains })
}
