//! Maximal chain traversal across pass-through nodes.
//!
//! A walk leaves its seed element through one of the seed's nodes and keeps
//! stepping while the current node has exactly two incident elements. Any
//! other degree ends the walk. Walks are bounded by the model's element count
//! and by a return-to-seed check, so a closed loop of pass-through nodes is
//! reported instead of looping forever.

use crate::{
    error::{ModelError, WalkError},
    model::{ConnectivityModel, ElementId, NodeId},
};

/// Elements visited by a single-direction walk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Walk {
    elements: Vec<ElementId>,
    terminal: NodeId,
}

impl Walk {
    /// Visited elements in walk order, starting with the seed.
    #[must_use]
    pub fn elements(&self) -> &[ElementId] {
        &self.elements
    }

    /// Node at which the walk stopped.
    #[rustfmt::skip]
    #[must_use]
    pub const fn terminal(&self) -> NodeId { self.terminal }

    /// Consumes the walk and returns its elements.
    #[must_use]
    pub fn into_elements(self) -> Vec<ElementId> {
        self.elements
    }
}

/// A maximal run of elements between two boundary nodes.
///
/// Elements are held in path order from the first terminal to the second.
///
/// # Examples
/// ```
/// use beamchain_core::{BeamElement, ChainWalker, ConnectivityModel, ElementId, NodeId};
///
/// let model = ConnectivityModel::try_from_elements(
///     [(1, 10, 20), (2, 20, 30), (3, 30, 40)].map(BeamElement::from),
/// )?;
/// let chain = ChainWalker::new(&model).chain_containing(ElementId::new(2))?;
/// assert_eq!(chain.len(), 3);
/// assert_eq!(chain.terminals(), (NodeId::new(10), NodeId::new(40)));
/// # Ok::<(), beamchain_core::WalkError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Chain {
    elements: Vec<ElementId>,
    terminals: (NodeId, NodeId),
}

impl Chain {
    /// Elements in path order.
    #[must_use]
    pub fn elements(&self) -> &[ElementId] {
        &self.elements
    }

    /// Elements sorted by ascending id.
    #[must_use]
    pub fn sorted_elements(&self) -> Vec<ElementId> {
        let mut sorted = self.elements.clone();
        sorted.sort_unstable();
        sorted
    }

    /// The two nodes the chain ends at, in path order.
    #[rustfmt::skip]
    #[must_use]
    pub const fn terminals(&self) -> (NodeId, NodeId) { self.terminals }

    /// Returns whether `element` belongs to the chain.
    #[must_use]
    pub fn contains(&self, element: ElementId) -> bool {
        self.elements.contains(&element)
    }

    /// Number of elements in the chain.
    #[must_use]
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    /// Always `false` for chains produced by [`ChainWalker`].
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }
}

/// Walks chains over a borrowed [`ConnectivityModel`].
#[derive(Debug, Clone, Copy)]
pub struct ChainWalker<'m> {
    model: &'m ConnectivityModel,
    step_limit: usize,
}

impl<'m> ChainWalker<'m> {
    /// Creates a walker whose walks may visit at most every element once.
    #[must_use]
    pub fn new(model: &'m ConnectivityModel) -> Self {
        Self {
            model,
            step_limit: model.element_count(),
        }
    }

    /// Returns the model being walked.
    #[rustfmt::skip]
    #[must_use]
    pub const fn model(&self) -> &'m ConnectivityModel { self.model }

    /// Walks away from `seed` through `start_node`.
    ///
    /// # Errors
    /// Returns [`WalkError::NonTerminatingChain`] when the walk closes back on
    /// `seed`, and [`WalkError::Model`] when `seed` is unknown, `start_node`
    /// is not one of its ends, or the adjacency is inconsistent.
    pub fn walk(&self, seed: ElementId, start_node: NodeId) -> Result<Walk, WalkError> {
        self.model.opposite_node(seed, start_node)?;

        let mut elements = vec![seed];
        let mut current_element = seed;
        let mut current_node = start_node;
        loop {
            let &[first, second] = self.model.elements_of(current_node) else {
                return Ok(Walk {
                    elements,
                    terminal: current_node,
                });
            };
            let next_element = if first == current_element {
                second
            } else if second == current_element {
                first
            } else {
                return Err(ModelError::DetachedElement {
                    element: current_element,
                    node: current_node,
                }
                .into());
            };
            if next_element == seed || elements.len() >= self.step_limit {
                return Err(WalkError::NonTerminatingChain { seed, elements });
            }
            current_node = self.model.opposite_node(next_element, current_node)?;
            elements.push(next_element);
            current_element = next_element;
        }
    }

    /// Returns the maximal chain containing `element`.
    ///
    /// # Errors
    /// Propagates any [`WalkError`] raised by either direction's walk.
    pub fn chain_containing(&self, element: ElementId) -> Result<Chain, WalkError> {
        let (first, second) = self.model.nodes_of(element)?;
        let backward = self.walk(element, first)?;
        let forward = self.walk(element, second)?;

        let mut elements: Vec<ElementId> =
            backward.elements().iter().skip(1).rev().copied().collect();
        let terminals = (backward.terminal(), forward.terminal());
        elements.extend(forward.into_elements());
        Ok(Chain {
            elements,
            terminals,
        })
    }

    /// Returns one chain per element incident to `node`, each starting at
    /// `node` and walking away from it.
    ///
    /// At a junction or endpoint these are whole chains. At a pass-through
    /// node they are the two halves of the chain running through it.
    ///
    /// # Errors
    /// Returns [`ModelError::UnknownNode`] (wrapped) when no element touches
    /// `node`, and propagates any walk failure.
    pub fn chains_at_node(&self, node: NodeId) -> Result<Vec<Chain>, WalkError> {
        if !self.model.contains_node(node) {
            return Err(ModelError::UnknownNode { node }.into());
        }
        self.model
            .elements_of(node)
            .iter()
            .map(|&element| -> Result<Chain, WalkError> {
                let far_node = self.model.opposite_node(element, node)?;
                let walk = self.walk(element, far_node)?;
                Ok(Chain {
                    terminals: (node, walk.terminal()),
                    elements: walk.into_elements(),
                })
            })
            .collect()
    }
}
