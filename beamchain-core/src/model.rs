//! Connectivity model for two-node beam meshes.
//!
//! Stores every element's endpoint pair and the derived node -> incident
//! elements adjacency. The model is built once and never mutated, so the
//! walker and the partition driver borrow it freely.

use std::collections::{BTreeMap, btree_map::Entry};
use std::fmt;

use tracing::{debug, instrument};

use crate::error::ModelError;

macro_rules! define_id {
    ($(#[$meta:meta])* $Name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
        pub struct $Name(u64);

        impl $Name {
            /// Wraps a raw identifier.
            #[rustfmt::skip]
            #[must_use]
            pub const fn new(id: u64) -> Self { Self(id) }

            /// Returns the raw identifier.
            #[rustfmt::skip]
            #[must_use]
            pub const fn get(self) -> u64 { self.0 }
        }

        impl From<u64> for $Name {
            fn from(id: u64) -> Self {
                Self(id)
            }
        }

        impl From<$Name> for u64 {
            fn from(id: $Name) -> Self {
                id.0
            }
        }

        impl fmt::Display for $Name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                fmt::Display::fmt(&self.0, f)
            }
        }
    };
}

define_id! {
    /// Identifier of a beam element.
    ///
    /// # Examples
    /// ```
    /// use beamchain_core::ElementId;
    ///
    /// let id = ElementId::new(17);
    /// assert_eq!(id.get(), 17);
    /// assert_eq!(id.to_string(), "17");
    /// ```
    ElementId
}

define_id! {
    /// Identifier of a mesh node.
    ///
    /// # Examples
    /// ```
    /// use beamchain_core::NodeId;
    ///
    /// assert_eq!(NodeId::from(40).get(), 40);
    /// ```
    NodeId
}

/// A two-node line element as read from the input feed.
///
/// # Examples
/// ```
/// use beamchain_core::{BeamElement, ElementId, NodeId};
///
/// let beam = BeamElement::from((1, 10, 20));
/// assert_eq!(beam.id(), ElementId::new(1));
/// assert_eq!(beam.nodes(), (NodeId::new(10), NodeId::new(20)));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BeamElement {
    id: ElementId,
    nodes: (NodeId, NodeId),
}

impl BeamElement {
    /// Creates an element joining `first` and `second`.
    #[must_use]
    pub const fn new(id: ElementId, first: NodeId, second: NodeId) -> Self {
        Self {
            id,
            nodes: (first, second),
        }
    }

    /// Returns the element id.
    #[rustfmt::skip]
    #[must_use]
    pub const fn id(&self) -> ElementId { self.id }

    /// Returns the endpoint nodes in the order they were read.
    #[rustfmt::skip]
    #[must_use]
    pub const fn nodes(&self) -> (NodeId, NodeId) { self.nodes }
}

impl From<(u64, u64, u64)> for BeamElement {
    fn from((id, first, second): (u64, u64, u64)) -> Self {
        Self::new(ElementId(id), NodeId(first), NodeId(second))
    }
}

/// Immutable element/node incidence structure.
///
/// Incident lists keep the order in which elements were read so that every
/// traversal is reproducible.
///
/// # Examples
/// ```
/// use beamchain_core::{BeamElement, ConnectivityModel, ElementId, NodeId};
///
/// let model = ConnectivityModel::try_from_elements([
///     BeamElement::from((1, 10, 20)),
///     BeamElement::from((2, 20, 30)),
/// ])?;
/// assert_eq!(model.nodes_of(ElementId::new(2))?, (NodeId::new(20), NodeId::new(30)));
/// assert_eq!(model.elements_of(NodeId::new(20)), [ElementId::new(1), ElementId::new(2)]);
/// assert!(model.elements_of(NodeId::new(99)).is_empty());
/// # Ok::<(), beamchain_core::ModelError>(())
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConnectivityModel {
    elements: BTreeMap<ElementId, (NodeId, NodeId)>,
    incidence: BTreeMap<NodeId, Vec<ElementId>>,
    input_order: Vec<ElementId>,
}

impl ConnectivityModel {
    /// Builds the model from a sequence of elements.
    ///
    /// # Errors
    /// Returns [`ModelError::DuplicateElementId`] when an id repeats and
    /// [`ModelError::SelfLoopElement`] when an element joins a node to itself.
    /// Nothing is built when either occurs.
    #[instrument(name = "core.model.build", err, skip(elements))]
    pub fn try_from_elements<I>(elements: I) -> Result<Self, ModelError>
    where
        I: IntoIterator<Item = BeamElement>,
    {
        let mut model = Self::default();
        for element in elements {
            model.insert(element)?;
        }
        debug!(
            elements = model.element_count(),
            nodes = model.node_count(),
            "connectivity model built"
        );
        Ok(model)
    }

    fn insert(&mut self, element: BeamElement) -> Result<(), ModelError> {
        let id = element.id();
        let (first, second) = element.nodes();
        if first == second {
            return Err(ModelError::SelfLoopElement {
                element: id,
                node: first,
            });
        }
        match self.elements.entry(id) {
            Entry::Occupied(_) => return Err(ModelError::DuplicateElementId { element: id }),
            Entry::Vacant(slot) => {
                slot.insert((first, second));
            }
        }
        self.incidence.entry(first).or_default().push(id);
        self.incidence.entry(second).or_default().push(id);
        self.input_order.push(id);
        Ok(())
    }

    /// Returns the two endpoint nodes of `element`.
    ///
    /// # Errors
    /// Returns [`ModelError::UnknownElement`] when the element was never stored.
    pub fn nodes_of(&self, element: ElementId) -> Result<(NodeId, NodeId), ModelError> {
        self.elements
            .get(&element)
            .copied()
            .ok_or(ModelError::UnknownElement { element })
    }

    /// Returns the endpoint of `element` that is not `node`.
    ///
    /// # Errors
    /// Returns [`ModelError::UnknownElement`] for a missing element and
    /// [`ModelError::DetachedElement`] when `node` is not one of its ends.
    pub fn opposite_node(&self, element: ElementId, node: NodeId) -> Result<NodeId, ModelError> {
        match self.nodes_of(element)? {
            (first, second) if first == node => Ok(second),
            (first, second) if second == node => Ok(first),
            _ => Err(ModelError::DetachedElement { element, node }),
        }
    }

    /// Returns the elements incident to `node` in read order.
    ///
    /// A node the model has never seen has no incident elements.
    #[must_use]
    pub fn elements_of(&self, node: NodeId) -> &[ElementId] {
        self.incidence
            .get(&node)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// Returns the number of elements incident to `node`.
    #[must_use]
    pub fn degree(&self, node: NodeId) -> usize {
        self.elements_of(node).len()
    }

    /// Returns whether any element touches `node`.
    #[must_use]
    pub fn contains_node(&self, node: NodeId) -> bool {
        self.incidence.contains_key(&node)
    }

    /// Iterates element ids in ascending order.
    pub fn element_ids(&self) -> impl Iterator<Item = ElementId> + '_ {
        self.elements.keys().copied()
    }

    /// Returns element ids in the order they were read.
    #[must_use]
    pub fn input_order(&self) -> &[ElementId] {
        &self.input_order
    }

    /// Iterates node ids in ascending order.
    pub fn node_ids(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.incidence.keys().copied()
    }

    /// Number of stored elements.
    #[must_use]
    pub fn element_count(&self) -> usize {
        self.elements.len()
    }

    /// Number of nodes with at least one incident element.
    #[must_use]
    pub fn node_count(&self) -> usize {
        self.incidence.len()
    }

    /// Returns whether the model holds no elements.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use rstest::rstest;

    fn model(raw: &[(u64, u64, u64)]) -> ConnectivityModel {
        ConnectivityModel::try_from_elements(raw.iter().copied().map(BeamElement::from))
            .expect("model must build")
    }

    #[rstest]
    fn incidence_lists_follow_read_order() {
        let model = model(&[(7, 1, 2), (3, 2, 3), (5, 2, 4)]);
        let incident: Vec<u64> = model
            .elements_of(NodeId::new(2))
            .iter()
            .map(|id| id.get())
            .collect();
        assert_eq!(incident, vec![7, 3, 5]);
        assert_eq!(model.degree(NodeId::new(2)), 3);
        assert_eq!(model.degree(NodeId::new(4)), 1);
    }

    #[rstest]
    fn every_element_appears_under_both_of_its_nodes() {
        let model = model(&[(1, 10, 20), (2, 20, 30), (3, 20, 40), (4, 40, 50)]);
        for element in model.element_ids() {
            let (first, second) = model.nodes_of(element).expect("element is stored");
            for node in [first, second] {
                let hits = model
                    .elements_of(node)
                    .iter()
                    .filter(|&&candidate| candidate == element)
                    .count();
                assert_eq!(hits, 1, "element {element} listed {hits} times under {node}");
            }
        }
        let incidences: usize = model.node_ids().map(|node| model.degree(node)).sum();
        assert_eq!(incidences, 2 * model.element_count());
    }

    #[rstest]
    fn element_ids_ascend_while_input_order_is_preserved() {
        let model = model(&[(9, 1, 2), (2, 2, 3), (5, 3, 4)]);
        let ascending: Vec<u64> = model.element_ids().map(ElementId::get).collect();
        let read: Vec<u64> = model.input_order().iter().map(|id| id.get()).collect();
        assert_eq!(ascending, vec![2, 5, 9]);
        assert_eq!(read, vec![9, 2, 5]);
    }

    #[rstest]
    fn unknown_node_has_no_incidence() {
        let model = model(&[(1, 10, 20)]);
        assert!(model.elements_of(NodeId::new(11)).is_empty());
        assert_eq!(model.degree(NodeId::new(11)), 0);
        assert!(!model.contains_node(NodeId::new(11)));
    }

    #[rstest]
    fn unknown_element_lookup_fails() {
        let model = model(&[(1, 10, 20)]);
        let err = model
            .nodes_of(ElementId::new(2))
            .expect_err("element 2 is missing");
        assert_eq!(
            err,
            ModelError::UnknownElement {
                element: ElementId::new(2)
            }
        );
    }

    #[rstest]
    fn duplicate_ids_abort_construction() {
        let err = ConnectivityModel::try_from_elements(
            [(1, 10, 20), (2, 20, 30), (1, 30, 40)].map(BeamElement::from),
        )
        .expect_err("duplicate id must fail");
        assert_eq!(
            err,
            ModelError::DuplicateElementId {
                element: ElementId::new(1)
            }
        );
    }

    #[rstest]
    fn self_loops_are_rejected() {
        let err = ConnectivityModel::try_from_elements([BeamElement::from((4, 8, 8))])
            .expect_err("self loop must fail");
        assert_eq!(
            err,
            ModelError::SelfLoopElement {
                element: ElementId::new(4),
                node: NodeId::new(8),
            }
        );
    }

    #[rstest]
    #[case::from_first(10, 20)]
    #[case::from_second(20, 10)]
    fn opposite_node_flips_the_endpoint(#[case] from: u64, #[case] expected: u64) {
        let model = model(&[(1, 10, 20)]);
        let other = model
            .opposite_node(ElementId::new(1), NodeId::new(from))
            .expect("node is an endpoint");
        assert_eq!(other, NodeId::new(expected));
    }

    #[rstest]
    fn opposite_node_rejects_detached_nodes() {
        let model = model(&[(1, 10, 20)]);
        let err = model
            .opposite_node(ElementId::new(1), NodeId::new(30))
            .expect_err("node 30 is not an endpoint");
        assert!(matches!(err, ModelError::DetachedElement { .. }));
    }
}
