//! Degree-based node classification.
//!
//! A node's class decides whether a chain may pass through it: only
//! [`NodeClass::PassThrough`] nodes are interior to a chain, every other node
//! terminates one.

use std::collections::BTreeSet;
use std::fmt;

use tracing::{instrument, warn};

use crate::model::{ConnectivityModel, ElementId, NodeId};

/// Class of a node, derived from its degree alone.
///
/// # Examples
/// ```
/// use beamchain_core::NodeClass;
///
/// assert_eq!(NodeClass::from_degree(1), NodeClass::Endpoint);
/// assert_eq!(NodeClass::from_degree(2), NodeClass::PassThrough);
/// assert_eq!(NodeClass::from_degree(5), NodeClass::Junction);
/// assert!(NodeClass::Junction.is_boundary());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NodeClass {
    /// Fewer than two incident elements.
    Endpoint,
    /// Exactly two incident elements.
    PassThrough,
    /// More than two incident elements.
    Junction,
}

impl NodeClass {
    /// Classifies a node from its degree.
    #[must_use]
    pub const fn from_degree(degree: usize) -> Self {
        match degree {
            0 | 1 => Self::Endpoint,
            2 => Self::PassThrough,
            _ => Self::Junction,
        }
    }

    /// Returns whether a chain must stop at nodes of this class.
    #[must_use]
    pub const fn is_boundary(self) -> bool {
        !matches!(self, Self::PassThrough)
    }

    /// Lower-case label used in logs and summaries.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Endpoint => "endpoint",
            Self::PassThrough => "pass-through",
            Self::Junction => "junction",
        }
    }
}

impl fmt::Display for NodeClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Classifies nodes of a borrowed [`ConnectivityModel`].
///
/// # Examples
/// ```
/// use beamchain_core::{BeamElement, ConnectivityModel, NodeClass, NodeClassifier, NodeId};
///
/// let model = ConnectivityModel::try_from_elements(
///     [(1, 10, 20), (2, 20, 30), (3, 20, 40)].map(BeamElement::from),
/// )?;
/// let classifier = NodeClassifier::new(&model);
/// assert_eq!(classifier.classify(NodeId::new(20)), NodeClass::Junction);
/// assert_eq!(classifier.census().endpoints().len(), 3);
/// # Ok::<(), beamchain_core::ModelError>(())
/// ```
#[derive(Debug, Clone, Copy)]
pub struct NodeClassifier<'m> {
    model: &'m ConnectivityModel,
}

impl<'m> NodeClassifier<'m> {
    /// Creates a classifier over `model`.
    #[must_use]
    pub const fn new(model: &'m ConnectivityModel) -> Self {
        Self { model }
    }

    /// Classifies `node` by its degree in the model.
    ///
    /// A node without any incident element is reported as
    /// [`NodeClass::Endpoint`]; such a query usually means the caller holds a
    /// node id that does not belong to the mesh, so a warning is logged.
    #[must_use]
    pub fn classify(&self, node: NodeId) -> NodeClass {
        let degree = self.model.degree(node);
        if degree == 0 {
            warn!(node = node.get(), "node has no incident elements");
        }
        NodeClass::from_degree(degree)
    }

    /// Groups every node of the model by class.
    #[instrument(name = "core.classify.nodes", skip(self), fields(nodes = self.model.node_count()))]
    #[must_use]
    pub fn census(&self) -> NodeCensus {
        let mut census = NodeCensus::default();
        for node in self.model.node_ids() {
            let class = NodeClass::from_degree(self.model.degree(node));
            census.bucket_mut(class).insert(node);
        }
        census
    }

    /// Groups element ids by the class of the nodes they touch.
    ///
    /// Each element is recorded once per class among its two nodes, so an
    /// element joining an endpoint to a junction lands in both
    /// [`ElementCensus::end_elements`] and [`ElementCensus::junction_elements`].
    #[instrument(name = "core.classify.elements", skip(self), fields(elements = self.model.element_count()))]
    #[must_use]
    pub fn element_census(&self) -> ElementCensus {
        let mut census = ElementCensus::default();
        for node in self.model.node_ids() {
            let incident = self.model.elements_of(node);
            let bucket = match NodeClass::from_degree(incident.len()) {
                NodeClass::Endpoint => &mut census.end_elements,
                NodeClass::PassThrough => &mut census.inner_elements,
                NodeClass::Junction => &mut census.junction_elements,
            };
            bucket.extend(incident.iter().copied());
        }
        census
    }
}

/// Nodes of a model grouped by [`NodeClass`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NodeCensus {
    endpoints: BTreeSet<NodeId>,
    pass_through: BTreeSet<NodeId>,
    junctions: BTreeSet<NodeId>,
}

impl NodeCensus {
    fn bucket_mut(&mut self, class: NodeClass) -> &mut BTreeSet<NodeId> {
        match class {
            NodeClass::Endpoint => &mut self.endpoints,
            NodeClass::PassThrough => &mut self.pass_through,
            NodeClass::Junction => &mut self.junctions,
        }
    }

    /// Nodes with fewer than two incident elements.
    #[rustfmt::skip]
    #[must_use]
    pub fn endpoints(&self) -> &BTreeSet<NodeId> { &self.endpoints }

    /// Nodes with exactly two incident elements.
    #[rustfmt::skip]
    #[must_use]
    pub fn pass_through(&self) -> &BTreeSet<NodeId> { &self.pass_through }

    /// Nodes with more than two incident elements.
    #[rustfmt::skip]
    #[must_use]
    pub fn junctions(&self) -> &BTreeSet<NodeId> { &self.junctions }

    /// Returns the nodes of `class`.
    #[must_use]
    pub fn of(&self, class: NodeClass) -> &BTreeSet<NodeId> {
        match class {
            NodeClass::Endpoint => &self.endpoints,
            NodeClass::PassThrough => &self.pass_through,
            NodeClass::Junction => &self.junctions,
        }
    }

    /// Total number of classified nodes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.endpoints.len() + self.pass_through.len() + self.junctions.len()
    }

    /// Returns whether no node was classified.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Element ids grouped by the class of the nodes they touch.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ElementCensus {
    end_elements: BTreeSet<ElementId>,
    inner_elements: BTreeSet<ElementId>,
    junction_elements: BTreeSet<ElementId>,
}

impl ElementCensus {
    /// Elements touching at least one endpoint node.
    #[rustfmt::skip]
    #[must_use]
    pub fn end_elements(&self) -> &BTreeSet<ElementId> { &self.end_elements }

    /// Elements touching at least one pass-through node.
    #[rustfmt::skip]
    #[must_use]
    pub fn inner_elements(&self) -> &BTreeSet<ElementId> { &self.inner_elements }

    /// Elements touching at least one junction node.
    #[rustfmt::skip]
    #[must_use]
    pub fn junction_elements(&self) -> &BTreeSet<ElementId> { &self.junction_elements }
}
