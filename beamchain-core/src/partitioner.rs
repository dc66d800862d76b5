//! Feed-level orchestration for the beamchain library.
//!
//! Provides the [`Partitioner`] entry point, which builds the connectivity
//! model from an [`ElementFeed`], classifies its nodes, and partitions it,
//! attaching the feed name to any failure.

use std::sync::Arc;

use tracing::{Span, field, info, instrument, warn};

use crate::{
    Result,
    classify::{ElementCensus, NodeCensus, NodeClassifier},
    error::{ModelError, PartitionError, WalkError},
    feed::ElementFeed,
    model::ConnectivityModel,
    partition::{Partition, SelectionOrder, partition_all},
};

/// Entry point for partitioning a feed into chains.
///
/// # Examples
/// ```
/// use beamchain_core::{InMemoryFeed, PartitionerBuilder};
///
/// let feed: InMemoryFeed = [(1, 10, 20), (2, 20, 30), (3, 30, 40)].into_iter().collect();
/// let report = PartitionerBuilder::new().build().run(&feed)?;
/// assert_eq!(report.partition().len(), 1);
/// assert_eq!(report.census().pass_through().len(), 2);
/// # Ok::<(), beamchain_core::PartitionError>(())
/// ```
#[derive(Debug, Clone)]
pub struct Partitioner {
    selection_order: SelectionOrder,
}

impl Partitioner {
    pub(crate) const fn new(selection_order: SelectionOrder) -> Self {
        Self { selection_order }
    }

    /// Returns the order in which chain seeds are picked.
    #[must_use]
    pub const fn selection_order(&self) -> SelectionOrder {
        self.selection_order
    }

    /// Partitions every element of `feed` into maximal chains.
    ///
    /// # Errors
    /// Returns [`PartitionError::EmptyFeed`] when the feed has no elements,
    /// [`PartitionError::Model`] when the elements do not form a valid model,
    /// and [`PartitionError::Walk`] when a closed loop or inconsistent
    /// adjacency stops the traversal.
    #[instrument(
        name = "core.partition",
        err,
        skip(self, feed),
        fields(
            feed = %feed.name(),
            elements = feed.len(),
            order = self.selection_order.as_str(),
            nodes = field::Empty,
            chains = field::Empty,
        ),
    )]
    pub fn run<F: ElementFeed>(&self, feed: &F) -> Result<PartitionReport> {
        let model = self.build_model(feed)?;
        let span = Span::current();
        span.record("nodes", model.node_count());

        let census = NodeClassifier::new(&model).census();
        info!(
            endpoints = census.endpoints().len(),
            pass_through = census.pass_through().len(),
            junctions = census.junctions().len(),
            "nodes classified"
        );

        let partition = partition_all(&model, self.selection_order)
            .map_err(|error| self.wrap_walk_error(feed, error))?;
        span.record("chains", partition.len());
        info!(chains = partition.len(), "partition completed");

        Ok(PartitionReport {
            element_count: model.element_count(),
            partition,
            census,
        })
    }

    /// Classifies nodes and elements of `feed` without partitioning it.
    ///
    /// # Errors
    /// Returns [`PartitionError::EmptyFeed`] or [`PartitionError::Model`] as
    /// for [`Self::run`].
    #[instrument(
        name = "core.classify",
        err,
        skip(self, feed),
        fields(feed = %feed.name(), elements = feed.len()),
    )]
    pub fn classify<F: ElementFeed>(&self, feed: &F) -> Result<ClassificationReport> {
        let model = self.build_model(feed)?;
        let classifier = NodeClassifier::new(&model);
        let report = ClassificationReport {
            element_count: model.element_count(),
            nodes: classifier.census(),
            elements: classifier.element_census(),
        };
        info!(
            nodes = report.nodes.len(),
            junctions = report.nodes.junctions().len(),
            "classification completed"
        );
        Ok(report)
    }

    fn build_model<F: ElementFeed>(&self, feed: &F) -> Result<ConnectivityModel> {
        if feed.is_empty() {
            warn!(feed = feed.name(), "element feed is empty, returning error");
            return Err(PartitionError::EmptyFeed {
                feed: Arc::from(feed.name()),
            });
        }
        ConnectivityModel::try_from_elements(feed.elements().iter().copied())
            .map_err(|error| self.wrap_model_error(feed, error))
    }

    fn wrap_model_error<F: ElementFeed>(&self, feed: &F, error: ModelError) -> PartitionError {
        PartitionError::Model {
            feed: Arc::from(feed.name()),
            error,
        }
    }

    fn wrap_walk_error<F: ElementFeed>(&self, feed: &F, error: WalkError) -> PartitionError {
        PartitionError::Walk {
            feed: Arc::from(feed.name()),
            error,
        }
    }
}

/// Outcome of [`Partitioner::run`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PartitionReport {
    element_count: usize,
    partition: Partition,
    census: NodeCensus,
}

impl PartitionReport {
    /// The chains, in emission order.
    #[rustfmt::skip]
    #[must_use]
    pub const fn partition(&self) -> &Partition { &self.partition }

    /// Node classes of the partitioned model.
    #[rustfmt::skip]
    #[must_use]
    pub const fn census(&self) -> &NodeCensus { &self.census }

    /// Number of elements read from the feed.
    #[rustfmt::skip]
    #[must_use]
    pub const fn element_count(&self) -> usize { self.element_count }

    /// Consumes the report and returns the partition.
    #[must_use]
    pub fn into_partition(self) -> Partition {
        self.partition
    }
}

/// Outcome of [`Partitioner::classify`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassificationReport {
    element_count: usize,
    nodes: NodeCensus,
    elements: ElementCensus,
}

impl ClassificationReport {
    /// Node classes.
    #[rustfmt::skip]
    #[must_use]
    pub const fn nodes(&self) -> &NodeCensus { &self.nodes }

    /// Element classes.
    #[rustfmt::skip]
    #[must_use]
    pub const fn elements(&self) -> &ElementCensus { &self.elements }

    /// Number of elements read from the feed.
    #[rustfmt::skip]
    #[must_use]
    pub const fn element_count(&self) -> usize { self.element_count }
}
