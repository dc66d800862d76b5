//! Builder utilities for configuring [`Partitioner`] runs.

use crate::{partition::SelectionOrder, partitioner::Partitioner};

/// Configures and constructs [`Partitioner`] instances.
///
/// # Examples
/// ```
/// use beamchain_core::{PartitionerBuilder, SelectionOrder};
///
/// let partitioner = PartitionerBuilder::new()
///     .with_selection_order(SelectionOrder::InputOrder)
///     .build();
/// assert_eq!(partitioner.selection_order(), SelectionOrder::InputOrder);
/// ```
#[derive(Debug, Clone, Default)]
pub struct PartitionerBuilder {
    selection_order: SelectionOrder,
}

impl PartitionerBuilder {
    /// Creates a builder populated with default parameters.
    ///
    /// # Examples
    /// ```
    /// use beamchain_core::{PartitionerBuilder, SelectionOrder};
    ///
    /// let builder = PartitionerBuilder::new();
    /// assert_eq!(builder.selection_order(), SelectionOrder::AscendingId);
    /// ```
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the order in which chain seeds are picked.
    #[must_use]
    pub const fn with_selection_order(mut self, order: SelectionOrder) -> Self {
        self.selection_order = order;
        self
    }

    /// Returns the configured selection order.
    #[must_use]
    pub const fn selection_order(&self) -> SelectionOrder {
        self.selection_order
    }

    /// Constructs the configured [`Partitioner`].
    #[must_use]
    pub const fn build(self) -> Partitioner {
        Partitioner::new(self.selection_order)
    }
}
