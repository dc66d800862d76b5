//! `*Elset` rendering for partitioned chains.
use std::{fmt::Write as _, num::NonZeroUsize};

use beamchain_core::{ElementId, Partition};

use crate::naming::GroupNaming;

/// Renders element sets as `.inp` `*Elset` blocks.
///
/// Each block is a `*Elset, elset=NAME` header followed by the member ids in
/// ascending order, each followed by a comma, wrapped after
/// [`Self::ids_per_line`] ids.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ElsetWriter {
    ids_per_line: NonZeroUsize,
}

impl ElsetWriter {
    /// Ids per line used by [`Default`].
    pub const DEFAULT_IDS_PER_LINE: NonZeroUsize = NonZeroUsize::MIN.saturating_add(9);

    /// Creates a writer wrapping after `ids_per_line` ids.
    #[must_use]
    pub const fn new(ids_per_line: NonZeroUsize) -> Self {
        Self { ids_per_line }
    }

    /// Ids written per data line.
    #[rustfmt::skip]
    #[must_use]
    pub const fn ids_per_line(&self) -> NonZeroUsize { self.ids_per_line }

    /// Renders one block for `members`.
    ///
    /// # Examples
    /// ```
    /// use beamchain_core::ElementId;
    /// use beamchain_providers_inp::ElsetWriter;
    ///
    /// let ids = [3, 1, 2].map(ElementId::new);
    /// let block = ElsetWriter::default().render("beams_000001", &ids);
    /// assert_eq!(block, "*Elset, elset=beams_000001\n1,2,3,\n");
    /// ```
    #[must_use]
    pub fn render(&self, name: &str, members: &[ElementId]) -> String {
        let mut out = String::new();
        self.push_block(&mut out, name, members);
        out
    }

    /// Renders one block per chain of `partition`, named by `naming` in
    /// emission order.
    #[must_use]
    pub fn render_partition(&self, partition: &Partition, naming: &GroupNaming) -> String {
        let mut out = String::new();
        for (index, chain) in partition.iter().enumerate() {
            self.push_block(&mut out, &naming.name(index), chain.elements());
        }
        out
    }

    fn push_block(&self, out: &mut String, name: &str, members: &[ElementId]) {
        let mut sorted = members.to_vec();
        sorted.sort_unstable();
        out.push_str("*Elset, elset=");
        out.push_str(name);
        for (position, id) in sorted.iter().enumerate() {
            if position % self.ids_per_line.get() == 0 {
                out.push('\n');
            }
            // Writing to a String cannot fail.
            let _ = write!(out, "{id},");
        }
        out.push('\n');
    }
}

impl Default for ElsetWriter {
    fn default() -> Self {
        Self::new(Self::DEFAULT_IDS_PER_LINE)
    }
}
