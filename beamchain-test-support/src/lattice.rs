//! Generators for beam lattices used by tests and benchmarks.
//!
//! Elements are produced as raw `(element, first_node, second_node)` triples
//! so this crate stays independent of the core types.

/// Raw element triple: `(element id, first node, second node)`.
pub type RawElement = (u64, u64, u64);

/// Incrementally assembles a lattice with fresh element and node ids.
///
/// # Examples
/// ```
/// use beamchain_test_support::lattice::LatticeBuilder;
///
/// let mut lattice = LatticeBuilder::new(1, 100);
/// let hub = lattice.fresh_node();
/// for _ in 0..3 {
///     lattice.run_from(hub, 2);
/// }
/// assert_eq!(lattice.finish().len(), 6);
/// ```
#[derive(Debug, Clone)]
pub struct LatticeBuilder {
    next_element: u64,
    next_node: u64,
    elements: Vec<RawElement>,
}

impl LatticeBuilder {
    /// Starts numbering elements at `first_element` and nodes at `first_node`.
    #[must_use]
    pub const fn new(first_element: u64, first_node: u64) -> Self {
        Self {
            next_element: first_element,
            next_node: first_node,
            elements: Vec::new(),
        }
    }

    /// Allocates a node id not yet used by this builder.
    pub const fn fresh_node(&mut self) -> u64 {
        let node = self.next_node;
        self.next_node += 1;
        node
    }

    /// Adds one element between `first` and `second`, returning its id.
    pub fn link(&mut self, first: u64, second: u64) -> u64 {
        let element = self.next_element;
        self.next_element += 1;
        self.elements.push((element, first, second));
        element
    }

    /// Adds `len` elements end to end starting at `start` and returns the far
    /// node.
    pub fn run_from(&mut self, start: u64, len: usize) -> u64 {
        let mut node = start;
        for _ in 0..len {
            let next = self.fresh_node();
            self.link(node, next);
            node = next;
        }
        node
    }

    /// Adds `len` elements forming a run between two existing nodes.
    ///
    /// A `len` of zero adds nothing.
    pub fn run_between(&mut self, start: u64, end: u64, len: usize) {
        if len == 0 {
            return;
        }
        let last = self.run_from(start, len - 1);
        self.link(last, end);
    }

    /// Adds a closed ring of `len` elements on fresh nodes.
    pub fn ring(&mut self, len: usize) {
        let start = self.fresh_node();
        self.run_between(start, start, len);
    }

    /// Returns the elements in creation order.
    #[must_use]
    pub fn finish(self) -> Vec<RawElement> {
        self.elements
    }
}

/// A single straight run of `len` elements numbered from 1.
///
/// # Examples
/// ```
/// use beamchain_test_support::lattice::straight_run;
///
/// assert_eq!(straight_run(2), vec![(1, 1, 2), (2, 2, 3)]);
/// ```
#[must_use]
pub fn straight_run(len: usize) -> Vec<RawElement> {
    let mut lattice = LatticeBuilder::new(1, 1);
    let start = lattice.fresh_node();
    lattice.run_from(start, len);
    lattice.finish()
}

/// `arms` runs of `arm_len` elements radiating from one hub node.
#[must_use]
pub fn star(arms: usize, arm_len: usize) -> Vec<RawElement> {
    let mut lattice = LatticeBuilder::new(1, 1);
    let hub = lattice.fresh_node();
    for _ in 0..arms {
        lattice.run_from(hub, arm_len);
    }
    lattice.finish()
}

/// A spine of `teeth + 1` segments with a tooth hanging off every interior
/// spine node. Each segment and tooth has `segment_len` elements.
///
/// Produces `(2 * teeth + 1) * segment_len` elements in as many chains.
#[must_use]
pub fn comb(teeth: usize, segment_len: usize) -> Vec<RawElement> {
    let mut lattice = LatticeBuilder::new(1, 1);
    let mut node = lattice.fresh_node();
    for _ in 0..teeth {
        node = lattice.run_from(node, segment_len);
        lattice.run_from(node, segment_len);
    }
    lattice.run_from(node, segment_len);
    lattice.finish()
}
