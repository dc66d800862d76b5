//! Element feed abstraction consumed by [`crate::Partitioner`].

use crate::model::BeamElement;

/// A named, finite sequence of beam elements.
///
/// Providers implement this after parsing their source format; the core never
/// sees the text the elements came from.
///
/// # Examples
/// ```
/// use beamchain_core::{BeamElement, ElementFeed};
///
/// struct Fixed(Vec<BeamElement>);
///
/// impl ElementFeed for Fixed {
///     fn name(&self) -> &str { "fixed" }
///     fn elements(&self) -> &[BeamElement] { &self.0 }
/// }
///
/// let feed = Fixed(vec![BeamElement::from((1, 10, 20))]);
/// assert_eq!(feed.len(), 1);
/// assert!(!feed.is_empty());
/// ```
pub trait ElementFeed {
    /// Returns a human-readable name.
    fn name(&self) -> &str;

    /// Returns the elements in read order.
    fn elements(&self) -> &[BeamElement];

    /// Returns the number of elements in the feed.
    fn len(&self) -> usize {
        self.elements().len()
    }

    /// Returns whether the feed holds no elements.
    #[must_use]
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// An [`ElementFeed`] backed by an owned vector.
///
/// # Examples
/// ```
/// use beamchain_core::{BeamElement, ElementFeed, InMemoryFeed};
///
/// let feed = InMemoryFeed::new("demo", vec![BeamElement::from((1, 10, 20))]);
/// assert_eq!(feed.name(), "demo");
/// assert_eq!(feed.len(), 1);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InMemoryFeed {
    name: String,
    elements: Vec<BeamElement>,
}

impl InMemoryFeed {
    /// Creates a feed named `name` over `elements`.
    #[must_use]
    pub fn new(name: impl Into<String>, elements: Vec<BeamElement>) -> Self {
        Self {
            name: name.into(),
            elements,
        }
    }
}

impl<T> FromIterator<T> for InMemoryFeed
where
    T: Into<BeamElement>,
{
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::new("in-memory", iter.into_iter().map(Into::into).collect())
    }
}

impl ElementFeed for InMemoryFeed {
    fn name(&self) -> &str {
        &self.name
    }

    fn elements(&self) -> &[BeamElement] {
        &self.elements
    }
}
