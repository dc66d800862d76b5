//! Group names for emitted chains.

/// Produces `prefix` followed by a 1-based, zero-padded chain number.
///
/// # Examples
/// ```
/// use beamchain_providers_inp::GroupNaming;
///
/// let naming = GroupNaming::default();
/// assert_eq!(naming.name(0), "beams_000001");
/// assert_eq!(GroupNaming::new("rod_", 3).name(41), "rod_042");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GroupNaming {
    prefix: String,
    width: usize,
}

impl GroupNaming {
    /// Default prefix.
    pub const DEFAULT_PREFIX: &'static str = "beams_";
    /// Default zero-pad width.
    pub const DEFAULT_WIDTH: usize = 6;

    /// Creates a naming scheme. Numbers wider than `width` are not truncated.
    #[must_use]
    pub fn new(prefix: impl Into<String>, width: usize) -> Self {
        Self {
            prefix: prefix.into(),
            width,
        }
    }

    /// The name prefix.
    #[must_use]
    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    /// Name of the chain at 0-based `index`.
    #[must_use]
    pub fn name(&self, index: usize) -> String {
        format!(
            "{}{:0width$}",
            self.prefix,
            index.saturating_add(1),
            width = self.width
        )
    }

    /// Names for the first `count` chains.
    pub fn names(&self, count: usize) -> impl Iterator<Item = String> + '_ {
        (0..count).map(|index| self.name(index))
    }
}

impl Default for GroupNaming {
    fn default() -> Self {
        Self::new(Self::DEFAULT_PREFIX, Self::DEFAULT_WIDTH)
    }
}
