use std::fmt::Write as _;

use thiserror::Error;

/// Errors raised when configuring a [`DvconSizing`] block.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum DvconError {
    /// A block value was empty or contained whitespace.
    #[error("{field} `{value}` must be a single non-empty token")]
    InvalidToken {
        /// Which value was rejected.
        field: &'static str,
        /// The rejected text.
        value: String,
    },
}

impl DvconError {
    /// Stable machine-readable code for this error.
    #[must_use]
    pub const fn code(&self) -> &'static str {
        match self {
            Self::InvalidToken { .. } => "PAR_INVALID_TOKEN",
        }
    }
}

/// A `DVCON_SIZING` block listing element groups.
///
/// # Examples
/// ```
/// use beamchain_providers_par::DvconSizing;
///
/// let block = DvconSizing::default().render(["beams_000001", "beams_000002"]);
/// assert_eq!(
///     block,
///     "\nDVCON_SIZING\n  ID_NAME        = MY_DVCON_SIZING\n  CHECK_TYPE     = CLUSTER_GROUPS\n  \
///      EL_GROUP       = beams_000001\n  EL_GROUP       = beams_000002\nEND_\n",
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DvconSizing {
    id_name: String,
    check_type: String,
}

impl DvconSizing {
    /// Identifier used by [`Default`].
    pub const DEFAULT_ID_NAME: &'static str = "MY_DVCON_SIZING";
    /// Check type used by [`Default`].
    pub const DEFAULT_CHECK_TYPE: &'static str = "CLUSTER_GROUPS";

    /// Creates a block with the given identifier and check type.
    ///
    /// # Errors
    /// Returns [`DvconError::InvalidToken`] when either value is empty or
    /// contains whitespace, since it would break the line-oriented format.
    pub fn new(
        id_name: impl Into<String>,
        check_type: impl Into<String>,
    ) -> Result<Self, DvconError> {
        Ok(Self {
            id_name: token("ID_NAME", id_name.into())?,
            check_type: token("CHECK_TYPE", check_type.into())?,
        })
    }

    /// Replaces the identifier, keeping the check type.
    ///
    /// # Errors
    /// As for [`Self::new`].
    pub fn with_id_name(self, id_name: impl Into<String>) -> Result<Self, DvconError> {
        Ok(Self {
            id_name: token("ID_NAME", id_name.into())?,
            ..self
        })
    }

    /// The `ID_NAME` value.
    #[must_use]
    pub fn id_name(&self) -> &str {
        &self.id_name
    }

    /// The `CHECK_TYPE` value.
    #[must_use]
    pub fn check_type(&self) -> &str {
        &self.check_type
    }

    /// Renders the block with one `EL_GROUP` line per name, in order.
    #[must_use]
    pub fn render<I, S>(&self, groups: I) -> String
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut out = String::from("\nDVCON_SIZING\n");
        push_entry(&mut out, "ID_NAME", &self.id_name);
        push_entry(&mut out, "CHECK_TYPE", &self.check_type);
        for group in groups {
            push_entry(&mut out, "EL_GROUP", group.as_ref());
        }
        out.push_str("END_\n");
        out
    }
}

impl Default for DvconSizing {
    fn default() -> Self {
        Self {
            id_name: Self::DEFAULT_ID_NAME.to_owned(),
            check_type: Self::DEFAULT_CHECK_TYPE.to_owned(),
        }
    }
}

fn token(field: &'static str, value: String) -> Result<String, DvconError> {
    if value.is_empty() || value.chars().any(char::is_whitespace) {
        return Err(DvconError::InvalidToken { field, value });
    }
    Ok(value)
}

/// Keys are left-aligned in a 15-column field.
fn push_entry(out: &mut String, key: &str, value: &str) {
    let _ = writeln!(out, "  {key:<15}= {value}");
}
