//! `.par` directive rendering for chain groups.
//!
//! Emits the `DVCON_SIZING` block that asks a downstream sizing run to treat
//! each named element group as one cluster.

mod dvcon;

pub use dvcon::{DvconError, DvconSizing};
