//! Abaqus-style `.inp` support: reads beam element records into an
//! [`beamchain_core::ElementFeed`] and renders chains back as `*Elset`
//! blocks.

mod elset;
mod errors;
mod keyword;
mod naming;
mod provider;
mod record;

pub use elset::ElsetWriter;
pub use errors::{InpProviderError, RecordDefect};
pub use naming::GroupNaming;
pub use provider::{InpBeamFeed, LineSelection};

#[cfg(test)]
mod tests;
