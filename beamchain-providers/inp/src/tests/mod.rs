pub(crate) use super::{ElsetWriter, GroupNaming, InpBeamFeed, InpProviderError, LineSelection};

mod elset;
mod errors;
