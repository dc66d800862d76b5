//! Command-line interface orchestration for beamchain.
//!
//! `partition` reads the beam records of an `.inp` file, splits them into
//! chains, and writes an `*Elset` file plus a `DVCON_SIZING` block.
//! `classify` reports node and element classes without writing anything.

mod artifacts;
mod commands;
mod failure;
mod summary;

pub use commands::{
    ClassifyCommand, Cli, CliError, Command, InputArgs, PartitionCommand, SeedOrder, run_cli,
};
pub use failure::report_failure;
pub use summary::{ClassifySummary, ExecutionSummary, PartitionSummary, render_summary};

#[cfg(test)]
mod test_helpers;
