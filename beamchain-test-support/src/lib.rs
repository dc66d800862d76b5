//! Shared test utilities used across beamchain crates.

pub mod ci;
pub mod lattice;
pub mod tracing;
