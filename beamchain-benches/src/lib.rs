//! Benchmark support crate for beamchain.
//!
//! Provides synthetic beam lattices and parameter types used by the Criterion
//! benchmarks for model construction and chain partitioning.

pub mod error;
pub mod params;
pub mod source;
