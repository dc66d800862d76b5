//! Property-based tests for chain partitioning.
//!
//! Generates random beam lattices (trees, trees with extra bracing, ladders,
//! disconnected forests, and forests with a detached ring) and checks that
//! every successful partition is complete, respects the chain boundary rule,
//! and is reproducible, while closed loops are reported with exactly the
//! elements of a pass-through ring.

mod invariants;
mod strategies;
mod types;
