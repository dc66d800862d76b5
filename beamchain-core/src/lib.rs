//! Beamchain core library.
//!
//! Partitions the beam elements of a finite-element mesh into maximal chains:
//! runs of elements joined end to end through nodes that touch exactly two
//! elements. Chains end at free ends (one incident element) and at junctions
//! (three or more).
#![cfg_attr(docsrs, feature(doc_cfg))]

mod builder;
mod classify;
mod error;
mod feed;
mod model;
mod partition;
mod partitioner;
#[cfg(test)]
mod test_utils;
mod walk;

pub use crate::{
    builder::PartitionerBuilder,
    classify::{ElementCensus, NodeCensus, NodeClass, NodeClassifier},
    error::{
        ModelError, ModelErrorCode, PartitionError, PartitionErrorCode, Result, WalkError,
        WalkErrorCode,
    },
    feed::{ElementFeed, InMemoryFeed},
    model::{BeamElement, ConnectivityModel, ElementId, NodeId},
    partition::{Partition, SelectionOrder, partition_all},
    partitioner::{ClassificationReport, PartitionReport, Partitioner},
    walk::{Chain, ChainWalker, Walk},
};
