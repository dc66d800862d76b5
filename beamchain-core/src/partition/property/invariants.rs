//! Partition invariants checked against generated lattices.
//!
//! - **Completeness**: every element lands in exactly one chain.
//! - **Boundaries**: chain terminals are endpoint or junction nodes and every
//!   node between two consecutive chain elements is a pass-through node.
//! - **Seed independence**: walking from any member rebuilds the same chain.
//! - **Determinism**: repeated runs agree, and both selection orders yield the
//!   same set of chains.
//! - **Loop reporting**: a failure names a closed component of pass-through
//!   nodes and nothing else.

use std::collections::{BTreeSet, HashSet};

use proptest::test_runner::{TestCaseError, TestCaseResult};

use crate::{
    Chain, ChainWalker, ConnectivityModel, ElementId, NodeClass, NodeClassifier, NodeId,
    Partition, SelectionOrder, WalkError, partition_all,
};

use super::types::{LatticeFixture, LoopExpectation};

/// Runs every partition invariant for `fixture`.
pub(super) fn run_partition_property(fixture: &LatticeFixture) -> TestCaseResult {
    let model = ConnectivityModel::try_from_elements(fixture.elements.iter().copied())
        .map_err(|err| TestCaseError::fail(format!("model failed: {err} ({:?})", fixture.shape)))?;

    match partition_all(&model, SelectionOrder::AscendingId) {
        Ok(partition) => {
            if fixture.loops == LoopExpectation::Always {
                return Err(TestCaseError::fail(format!(
                    "{:?} fixture partitioned despite its ring",
                    fixture.shape
                )));
            }
            validate_completeness(&model, &partition)?;
            validate_boundaries(&model, &partition)?;
            validate_seed_independence(&model, &partition)?;
            validate_determinism(&model, &partition)
        }
        Err(WalkError::NonTerminatingChain { elements, .. }) => {
            if fixture.loops == LoopExpectation::Never {
                return Err(TestCaseError::fail(format!(
                    "{:?} fixture reported a loop of {} elements",
                    fixture.shape,
                    elements.len()
                )));
            }
            validate_closed_loop(&model, &elements)
        }
        Err(err) => Err(TestCaseError::fail(format!(
            "unexpected walk failure on {:?}: {err}",
            fixture.shape
        ))),
    }
}

fn validate_completeness(model: &ConnectivityModel, partition: &Partition) -> TestCaseResult {
    let mut seen = HashSet::with_capacity(model.element_count());
    for (index, chain) in partition.iter().enumerate() {
        for &element in chain.elements() {
            if !seen.insert(element) {
                return Err(TestCaseError::fail(format!(
                    "element {element} appears again in chain {index}"
                )));
            }
        }
    }
    let expected: HashSet<ElementId> = model.element_ids().collect();
    if seen != expected {
        return Err(TestCaseError::fail(format!(
            "partition covers {} elements, model has {}",
            seen.len(),
            expected.len()
        )));
    }
    Ok(())
}

fn validate_boundaries(model: &ConnectivityModel, partition: &Partition) -> TestCaseResult {
    let classifier = NodeClassifier::new(model);
    for (index, chain) in partition.iter().enumerate() {
        let (start, end) = chain.terminals();
        for terminal in [start, end] {
            if !classifier.classify(terminal).is_boundary() {
                return Err(TestCaseError::fail(format!(
                    "chain {index} ends at pass-through node {terminal}"
                )));
            }
        }
        let last = trace_path(model, chain, start)
            .map_err(|msg| TestCaseError::fail(format!("chain {index}: {msg}")))?;
        if last != end {
            return Err(TestCaseError::fail(format!(
                "chain {index} path ends at {last}, terminal is {end}"
            )));
        }
    }
    Ok(())
}

/// Follows `chain` from `start`, checking every interior node, and returns
/// the node reached after the last element.
fn trace_path(model: &ConnectivityModel, chain: &Chain, start: NodeId) -> Result<NodeId, String> {
    let mut node = start;
    for (step, &element) in chain.elements().iter().enumerate() {
        node = model
            .opposite_node(element, node)
            .map_err(|err| format!("step {step}: {err}"))?;
        let interior = step + 1 < chain.len();
        if interior {
            let incident = model.elements_of(node);
            let class = NodeClass::from_degree(incident.len());
            if class != NodeClass::PassThrough {
                return Err(format!("interior node {node} is a {class} node"));
            }
            if !incident.iter().all(|&other| chain.contains(other)) {
                return Err(format!("interior node {node} leaks out of the chain"));
            }
        }
    }
    Ok(node)
}

fn validate_seed_independence(model: &ConnectivityModel, partition: &Partition) -> TestCaseResult {
    let walker = ChainWalker::new(model);
    for chain in partition {
        let expected: BTreeSet<ElementId> = chain.elements().iter().copied().collect();
        for &seed in chain.elements() {
            let rebuilt = walker
                .chain_containing(seed)
                .map_err(|err| TestCaseError::fail(format!("reseeding at {seed}: {err}")))?;
            let actual: BTreeSet<ElementId> = rebuilt.elements().iter().copied().collect();
            if actual != expected {
                return Err(TestCaseError::fail(format!(
                    "seed {seed} rebuilt {} elements instead of {}",
                    actual.len(),
                    expected.len()
                )));
            }
        }
    }
    Ok(())
}

fn validate_determinism(model: &ConnectivityModel, partition: &Partition) -> TestCaseResult {
    let again = partition_all(model, SelectionOrder::AscendingId)
        .map_err(|err| TestCaseError::fail(format!("second run failed: {err}")))?;
    if &again != partition {
        return Err(TestCaseError::fail("repeated run produced different chains"));
    }

    let by_input = partition_all(model, SelectionOrder::InputOrder)
        .map_err(|err| TestCaseError::fail(format!("input-order run failed: {err}")))?;
    if chain_sets(&by_input) != chain_sets(partition) {
        return Err(TestCaseError::fail(
            "selection order changed chain membership",
        ));
    }
    Ok(())
}

fn chain_sets(partition: &Partition) -> BTreeSet<Vec<ElementId>> {
    partition.iter().map(Chain::sorted_elements).collect()
}

fn validate_closed_loop(model: &ConnectivityModel, elements: &[ElementId]) -> TestCaseResult {
    let members: HashSet<ElementId> = elements.iter().copied().collect();
    for &element in elements {
        let (first, second) = model
            .nodes_of(element)
            .map_err(|err| TestCaseError::fail(format!("loop member {element}: {err}")))?;
        for node in [first, second] {
            let incident = model.elements_of(node);
            if incident.len() != 2 {
                return Err(TestCaseError::fail(format!(
                    "loop node {node} has degree {}",
                    incident.len()
                )));
            }
            if !incident.iter().all(|other| members.contains(other)) {
                return Err(TestCaseError::fail(format!(
                    "loop node {node} touches an element outside the loop"
                )));
            }
        }
    }
    Ok(())
}
