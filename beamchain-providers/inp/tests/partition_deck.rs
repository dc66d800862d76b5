//! Reads a generated deck, partitions it, and renders the element sets.

use std::fmt::Write as _;

use beamchain_core::{ElementFeed, PartitionerBuilder};
use beamchain_providers_inp::{ElsetWriter, GroupNaming, InpBeamFeed, LineSelection};
use beamchain_test_support::lattice::{RawElement, comb};
use rstest::rstest;

fn deck(elements: &[RawElement]) -> String {
    let mut text = String::from("*Part, name=lattice\n*Element, type=B31, elset=struts\n");
    for (element, first, second) in elements {
        writeln!(text, "{element:>8}, {first:>8}, {second:>8}").expect("write to string");
    }
    text.push_str("*End Part\n");
    text
}

#[rstest]
fn comb_deck_round_trips_into_elsets() {
    let raw = comb(4, 2);
    let feed = InpBeamFeed::try_from_reader("comb", deck(&raw).as_bytes(), LineSelection::BeamSections)
        .expect("deck must parse");
    assert_eq!(feed.len(), raw.len());

    let report = PartitionerBuilder::new()
        .build()
        .run(&feed)
        .expect("comb partitions");
    assert_eq!(report.partition().len(), 9);

    let text = ElsetWriter::default().render_partition(report.partition(), &GroupNaming::default());
    assert_eq!(text.matches("*Elset, elset=beams_").count(), 9);
    assert!(text.starts_with("*Elset, elset=beams_000001\n1,2,\n"));
    assert!(text.contains("*Elset, elset=beams_000009\n"));

    let listed: usize = text
        .lines()
        .filter(|line| !line.starts_with('*'))
        .map(|line| line.matches(',').count())
        .sum();
    assert_eq!(listed, raw.len());
}
