use std::num::NonZeroUsize;

use super::{ElsetWriter, GroupNaming};
use beamchain_core::{ConnectivityModel, ElementId, SelectionOrder, partition_all};
use rstest::rstest;

fn ids(raw: &[u64]) -> Vec<ElementId> {
    raw.iter().copied().map(ElementId::new).collect()
}

#[rstest]
fn wraps_after_ten_ids_by_default() {
    let members = ids(&(1..=12).rev().collect::<Vec<_>>());
    let block = ElsetWriter::default().render("beams_000001", &members);
    assert_eq!(
        block,
        "*Elset, elset=beams_000001\n1,2,3,4,5,6,7,8,9,10,\n11,12,\n"
    );
}

#[rstest]
#[case(1, "*Elset, elset=g\n4,\n7,\n")]
#[case(2, "*Elset, elset=g\n4,7,\n")]
#[case(5, "*Elset, elset=g\n4,7,\n")]
fn honours_ids_per_line(#[case] per_line: usize, #[case] expected: &str) {
    let writer = ElsetWriter::new(NonZeroUsize::new(per_line).expect("non-zero"));
    assert_eq!(writer.render("g", &ids(&[7, 4])), expected);
}

#[rstest]
fn renders_partition_in_emission_order() {
    let model = ConnectivityModel::try_from_elements(
        [(1, 10, 20), (2, 20, 30), (3, 20, 40), (4, 40, 50)]
            .into_iter()
            .map(Into::into),
    )
    .expect("model");
    let partition = partition_all(&model, SelectionOrder::AscendingId).expect("partition");
    let text = ElsetWriter::default().render_partition(&partition, &GroupNaming::default());
    assert_eq!(
        text,
        "*Elset, elset=beams_000001\n1,\n\
         *Elset, elset=beams_000002\n2,\n\
         *Elset, elset=beams_000003\n3,4,\n"
    );
}
