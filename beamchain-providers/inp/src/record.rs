//! Parsing of `element, node, node` data lines.

use beamchain_core::BeamElement;

use crate::errors::RecordDefect;

/// Parses one trimmed data line into a beam element.
///
/// Accepts a single trailing comma.
pub(crate) fn parse_record(data: &str) -> Result<BeamElement, RecordDefect> {
    let body = data.strip_suffix(',').unwrap_or(data);
    let fields: Vec<&str> = body.split(',').map(str::trim).collect();
    let &[element, first, second] = fields.as_slice() else {
        return Err(RecordDefect::FieldCount {
            found: fields.len(),
        });
    };
    Ok(BeamElement::from((
        parse_id("element", element)?,
        parse_id("first node", first)?,
        parse_id("second node", second)?,
    )))
}

fn parse_id(field: &'static str, value: &str) -> Result<u64, RecordDefect> {
    value.parse().map_err(|_| RecordDefect::InvalidNumber {
        field,
        value: value.to_owned(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use beamchain_core::{ElementId, NodeId};
    use rstest::rstest;

    #[rstest]
    #[case("1, 10, 20")]
    #[case("1,10,20")]
    #[case("1, 10, 20,")]
    #[case("  1 ,10 , 20 ,")]
    fn parses_well_formed_records(#[case] data: &str) {
        let element = parse_record(data.trim()).expect("record must parse");
        assert_eq!(element.id(), ElementId::new(1));
        assert_eq!(element.nodes(), (NodeId::new(10), NodeId::new(20)));
    }

    #[rstest]
    #[case("1, 10", RecordDefect::FieldCount { found: 2 })]
    #[case("1, 10, 20, 30", RecordDefect::FieldCount { found: 4 })]
    #[case("1, 10, 20,,", RecordDefect::FieldCount { found: 4 })]
    #[case(
        "x, 10, 20",
        RecordDefect::InvalidNumber { field: "element", value: "x".to_owned() },
    )]
    #[case(
        "1, -10, 20",
        RecordDefect::InvalidNumber { field: "first node", value: "-10".to_owned() },
    )]
    #[case(
        "1, 10, ",
        RecordDefect::InvalidNumber { field: "second node", value: String::new() },
    )]
    fn reports_defects(#[case] data: &str, #[case] expected: RecordDefect) {
        assert_eq!(parse_record(data), Err(expected));
    }
}
