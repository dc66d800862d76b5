use super::InpProviderError;
use crate::RecordDefect;
use rstest::rstest;

#[rstest]
#[case(
    InpProviderError::MalformedRecord { line: 4, defect: RecordDefect::UnexpectedKeyword },
    "INP_MALFORMED_RECORD",
    "line 4: keyword line inside the record range",
)]
#[case(
    InpProviderError::InvalidRange { start: 3, end: 3 },
    "INP_INVALID_RANGE",
    "line range 3:3 is empty",
)]
#[case(
    InpProviderError::RangeOutOfBounds { end: 9, lines: 4 },
    "INP_RANGE_OUT_OF_BOUNDS",
    "line range ends at 9 but the input has only 4 lines",
)]
#[case(
    InpProviderError::NoBeamSection,
    "INP_NO_BEAM_SECTION",
    "no beam element section found",
)]
fn codes_and_messages_are_stable(
    #[case] error: InpProviderError,
    #[case] code: &str,
    #[case] message: &str,
) {
    assert_eq!(error.code(), code);
    assert_eq!(error.to_string(), message);
}

#[rstest]
fn io_errors_keep_their_code() {
    let error = InpProviderError::from(std::io::Error::other("disk"));
    assert_eq!(error.code(), "INP_IO");
}
