//! Error types for the INP beam record provider.

use thiserror::Error;

/// Why a line inside a beam record region could not be read.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RecordDefect {
    /// The record did not split into element id and two node ids.
    #[error("expected 3 comma-separated fields, found {found}")]
    FieldCount {
        /// Number of fields present after trimming one trailing comma.
        found: usize,
    },
    /// A field was not an unsigned integer.
    #[error("{field} `{value}` is not an unsigned integer")]
    InvalidNumber {
        /// Which field failed: `element`, `first node` or `second node`.
        field: &'static str,
        /// The trimmed text of the field.
        value: String,
    },
    /// A keyword line appeared inside an explicit record range.
    #[error("keyword line inside the record range")]
    UnexpectedKeyword,
}

/// Errors raised while reading beam records.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum InpProviderError {
    /// A record line could not be parsed.
    #[error("line {line}: {defect}")]
    MalformedRecord {
        /// 1-based line number in the input.
        line: usize,
        /// What was wrong with the line.
        defect: RecordDefect,
    },
    /// The requested line range is empty or reversed.
    #[error("line range {start}:{end} is empty")]
    InvalidRange {
        /// Requested start, 0-based inclusive.
        start: usize,
        /// Requested end, 0-based exclusive.
        end: usize,
    },
    /// The requested line range extends past the end of the input.
    #[error("line range ends at {end} but the input has only {lines} lines")]
    RangeOutOfBounds {
        /// Requested end, 0-based exclusive.
        end: usize,
        /// Number of lines in the input.
        lines: usize,
    },
    /// No `*Element` block with a beam type was found.
    #[error("no beam element section found")]
    NoBeamSection,
    /// Reading the input failed.
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),
}

impl InpProviderError {
    /// Stable machine-readable code for this error.
    #[must_use]
    pub const fn code(&self) -> &'static str {
        match self {
            Self::MalformedRecord { .. } => "INP_MALFORMED_RECORD",
            Self::InvalidRange { .. } => "INP_INVALID_RANGE",
            Self::RangeOutOfBounds { .. } => "INP_RANGE_OUT_OF_BOUNDS",
            Self::NoBeamSection => "INP_NO_BEAM_SECTION",
            Self::Io(_) => "INP_IO",
        }
    }
}
