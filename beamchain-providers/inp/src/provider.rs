//! Beam element feed read from `.inp` text.
use std::{
    fs::File,
    io::{BufRead, BufReader},
    path::Path,
};

use beamchain_core::{BeamElement, ElementFeed};
use tracing::{debug, instrument};

use crate::errors::{InpProviderError, RecordDefect};
use crate::keyword::{LineKind, classify_line, opens_beam_section};
use crate::record::parse_record;

/// Which lines of the input hold beam records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LineSelection {
    /// Every `*Element` block whose type starts with `B`, up to the next
    /// keyword line.
    #[default]
    BeamSections,
    /// Lines `start..end`, 0-based and half-open. Every non-blank,
    /// non-comment line in the range must be a record.
    Range {
        /// First line read, 0-based.
        start: usize,
        /// One past the last line read.
        end: usize,
    },
}

/// Beam elements read from an `.inp` file, in file order.
#[derive(Debug, Clone)]
pub struct InpBeamFeed {
    name: String,
    elements: Vec<BeamElement>,
    sections: usize,
}

impl InpBeamFeed {
    /// Reads beam records from `path`.
    ///
    /// # Errors
    /// Returns [`InpProviderError::Io`] when the file cannot be opened or
    /// read, and any error of [`Self::try_from_reader`].
    pub fn try_from_path(
        name: impl Into<String>,
        path: impl AsRef<Path>,
        selection: LineSelection,
    ) -> Result<Self, InpProviderError> {
        let file = File::open(path)?;
        Self::try_from_reader(name, BufReader::new(file), selection)
    }

    /// Reads beam records from `reader`.
    ///
    /// # Errors
    /// Returns [`InpProviderError::MalformedRecord`] with the 1-based line
    /// number of the first bad record, [`InpProviderError::InvalidRange`] or
    /// [`InpProviderError::RangeOutOfBounds`] for a bad range, and
    /// [`InpProviderError::NoBeamSection`] when section detection finds no
    /// beam block.
    ///
    /// # Examples
    /// ```
    /// use beamchain_core::ElementFeed;
    /// use beamchain_providers_inp::{InpBeamFeed, LineSelection};
    ///
    /// let text = "*Node\n10, 0.0, 0.0\n*Element, type=B31\n1, 10, 20\n2, 20, 30\n*End Part\n";
    /// let feed = InpBeamFeed::try_from_reader("demo", text.as_bytes(), LineSelection::BeamSections)?;
    /// assert_eq!(feed.len(), 2);
    /// # Ok::<(), beamchain_providers_inp::InpProviderError>(())
    /// ```
    #[instrument(name = "inp.read", err, skip(name, reader, selection), fields(selection = ?selection))]
    pub fn try_from_reader<R: BufRead>(
        name: impl Into<String>,
        reader: R,
        selection: LineSelection,
    ) -> Result<Self, InpProviderError> {
        let (elements, sections) = match selection {
            LineSelection::BeamSections => read_beam_sections(reader)?,
            LineSelection::Range { start, end } => (read_range(reader, start, end)?, 0),
        };
        debug!(elements = elements.len(), sections, "beam records read");
        Ok(Self {
            name: name.into(),
            elements,
            sections,
        })
    }

    /// Number of beam `*Element` blocks read. Zero for range selections.
    #[must_use]
    pub const fn section_count(&self) -> usize {
        self.sections
    }

    /// Consumes the feed and returns its elements.
    #[must_use]
    pub fn into_elements(self) -> Vec<BeamElement> {
        self.elements
    }
}

impl ElementFeed for InpBeamFeed {
    fn name(&self) -> &str {
        &self.name
    }

    fn elements(&self) -> &[BeamElement] {
        &self.elements
    }
}

fn read_beam_sections<R: BufRead>(
    reader: R,
) -> Result<(Vec<BeamElement>, usize), InpProviderError> {
    let mut elements = Vec::new();
    let mut sections = 0_usize;
    let mut in_section = false;
    for (index, line) in reader.lines().enumerate() {
        let line = line?;
        match classify_line(&line) {
            LineKind::Blank | LineKind::Comment => {}
            LineKind::Keyword(keyword) => {
                in_section = opens_beam_section(keyword);
                if in_section {
                    sections += 1;
                    debug!(line = index + 1, keyword, "beam section opened");
                }
            }
            LineKind::Data(data) if in_section => {
                elements.push(parse_at(index, data)?);
            }
            LineKind::Data(_) => {}
        }
    }
    if sections == 0 {
        return Err(InpProviderError::NoBeamSection);
    }
    Ok((elements, sections))
}

fn read_range<R: BufRead>(
    reader: R,
    start: usize,
    end: usize,
) -> Result<Vec<BeamElement>, InpProviderError> {
    if start >= end {
        return Err(InpProviderError::InvalidRange { start, end });
    }
    let mut elements = Vec::new();
    let mut lines = 0_usize;
    for (index, line) in reader.lines().enumerate().take(end) {
        let line = line?;
        lines = index + 1;
        if index < start {
            continue;
        }
        match classify_line(&line) {
            LineKind::Blank | LineKind::Comment => {}
            LineKind::Keyword(_) => {
                return Err(InpProviderError::MalformedRecord {
                    line: index + 1,
                    defect: RecordDefect::UnexpectedKeyword,
                });
            }
            LineKind::Data(data) => elements.push(parse_at(index, data)?),
        }
    }
    if lines < end {
        return Err(InpProviderError::RangeOutOfBounds { end, lines });
    }
    Ok(elements)
}

fn parse_at(index: usize, data: &str) -> Result<BeamElement, InpProviderError> {
    parse_record(data).map_err(|defect| InpProviderError::MalformedRecord {
        line: index + 1,
        defect,
    })
}
