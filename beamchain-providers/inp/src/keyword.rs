//! Line classification for `.inp` text.

/// What a physical line holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum LineKind<'a> {
    /// Empty or whitespace-only.
    Blank,
    /// `**` comment.
    Comment,
    /// `*Keyword, param=value, ...` with the leading `*` removed.
    Keyword(&'a str),
    /// Anything else.
    Data(&'a str),
}

pub(crate) fn classify_line(line: &str) -> LineKind<'_> {
    let trimmed = line.trim();
    if trimmed.is_empty() {
        LineKind::Blank
    } else if trimmed.starts_with("**") {
        LineKind::Comment
    } else if let Some(keyword) = trimmed.strip_prefix('*') {
        LineKind::Keyword(keyword)
    } else {
        LineKind::Data(trimmed)
    }
}

/// Whether `keyword` opens an element block of a beam type (`type=B...`).
///
/// Keyword and parameter names are case-insensitive.
pub(crate) fn opens_beam_section(keyword: &str) -> bool {
    let mut parts = keyword.split(',').map(str::trim);
    let is_element = parts
        .next()
        .is_some_and(|name| name.eq_ignore_ascii_case("element"));
    is_element
        && parts.any(|param| {
            param.split_once('=').is_some_and(|(key, value)| {
                key.trim().eq_ignore_ascii_case("type")
                    && value
                        .trim()
                        .chars()
                        .next()
                        .is_some_and(|c| c.eq_ignore_ascii_case(&'b'))
            })
        })
}
