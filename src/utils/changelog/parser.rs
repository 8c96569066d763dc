// changelog heading extraction

use super::types::{ChangelogEntry, ExtractionError, ReleaseStatus};
use crate::utils::version::SemanticVersion;

const HEADING_PREFIX: &str = "## ";
const UNRELEASED_MARKER: &str = " (Unreleased)";

/// match one or more ascii digits at the start of `s`
fn take_digits(s: &str) -> Option<(&str, &str)> {
    let end = s
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(s.len());
    if end == 0 {
        return None;
    }
    Some(s.split_at(end))
}

/// match `\d+\.\d+\.\d+` at the start of `s`, returning (version, rest)
fn take_version(s: &str) -> Option<(&str, &str)> {
    let (_, rest) = take_digits(s)?;
    let rest = rest.strip_prefix('.')?;
    let (_, rest) = take_digits(rest)?;
    let rest = rest.strip_prefix('.')?;
    let (_, rest) = take_digits(rest)?;

    let len = s.len() - rest.len();
    Some((&s[..len], rest))
}

/// match ` (Month D, YYYY)` at the start of `s`, returning (date, rest)
///
/// the month is a capitalized ascii word, the day one or two digits and the
/// year exactly four digits
fn take_date(s: &str) -> Option<(&str, &str)> {
    let inner = s.strip_prefix(" (")?;

    let mut chars = inner.char_indices();
    let (_, first) = chars.next()?;
    if !first.is_ascii_uppercase() {
        return None;
    }
    let month_end = chars
        .find(|(_, c)| !c.is_ascii_lowercase())
        .map(|(i, _)| i)
        .unwrap_or(inner.len());
    if month_end < 2 {
        return None;
    }

    let rest = inner[month_end..].strip_prefix(' ')?;
    let (day, rest) = take_digits(rest)?;
    if day.len() > 2 {
        return None;
    }

    let rest = rest.strip_prefix(", ")?;
    let (year, rest) = take_digits(rest)?;
    if year.len() != 4 {
        return None;
    }

    let rest = rest.strip_prefix(')')?;
    let date_len = inner.len() - rest.len() - 1;
    Some((&inner[..date_len], rest))
}

/// try to match a heading of the requested kind starting at `offset`
///
/// `None` means no heading matches here; a heading whose version does not
/// parse is still a match and yields `MalformedVersionString`.
fn match_heading(
    text: &str,
    offset: usize,
    released: bool,
) -> Option<Result<ChangelogEntry, ExtractionError>> {
    let candidate = &text[offset..];
    let after_prefix = candidate.strip_prefix(HEADING_PREFIX)?;
    let (version_text, rest) = take_version(after_prefix)?;

    let (status, rest) = if released {
        let (date, rest) = take_date(rest)?;
        (
            ReleaseStatus::Released {
                date: date.to_string(),
            },
            rest,
        )
    } else {
        (ReleaseStatus::Unreleased, rest.strip_prefix(UNRELEASED_MARKER)?)
    };

    let version: SemanticVersion = match version_text.parse() {
        Ok(version) => version,
        Err(_) => {
            return Some(Err(ExtractionError::MalformedVersionString(
                version_text.to_string(),
            )));
        }
    };

    let heading_len = candidate.len() - rest.len();
    let line_number = text[..offset].matches('\n').count() + 1;

    Some(Ok(ChangelogEntry::new(
        candidate[..heading_len].to_string(),
        version,
        status,
        line_number,
    )))
}

fn find_first_heading(
    text: &str,
    released: bool,
) -> Option<Result<ChangelogEntry, ExtractionError>> {
    text.match_indices(HEADING_PREFIX)
        .find_map(|(offset, _)| match_heading(text, offset, released))
}

/// find the first dated (released) version heading anywhere in the text
pub fn find_released_entry(text: &str) -> Result<ChangelogEntry, ExtractionError> {
    find_first_heading(text, true).unwrap_or(Err(ExtractionError::MissingReleasedEntry))
}

/// find the first `(Unreleased)` version heading anywhere in the text
pub fn find_unreleased_entry(text: &str) -> Result<ChangelogEntry, ExtractionError> {
    find_first_heading(text, false).unwrap_or(Err(ExtractionError::MissingUnreleasedEntry))
}

/// locate the released and unreleased headings
///
/// the two searches are independent; document order between them does not
/// matter. the released entry is looked up first, so its errors are
/// reported before anything about the unreleased entry.
pub fn extract_entries(text: &str) -> Result<(ChangelogEntry, ChangelogEntry), ExtractionError> {
    let released = find_released_entry(text)?;
    let unreleased = find_unreleased_entry(text)?;
    Ok((released, unreleased))
}

/// extract the (released, unreleased) version pair from changelog text
pub fn extract_versions(
    text: &str,
) -> Result<(SemanticVersion, SemanticVersion), ExtractionError> {
    let (released, unreleased) = extract_entries(text)?;
    Ok((released.version, unreleased.version))
}
