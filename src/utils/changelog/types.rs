// changelog data structures

use crate::utils::version::{BumpViolation, SemanticVersion, VersionField};
use chrono::{Month, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;

/// release status carried by a version heading
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum ReleaseStatus {
    /// dated heading, e.g. `(April 20, 2019)`
    Released { date: String },
    /// `(Unreleased)` heading
    Unreleased,
}

/// a version heading located in changelog text
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChangelogEntry {
    /// full matched heading text, e.g. `## 2.4.1 (April 20, 2019)`
    pub heading: String,
    pub version: SemanticVersion,
    pub status: ReleaseStatus,
    /// 1-based line the heading starts on
    pub line_number: usize,
}

impl ChangelogEntry {
    pub fn new(
        heading: String,
        version: SemanticVersion,
        status: ReleaseStatus,
        line_number: usize,
    ) -> Self {
        Self {
            heading,
            version,
            status,
            line_number,
        }
    }

    /// interpret a released entry's date as a calendar date
    ///
    /// returns `None` for unreleased entries and for dates that only look
    /// like dates (`Smarch 40, 2020`)
    pub fn release_date(&self) -> Option<NaiveDate> {
        let ReleaseStatus::Released { date } = &self.status else {
            return None;
        };

        let (month, rest) = date.split_once(' ')?;
        let (day, year) = rest.split_once(", ")?;

        let month: Month = month.parse().ok()?;
        let day: u32 = day.parse().ok()?;
        let year: i32 = year.parse().ok()?;

        NaiveDate::from_ymd_opt(year, month.number_from_month(), day)
    }
}

/// failure to locate or read the two version headings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "text", rename_all = "snake_case")]
pub enum ExtractionError {
    MissingReleasedEntry,
    MissingUnreleasedEntry,
    MalformedVersionString(String),
}

impl fmt::Display for ExtractionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExtractionError::MissingReleasedEntry => {
                write!(f, "could not find previously released changelog entry")
            }
            ExtractionError::MissingUnreleasedEntry => {
                write!(f, "could not find unreleased changelog entry")
            }
            ExtractionError::MalformedVersionString(text) => {
                write!(f, "failed to parse semver from tag '{}'", text)
            }
        }
    }
}

impl std::error::Error for ExtractionError {}

/// any reason a changelog fails validation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ValidationError {
    Extraction(ExtractionError),
    Bump(BumpViolation),
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationError::Extraction(err) => write!(f, "{}", err),
            ValidationError::Bump(err) => write!(f, "{}", err),
        }
    }
}

impl std::error::Error for ValidationError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ValidationError::Extraction(err) => Some(err),
            ValidationError::Bump(err) => Some(err),
        }
    }
}

impl From<ExtractionError> for ValidationError {
    fn from(err: ExtractionError) -> Self {
        ValidationError::Extraction(err)
    }
}

impl From<BumpViolation> for ValidationError {
    fn from(err: BumpViolation) -> Self {
        ValidationError::Bump(err)
    }
}

/// outcome of a successful validation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidatedBump {
    pub released: ChangelogEntry,
    pub unreleased: ChangelogEntry,
    pub from: SemanticVersion,
    pub to: SemanticVersion,
    /// which field the bump incremented
    pub bump: VersionField,
}
