// semantic version value types

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// a plain `major.minor.patch` version
///
/// ordering is lexicographic over (major, minor, patch), which is what the
/// derived `Ord` gives for this field order
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct SemanticVersion {
    pub major: u64,
    pub minor: u64,
    pub patch: u64,
}

impl SemanticVersion {
    pub const fn new(major: u64, minor: u64, patch: u64) -> Self {
        Self {
            major,
            minor,
            patch,
        }
    }
}

impl fmt::Display for SemanticVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)
    }
}

/// error returned when a string is not a plain three-part version
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseVersionError {
    pub input: String,
    pub reason: String,
}

impl fmt::Display for ParseVersionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid version '{}': {}", self.input, self.reason)
    }
}

impl std::error::Error for ParseVersionError {}

impl FromStr for SemanticVersion {
    type Err = ParseVersionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let version = semver::Version::parse(s).map_err(|e| ParseVersionError {
            input: s.to_string(),
            reason: e.to_string(),
        })?;

        SemanticVersion::try_from(&version).map_err(|mut e| {
            e.input = s.to_string();
            e
        })
    }
}

impl TryFrom<&semver::Version> for SemanticVersion {
    type Error = ParseVersionError;

    fn try_from(version: &semver::Version) -> Result<Self, Self::Error> {
        if !version.pre.is_empty() || !version.build.is_empty() {
            return Err(ParseVersionError {
                input: version.to_string(),
                reason: "pre-release and build metadata are not allowed".to_string(),
            });
        }

        Ok(Self::new(version.major, version.minor, version.patch))
    }
}

/// one of the three components of a semantic version
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VersionField {
    Major,
    Minor,
    Patch,
}

impl fmt::Display for VersionField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            VersionField::Major => write!(f, "major"),
            VersionField::Minor => write!(f, "minor"),
            VersionField::Patch => write!(f, "patch"),
        }
    }
}
