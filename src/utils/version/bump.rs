// version bump classification

use super::types::{SemanticVersion, VersionField};
use serde::{Deserialize, Serialize};
use std::fmt;

/// reason a version transition is not a legal single-step bump
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum BumpViolation {
    /// the transition jumped over `expected_next`, which should have been
    /// released first
    VersionSkipped { expected_next: SemanticVersion },
    /// a field went backwards
    RetrogressiveUpdate {
        field: VersionField,
        from: u64,
        to: u64,
    },
    /// all three fields are identical
    VersionUnchanged,
}

impl fmt::Display for BumpViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BumpViolation::VersionSkipped { expected_next } => {
                write!(f, "version {} was skipped", expected_next)
            }
            BumpViolation::RetrogressiveUpdate { field, from, to } => {
                write!(
                    f,
                    "retrogressive {} version update from {} to {}",
                    field, from, to
                )
            }
            BumpViolation::VersionUnchanged => write!(f, "version did not change"),
        }
    }
}

impl std::error::Error for BumpViolation {}

/// classify the transition from the last released version `old` to the
/// pending version `new`
///
/// on success returns the field that was incremented. fields are checked
/// from most to least significant and the first irregular field decides the
/// violation; lower fields are not inspected once a higher one is irregular.
pub fn classify_bump(
    old: SemanticVersion,
    new: SemanticVersion,
) -> Result<VersionField, BumpViolation> {
    // major
    if Some(new.major) == old.major.checked_add(1) {
        if new.minor == 0 && new.patch == 0 {
            return Ok(VersionField::Major);
        }
        return Err(BumpViolation::VersionSkipped {
            expected_next: SemanticVersion::new(new.major, 0, 0),
        });
    } else if new.major > old.major {
        return Err(BumpViolation::VersionSkipped {
            expected_next: SemanticVersion::new(old.major + 1, 0, 0),
        });
    } else if new.major < old.major {
        return Err(BumpViolation::RetrogressiveUpdate {
            field: VersionField::Major,
            from: old.major,
            to: new.major,
        });
    }

    // minor, major unchanged
    if Some(new.minor) == old.minor.checked_add(1) {
        if new.patch == 0 {
            return Ok(VersionField::Minor);
        }
        return Err(BumpViolation::VersionSkipped {
            expected_next: SemanticVersion::new(new.major, new.minor, 0),
        });
    } else if new.minor > old.minor {
        return Err(BumpViolation::VersionSkipped {
            expected_next: SemanticVersion::new(old.major, old.minor + 1, 0),
        });
    } else if new.minor < old.minor {
        return Err(BumpViolation::RetrogressiveUpdate {
            field: VersionField::Minor,
            from: old.minor,
            to: new.minor,
        });
    }

    // patch, major and minor unchanged
    if Some(new.patch) == old.patch.checked_add(1) {
        return Ok(VersionField::Patch);
    } else if new.patch > old.patch {
        return Err(BumpViolation::VersionSkipped {
            expected_next: SemanticVersion::new(old.major, old.minor, old.patch + 1),
        });
    } else if new.patch < old.patch {
        return Err(BumpViolation::RetrogressiveUpdate {
            field: VersionField::Patch,
            from: old.patch,
            to: new.patch,
        });
    }

    Err(BumpViolation::VersionUnchanged)
}
