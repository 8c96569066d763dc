// changelog validation

use super::parser::extract_entries;
use super::types::{ValidatedBump, ValidationError};
use crate::error::{Error, Result};
use crate::utils::version::classify_bump;
use std::fs;
use std::path::Path;

/// validate that the unreleased entry is a single-step bump of the last
/// released entry
pub fn validate_changelog(text: &str) -> std::result::Result<ValidatedBump, ValidationError> {
    let (released, unreleased) = extract_entries(text)?;
    let from = released.version;
    let to = unreleased.version;

    let bump = classify_bump(from, to)?;

    Ok(ValidatedBump {
        released,
        unreleased,
        from,
        to,
        bump,
    })
}

/// read a changelog file and validate it
pub fn validate_changelog_file<P: AsRef<Path>>(path: P) -> Result<ValidatedBump> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|e| Error::FileReadError {
        path: path.to_path_buf(),
        source: e,
    })?;

    Ok(validate_changelog(&content)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::changelog::ExtractionError;
    use crate::utils::version::{BumpViolation, SemanticVersion, VersionField};

    #[test]
    fn test_valid_major_bump() {
        let changelog = "
## 3.0.0 (Unreleased)

lorem ipsum.

## 2.4.1 (April 20, 2019)

lorem ipsum.

## 2.4.0 (April 19, 2019)

lorem ipsum";
        let result = validate_changelog(changelog).unwrap();
        assert_eq!(result.from, SemanticVersion::new(2, 4, 1));
        assert_eq!(result.to, SemanticVersion::new(3, 0, 0));
        assert_eq!(result.bump, VersionField::Major);
        assert_eq!(result.released.line_number, 6);
    }

    #[test]
    fn test_valid_minor_bump() {
        let changelog = "
## 1.12.0 (Unreleased)
## 1.11.2 (June 05, 2020)

lorem ipsum.";
        let result = validate_changelog(changelog).unwrap();
        assert_eq!(result.bump, VersionField::Minor);
    }

    #[test]
    fn test_valid_patch_bump() {
        let changelog = "
## 4.2.12 (Unreleased)

Bug Fixes: fixed a bug

## 4.2.11 (June 8, 2015)";
        let result = validate_changelog(changelog).unwrap();
        assert_eq!(result.bump, VersionField::Patch);
    }

    #[test]
    fn test_retrogressive_update() {
        let err = validate_changelog("## 4.60.12 (Unreleased)\n## 4.61.11 (June 24, 2020)")
            .unwrap_err();
        assert_eq!(
            err,
            ValidationError::Bump(BumpViolation::RetrogressiveUpdate {
                field: VersionField::Minor,
                from: 61,
                to: 60,
            })
        );
        assert_eq!(
            err.to_string(),
            "retrogressive minor version update from 61 to 60"
        );
    }

    #[test]
    fn test_version_skipped() {
        let err = validate_changelog("## 5.10.0 (Unreleased)\n## 5.8.0 (November 23, 2019)")
            .unwrap_err();
        assert_eq!(
            err,
            ValidationError::Bump(BumpViolation::VersionSkipped {
                expected_next: SemanticVersion::new(5, 9, 0),
            })
        );
        assert_eq!(err.to_string(), "version 5.9.0 was skipped");
    }

    #[test]
    fn test_missing_released_entry() {
        let err = validate_changelog("\n## 0.1.0 (Unreleased)\nlorem ipsum.").unwrap_err();
        assert_eq!(
            err,
            ValidationError::Extraction(ExtractionError::MissingReleasedEntry)
        );
        assert_eq!(
            err.to_string(),
            "could not find previously released changelog entry"
        );
    }

    #[test]
    fn test_missing_unreleased_entry() {
        let changelog = "
## 11.2.0 (June 23, 2020)
lorem ipsum.
## 11.1.4 (June 22, 2020)
lorem ipsum.";
        let err = validate_changelog(changelog).unwrap_err();
        assert_eq!(err.to_string(), "could not find unreleased changelog entry");
    }

    #[test]
    fn test_unchanged_version() {
        let err =
            validate_changelog("## 1.2.3 (Unreleased)\n## 1.2.3 (May 1, 2020)").unwrap_err();
        assert_eq!(err, ValidationError::Bump(BumpViolation::VersionUnchanged));
    }

    #[test]
    fn test_validate_changelog_file_missing() {
        let result = validate_changelog_file("/nonexistent/CHANGELOG.md");
        assert!(matches!(result, Err(Error::FileReadError { .. })));
    }
}
