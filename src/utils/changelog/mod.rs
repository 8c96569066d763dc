// changelog version bump verification

pub mod config;
pub mod parser;
pub mod types;
pub mod validator;

pub use config::ChangelogConfig;
pub use parser::{extract_entries, extract_versions, find_released_entry, find_unreleased_entry};
pub use types::{ChangelogEntry, ExtractionError, ReleaseStatus, ValidatedBump, ValidationError};
pub use validator::{validate_changelog, validate_changelog_file};
