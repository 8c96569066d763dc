pub mod error;
pub mod utils;

pub use error::*;
pub use utils::changelog::{
    ChangelogConfig, ChangelogEntry, ExtractionError, ReleaseStatus, ValidatedBump,
    ValidationError, extract_entries, extract_versions, validate_changelog,
    validate_changelog_file,
};
pub use utils::config::{ChlogcheckConfig, PreflightConfig};
pub use utils::git_ops::{CommitAuthor, GitOps, GitRepository};
pub use utils::preflight::{PreflightCondition, PreflightReport};
pub use utils::version::{BumpViolation, SemanticVersion, VersionField, classify_bump};
