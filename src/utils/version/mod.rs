// semantic version model and bump classification

pub mod bump;
pub mod types;

pub use bump::{BumpViolation, classify_bump};
pub use types::{ParseVersionError, SemanticVersion, VersionField};
