// changelog configuration

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// configuration for locating the changelog
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ChangelogConfig {
    /// name of the changelog file relative to the repository root
    /// (default: "CHANGELOG.md")
    pub file_name: String,
}

impl ChangelogConfig {
    /// path of the changelog inside a repository
    pub fn changelog_path<P: AsRef<Path>>(&self, repo_root: P) -> PathBuf {
        repo_root.as_ref().join(&self.file_name)
    }
}

impl Default for ChangelogConfig {
    fn default() -> Self {
        Self {
            file_name: "CHANGELOG.md".to_string(),
        }
    }
}
