use super::changelog::ChangelogConfig;
use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::ffi::OsString;
use std::path::{Path, PathBuf};

pub const CONFIG_FILE_NAME: &str = "chlogcheck.toml";
/// environment variable naming the repository to inspect
pub const REPO_PATH_ENV: &str = "REPO_PATH";
pub const DEFAULT_RELEASE_BOT_AUTHOR: &str = "tf-release-bot";

/// configuration for the git preflight checks
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PreflightConfig {
    /// run preflight checks before validating
    pub enabled: bool,

    /// skip validation when the repository has no tags yet
    pub require_tags: bool,

    /// author name used by the automated release process
    pub release_bot_author: String,
}

impl PreflightConfig {
    pub fn require_tags(mut self, required: bool) -> Self {
        self.require_tags = required;
        self
    }

    pub fn release_bot_author(mut self, author: impl Into<String>) -> Self {
        self.release_bot_author = author.into();
        self
    }
}

impl Default for PreflightConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            require_tags: true,
            release_bot_author: DEFAULT_RELEASE_BOT_AUTHOR.to_string(),
        }
    }
}

/// main configuration for chlogcheck
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ChlogcheckConfig {
    /// changelog-related configuration
    #[serde(default)]
    pub changelog: ChangelogConfig,

    /// preflight configuration
    #[serde(default)]
    pub preflight: PreflightConfig,
}

impl ChlogcheckConfig {
    /// load configuration from a TOML file
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path).map_err(|e| Error::FileReadError {
            path: path.to_path_buf(),
            source: e,
        })?;

        toml::from_str(&contents).map_err(|e| Error::TomlParseError {
            path: path.to_path_buf(),
            source: e,
        })
    }

    /// find and load configuration file in repository
    ///
    /// returns default config if the file is missing or can't be parsed
    pub fn load_or_default<P: AsRef<Path>>(repo_path: P) -> Self {
        match Self::find_config_file(&repo_path) {
            Some(config_path) => match Self::load_from_file(&config_path) {
                Ok(config) => {
                    tracing::debug!("loaded configuration from {}", config_path.display());
                    config
                }
                Err(e) => {
                    tracing::warn!("ignoring configuration: {}", e);
                    Self::default()
                }
            },
            None => Self::default(),
        }
    }

    /// find configuration file in repository
    ///
    /// looks for `chlogcheck.toml` in the repository root
    pub fn find_config_file<P: AsRef<Path>>(repo_path: P) -> Option<PathBuf> {
        let config_path = repo_path.as_ref().join(CONFIG_FILE_NAME);

        if config_path.is_file() {
            Some(config_path)
        } else {
            None
        }
    }
}

/// pick the repository path to inspect
///
/// a non-empty `REPO_PATH` replaces the path given on the command line.
pub fn resolve_repo_path(cli_path: &Path, env_value: Option<OsString>) -> PathBuf {
    match env_value {
        Some(value) if !value.is_empty() => {
            tracing::debug!("using repository path from {}", REPO_PATH_ENV);
            PathBuf::from(value)
        }
        _ => cli_path.to_path_buf(),
    }
}
