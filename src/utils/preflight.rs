// preflight checks deciding whether changelog validation should run

use super::config::PreflightConfig;
use super::git_ops::GitOps;
use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;

/// a condition the repository must satisfy before validation runs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PreflightCondition {
    /// at least one release has been tagged with an annotated tag
    HasTags,
    /// HEAD was not committed by the release bot, i.e. no release just happened
    LatestCommitAuthorIsNotReleaseBot,
}

impl PreflightCondition {
    pub fn name(&self) -> &'static str {
        match self {
            PreflightCondition::HasTags => "hasTags",
            PreflightCondition::LatestCommitAuthorIsNotReleaseBot => {
                "latestCommitAuthorIsNotReleaseBot"
            }
        }
    }

    fn evaluate(&self, repo_path: &Path, config: &PreflightConfig) -> Result<bool> {
        match self {
            PreflightCondition::HasTags => GitOps::has_annotated_tags(repo_path),
            PreflightCondition::LatestCommitAuthorIsNotReleaseBot => {
                let author = GitOps::latest_commit_author(repo_path)?;
                Ok(author.name != config.release_bot_author)
            }
        }
    }
}

impl fmt::Display for PreflightCondition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// result of running the preflight checks
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PreflightReport {
    pub passed: bool,
    pub failed_condition: Option<PreflightCondition>,
}

impl PreflightReport {
    pub fn passed() -> Self {
        Self {
            passed: true,
            failed_condition: None,
        }
    }

    pub fn failed(condition: PreflightCondition) -> Self {
        Self {
            passed: false,
            failed_condition: Some(condition),
        }
    }
}

/// conditions to evaluate for a configuration, in evaluation order
pub fn conditions(config: &PreflightConfig) -> Vec<PreflightCondition> {
    let mut conditions = Vec::with_capacity(2);
    if config.require_tags {
        conditions.push(PreflightCondition::HasTags);
    }
    conditions.push(PreflightCondition::LatestCommitAuthorIsNotReleaseBot);
    conditions
}

/// run the preflight checks against a repository
///
/// stops at the first condition that does not hold. errors while
/// inspecting the repository name the condition being evaluated.
pub fn check<P: AsRef<Path>>(repo_path: P, config: &PreflightConfig) -> Result<PreflightReport> {
    let repo_path = repo_path.as_ref();

    for condition in conditions(config) {
        let ok = condition
            .evaluate(repo_path, config)
            .map_err(|e| Error::PreflightError {
                condition: condition.name().to_string(),
                source: Box::new(e),
            })?;

        if !ok {
            tracing::info!("preflight condition '{}' failed", condition);
            return Ok(PreflightReport::failed(condition));
        }
        tracing::debug!("preflight condition '{}' passed", condition);
    }

    Ok(PreflightReport::passed())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_condition_order() {
        let config = PreflightConfig::default();
        assert_eq!(
            conditions(&config),
            vec![
                PreflightCondition::HasTags,
                PreflightCondition::LatestCommitAuthorIsNotReleaseBot
            ]
        );
    }

    #[test]
    fn test_conditions_without_tag_requirement() {
        let config = PreflightConfig::default().require_tags(false);
        assert_eq!(
            conditions(&config),
            vec![PreflightCondition::LatestCommitAuthorIsNotReleaseBot]
        );
    }

    #[test]
    fn test_condition_names() {
        assert_eq!(PreflightCondition::HasTags.to_string(), "hasTags");
        assert_eq!(
            PreflightCondition::LatestCommitAuthorIsNotReleaseBot.to_string(),
            "latestCommitAuthorIsNotReleaseBot"
        );
    }

    #[test]
    fn test_check_outside_repository_names_condition() {
        let temp_dir = tempfile::TempDir::new().unwrap();
        let err = check(temp_dir.path(), &PreflightConfig::default()).unwrap_err();
        assert!(err.to_string().starts_with("failed to evaluate condition 'hasTags'"));
    }
}
