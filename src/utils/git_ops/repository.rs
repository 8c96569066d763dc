use super::types::{CommitAuthor, GitRepository};
use crate::error::{Error, Result};
use gix::bstr::ByteSlice;
use std::path::Path;

pub struct GitOps;

impl GitOps {
    /// resolve the directory used for discovery (files use their parent)
    fn discovery_path(path: &Path) -> Result<&Path> {
        if path.is_file() {
            path.parent().ok_or_else(|| Error::RepositoryNotFound {
                path: path.to_path_buf(),
            })
        } else {
            Ok(path)
        }
    }

    /// get detailed repository information
    pub fn get_repository_info<P: AsRef<Path>>(path: P) -> Result<GitRepository> {
        let path = path.as_ref();
        let repo = gix::discover(Self::discovery_path(path)?)?;

        let is_bare = repo.is_bare();
        let git_dir = repo.git_dir().to_path_buf();

        // bare repositories have no work dir, use the git dir as root
        let root_path = if let Some(work_dir) = repo.work_dir() {
            work_dir.to_path_buf()
        } else {
            git_dir.clone()
        };

        Ok(GitRepository::new(root_path, is_bare, git_dir))
    }

    /// list the short names of all annotated tags in the repository
    ///
    /// lightweight tags point straight at a commit and are skipped
    pub fn list_annotated_tags<P: AsRef<Path>>(repo_path: P) -> Result<Vec<String>> {
        let repo = gix::discover(repo_path.as_ref())?;

        let references = repo.references().map_err(Error::from_git_error)?;
        let mut tags = Vec::new();

        for reference in references.tags().map_err(Error::from_git_error)? {
            let reference = reference.map_err(Error::GitError)?;
            let Some(target) = reference.try_id() else {
                continue;
            };

            let object = repo
                .find_object(target.detach())
                .map_err(Error::from_git_error)?;
            if object.kind == gix::object::Kind::Tag {
                tags.push(reference.name().shorten().to_str_lossy().into_owned());
            }
        }

        tracing::debug!(count = tags.len(), "listed annotated tags");
        Ok(tags)
    }

    /// check if the repository has at least one annotated tag
    pub fn has_annotated_tags<P: AsRef<Path>>(repo_path: P) -> Result<bool> {
        Ok(!Self::list_annotated_tags(repo_path)?.is_empty())
    }

    /// get the author of the HEAD commit
    pub fn latest_commit_author<P: AsRef<Path>>(repo_path: P) -> Result<CommitAuthor> {
        let repo_path = repo_path.as_ref();
        let repo = gix::discover(repo_path)?;

        let head = repo.head().map_err(Error::from_git_error)?;
        if head.is_unborn() {
            return Err(Error::NoCommits {
                path: repo_path.to_path_buf(),
            });
        }

        let commit = repo.head_commit().map_err(Error::from_git_error)?;
        let author = commit.author().map_err(Error::from_git_error)?;

        let author = CommitAuthor::new(
            author.name.to_str_lossy().into_owned(),
            author.email.to_str_lossy().into_owned(),
        );
        tracing::debug!(commit = %commit.id(), author = %author.name, "resolved HEAD author");

        Ok(author)
    }
}
