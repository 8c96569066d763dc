use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GitRepository {
    pub root_path: PathBuf,
    pub is_bare: bool,
    pub git_dir: PathBuf,
}

impl GitRepository {
    pub fn new(root_path: PathBuf, is_bare: bool, git_dir: PathBuf) -> Self {
        Self {
            root_path,
            is_bare,
            git_dir,
        }
    }
}

/// author signature of a commit
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommitAuthor {
    pub name: String,
    pub email: String,
}

impl CommitAuthor {
    pub fn new(name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
        }
    }
}
