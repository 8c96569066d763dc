use crate::error::{Error, Result};
use std::path::{Path, PathBuf};
use std::process::Command;

pub const TEST_EMAIL: &str = "test@example.com";

/// git repository driven through the git command line, for tests
pub struct TestGitRepo {
    repo_path: PathBuf,
}

impl TestGitRepo {
    /// initialize a new git repository at the given path
    pub fn init<P: AsRef<Path>>(path: P) -> Result<Self> {
        let repo = Self {
            repo_path: path.as_ref().to_path_buf(),
        };

        repo.git(&["init"], "initialize git repository")?;
        repo.git(&["config", "user.name", "Test User"], "configure user name")?;
        repo.git(&["config", "user.email", TEST_EMAIL], "configure user email")?;
        // signing would need keys on the test machine
        repo.git(&["config", "commit.gpgsign", "false"], "disable commit signing")?;
        repo.git(&["config", "tag.gpgsign", "false"], "disable tag signing")?;

        Ok(repo)
    }

    fn git(&self, args: &[&str], action: &str) -> Result<String> {
        let output = Command::new("git")
            .args(args)
            .current_dir(&self.repo_path)
            .output()
            .map_err(Error::IoError)?;

        if !output.status.success() {
            return Err(Error::GitError(Box::new(std::io::Error::other(format!(
                "failed to {}: {}",
                action,
                String::from_utf8_lossy(&output.stderr)
            )))));
        }

        Ok(String::from_utf8_lossy(&output.stdout).trim().to_string())
    }

    /// write a file (creating parent directories)
    pub fn write_file(&self, file_path: &str, content: &str) -> Result<()> {
        let full_path = self.repo_path.join(file_path);

        if let Some(parent) = full_path.parent() {
            std::fs::create_dir_all(parent).map_err(Error::IoError)?;
        }

        std::fs::write(full_path, content).map_err(Error::IoError)
    }

    /// stage everything and commit with the given author name
    pub fn commit_all_as(&self, message: &str, author: &str) -> Result<()> {
        self.git(&["add", "."], "add files")?;

        let author = format!("{} <{}>", author, TEST_EMAIL);
        self.git(
            &["commit", "--allow-empty", "-m", message, "--author", &author],
            "create commit",
        )?;

        Ok(())
    }

    /// write a file and commit it with the given author name
    pub fn write_and_commit(
        &self,
        file_path: &str,
        content: &str,
        message: &str,
        author: &str,
    ) -> Result<()> {
        self.write_file(file_path, content)?;
        self.commit_all_as(message, author)
    }

    /// create an annotated tag on HEAD
    pub fn create_annotated_tag(&self, name: &str, message: &str) -> Result<()> {
        self.git(&["tag", "-a", name, "-m", message], "create annotated tag")?;
        Ok(())
    }

    /// create a lightweight tag on HEAD
    pub fn create_lightweight_tag(&self, name: &str) -> Result<()> {
        self.git(&["tag", name], "create tag")?;
        Ok(())
    }

    /// get the repository path
    pub fn path(&self) -> &Path {
        &self.repo_path
    }
}
