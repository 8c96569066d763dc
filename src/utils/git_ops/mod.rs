pub mod repository;
pub mod types;

pub use repository::GitOps;
pub use types::*;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::testing::TestGitRepo;
    use std::fs;
    use tempfile::TempDir;

    fn init_repo(dir: &std::path::Path) -> TestGitRepo {
        TestGitRepo::init(dir).unwrap()
    }

    #[test]
    fn test_get_repository_info_from_subdirectory() {
        let temp_dir = TempDir::new().unwrap();
        init_repo(temp_dir.path());

        let sub_dir = temp_dir.path().join("subdir");
        fs::create_dir(&sub_dir).unwrap();

        let root = GitOps::get_repository_info(temp_dir.path()).unwrap();
        let from_sub = GitOps::get_repository_info(&sub_dir).unwrap();
        assert_eq!(root.root_path, from_sub.root_path);
    }

    #[test]
    fn test_get_repository_info() {
        let temp_dir = TempDir::new().unwrap();
        init_repo(temp_dir.path());

        let repo_info = GitOps::get_repository_info(temp_dir.path()).unwrap();
        assert!(!repo_info.is_bare);
        assert!(repo_info.root_path.exists());
        assert!(repo_info.git_dir.exists());
    }

    #[test]
    fn test_get_repository_info_error_non_repo() {
        let temp_dir = TempDir::new().unwrap();

        assert!(GitOps::get_repository_info(temp_dir.path()).is_err());
    }

    #[test]
    fn test_has_annotated_tags() {
        let temp_dir = TempDir::new().unwrap();
        let repo = init_repo(temp_dir.path());
        repo.write_and_commit("README.md", "hello", "initial commit", "Test User")
            .unwrap();

        assert!(!GitOps::has_annotated_tags(temp_dir.path()).unwrap());

        repo.create_annotated_tag("v0.0.1", "first release").unwrap();
        assert!(GitOps::has_annotated_tags(temp_dir.path()).unwrap());
        assert_eq!(
            GitOps::list_annotated_tags(temp_dir.path()).unwrap(),
            vec!["v0.0.1"]
        );
    }

    #[test]
    fn test_lightweight_tags_are_not_listed() {
        let temp_dir = TempDir::new().unwrap();
        let repo = init_repo(temp_dir.path());
        repo.write_and_commit("README.md", "hello", "initial commit", "Test User")
            .unwrap();
        repo.create_lightweight_tag("v0.0.1").unwrap();

        assert!(!GitOps::has_annotated_tags(temp_dir.path()).unwrap());

        repo.create_annotated_tag("v0.0.2", "second release").unwrap();
        assert_eq!(
            GitOps::list_annotated_tags(temp_dir.path()).unwrap(),
            vec!["v0.0.2"]
        );
    }

    #[test]
    fn test_latest_commit_author() {
        let temp_dir = TempDir::new().unwrap();
        let repo = init_repo(temp_dir.path());
        repo.write_and_commit("a.txt", "a", "first", "Alice").unwrap();
        repo.write_and_commit("b.txt", "b", "second", "Bob").unwrap();

        let author = GitOps::latest_commit_author(temp_dir.path()).unwrap();
        assert_eq!(author.name, "Bob");
        assert_eq!(author.email, "test@example.com");
    }

    #[test]
    fn test_latest_commit_author_without_commits() {
        let temp_dir = TempDir::new().unwrap();
        init_repo(temp_dir.path());

        let result = GitOps::latest_commit_author(temp_dir.path());
        assert!(matches!(result, Err(crate::Error::NoCommits { .. })));
    }
}
