// testing utilities for building fixture git repositories

pub mod git_utils;

pub use git_utils::TestGitRepo;
