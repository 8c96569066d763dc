pub mod changelog;
pub mod config;
pub mod git_ops;
pub mod preflight;
pub mod version;

pub mod testing;
