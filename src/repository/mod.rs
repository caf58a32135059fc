// file: src/repository/mod.rs
// description: Repository discovery and classification module exports
// reference: Internal module structure

pub mod classifier;
pub mod scanner;
pub mod valid_set;

pub use classifier::RepoClassifier;
pub use scanner::{DiscoveredRepo, RepoScanner};
pub use valid_set::ValidRepoSet;
