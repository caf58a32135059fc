// file: src/models/mod.rs
// description: data models module exports
// reference: internal module structure

pub mod repo_id;
pub mod report;

pub use repo_id::RepoId;
pub use report::{AuditReport, AuditSummary, RepoEntry, RepoStatus};
