// file: src/lib.rs
// description: library entry point and public api exports
// reference: rust library patterns

//! Audits a repository sync directory laid out as `namespace/repo` against a
//! list of valid repository ids, counting valid, configured and stale repos.

pub mod config;
pub mod error;
pub mod exporter;
pub mod models;
pub mod pipeline;
pub mod repository;
pub mod utils;

pub use config::{AuditConfig, Config, ReportConfig};
pub use error::{AuditError, Result};
pub use exporter::JsonExporter;
pub use models::{AuditReport, AuditSummary, RepoEntry, RepoId, RepoStatus};
pub use pipeline::{Auditor, ProgressTracker};
pub use repository::{DiscoveredRepo, RepoClassifier, RepoScanner, ValidRepoSet};
pub use utils::Validator;
