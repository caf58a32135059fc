// file: src/pipeline/mod.rs
// description: pipeline module exports and public api
// reference: pipeline orchestration

mod auditor;
mod progress;

pub use auditor::Auditor;
pub use progress::ProgressTracker;
