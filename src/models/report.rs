// file: src/models/report.rs
// description: audit counters, per-repo results and the final report
// reference: internal data structures

use crate::models::RepoId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RepoStatus {
    Valid,
    ValidWithConfig,
    Invalid,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RepoEntry {
    pub id: RepoId,
    pub path: PathBuf,
    pub status: RepoStatus,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditSummary {
    pub valid: usize,
    pub valid_with_config: usize,
    pub invalid: usize,
}

impl AuditSummary {
    pub fn new() -> Self {
        Self::default()
    }

    /// A configured repo counts toward both `valid` and `valid_with_config`.
    pub fn record(&mut self, status: RepoStatus) {
        match status {
            RepoStatus::Valid => self.valid += 1,
            RepoStatus::ValidWithConfig => {
                self.valid += 1;
                self.valid_with_config += 1;
            }
            RepoStatus::Invalid => self.invalid += 1,
        }
    }

    pub fn total(&self) -> usize {
        self.valid + self.invalid
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuditReport {
    pub summary: AuditSummary,
    pub valid_ids_loaded: usize,
    pub entries: Vec<RepoEntry>,
    pub generated_at: DateTime<Utc>,
}

impl AuditReport {
    pub fn new(valid_ids_loaded: usize) -> Self {
        Self {
            summary: AuditSummary::new(),
            valid_ids_loaded,
            entries: Vec::new(),
            generated_at: Utc::now(),
        }
    }

    pub fn push(&mut self, entry: RepoEntry) {
        self.summary.record(entry.status);
        self.entries.push(entry);
    }

    pub fn stale(&self) -> impl Iterator<Item = &RepoEntry> {
        self.entries
            .iter()
            .filter(|entry| entry.status == RepoStatus::Invalid)
    }

    pub fn total(&self) -> usize {
        self.entries.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(namespace: &str, name: &str, status: RepoStatus) -> RepoEntry {
        RepoEntry {
            id: RepoId::new(namespace, name),
            path: PathBuf::from(format!("/sync/{}/{}", namespace, name)),
            status,
        }
    }

    #[test]
    fn test_summary_record() {
        let mut summary = AuditSummary::new();
        summary.record(RepoStatus::Valid);
        summary.record(RepoStatus::ValidWithConfig);
        summary.record(RepoStatus::Invalid);

        assert_eq!(summary.valid, 2);
        assert_eq!(summary.valid_with_config, 1);
        assert_eq!(summary.invalid, 1);
        assert_eq!(summary.total(), 3);
    }

    #[test]
    fn test_report_tracks_entries_and_stale() {
        let mut report = AuditReport::new(2);
        report.push(entry("acme", "widgets", RepoStatus::ValidWithConfig));
        report.push(entry("acme", "other", RepoStatus::Invalid));

        assert_eq!(report.total(), 2);
        assert_eq!(report.summary.total(), report.total());

        let stale: Vec<_> = report.stale().map(|e| e.id.key()).collect();
        assert_eq!(stale, vec!["acme/other".to_string()]);
    }

    #[test]
    fn test_status_serializes_snake_case() {
        let json = serde_json::to_string(&RepoStatus::ValidWithConfig).unwrap();
        assert_eq!(json, "\"valid_with_config\"");
    }
}
