// file: src/pipeline/auditor.rs
// description: linear audit run: load valid ids, scan sync dir, classify each repo
// reference: sequential pipeline orchestration

use crate::config::Config;
use crate::error::Result;
use crate::models::AuditReport;
use crate::pipeline::ProgressTracker;
use crate::repository::{RepoClassifier, RepoScanner, ValidRepoSet};
use crate::utils::Validator;
use std::path::Path;
use std::time::Instant;
use tracing::info;

pub struct Auditor {
    config: Config,
    show_progress: bool,
    colored: bool,
}

impl Auditor {
    pub fn new(config: Config) -> Self {
        Self {
            config,
            show_progress: false,
            colored: true,
        }
    }

    pub fn with_progress(mut self, show_progress: bool, colored: bool) -> Self {
        self.show_progress = show_progress;
        self.colored = colored;
        self
    }

    pub fn run(&self, repo_ids: &Path, sync_dir: &Path) -> Result<AuditReport> {
        let start = Instant::now();

        Validator::validate_repo_ids_file(repo_ids)?;
        Validator::validate_sync_root(sync_dir)?;

        let valid = ValidRepoSet::load(repo_ids, self.config.audit.skip_blank_lines)?;
        self.audit(&valid, sync_dir, start)
    }

    fn audit(&self, valid: &ValidRepoSet, sync_dir: &Path, start: Instant) -> Result<AuditReport> {
        let scanner = RepoScanner::new(self.config.audit.clone());
        let repos = scanner.scan(sync_dir)?;

        let classifier = RepoClassifier::new(valid, self.config.audit.config_marker.clone());
        let mut tracker = if self.show_progress {
            ProgressTracker::with_color(repos.len(), self.colored)
        } else {
            ProgressTracker::hidden(repos.len())
        };

        let mut report = AuditReport::new(valid.len());
        for repo in &repos {
            let entry = classifier.classify(repo)?;
            tracker.record(entry.status);
            report.push(entry);
        }
        tracker.finish();
        debug_assert_eq!(tracker.summary(), report.summary);

        info!(
            "Audit of {} repos complete in {:.2}s",
            report.total(),
            start.elapsed().as_secs_f64()
        );

        Ok(report)
    }
}
