// file: src/pipeline/progress.rs
// description: progress display with running audit counters
// reference: uses indicatif for the spinner and tracks classification counts

use crate::models::{AuditSummary, RepoStatus};
use indicatif::{ProgressBar, ProgressDrawTarget, ProgressStyle};
use std::time::Duration;

pub struct ProgressTracker {
    bar: ProgressBar,
    summary: AuditSummary,
}

impl ProgressTracker {
    pub fn new(total_repos: usize) -> Self {
        Self::with_color(total_repos, true)
    }

    pub fn with_color(total_repos: usize, colored: bool) -> Self {
        Self {
            bar: create_progress_bar(total_repos as u64, colored),
            summary: AuditSummary::new(),
        }
    }

    /// A tracker that counts but never draws.
    pub fn hidden(total_repos: usize) -> Self {
        let bar = ProgressBar::with_draw_target(
            Some(total_repos as u64),
            ProgressDrawTarget::hidden(),
        );
        Self {
            bar,
            summary: AuditSummary::new(),
        }
    }

    pub fn record(&mut self, status: RepoStatus) {
        self.summary.record(status);
        self.bar.inc(1);
        self.bar.set_message(format!(
            "Valid: {} | With config: {} | Invalid: {}",
            self.summary.valid, self.summary.valid_with_config, self.summary.invalid
        ));
    }

    pub fn finish(&self) {
        self.bar.finish_and_clear();
    }

    pub fn summary(&self) -> AuditSummary {
        self.summary
    }
}

impl Drop for ProgressTracker {
    fn drop(&mut self) {
        self.finish();
    }
}

fn create_progress_bar(total: u64, colored: bool) -> ProgressBar {
    let bar = ProgressBar::new(total);
    let template = if colored {
        "{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} {msg}"
    } else {
        "{spinner} [{elapsed_precise}] [{bar:40}] {pos}/{len} {msg}"
    };

    match ProgressStyle::default_bar().template(template) {
        Ok(style) => bar.set_style(style.progress_chars("=>-")),
        Err(_) => bar.set_draw_target(ProgressDrawTarget::hidden()),
    }
    bar.enable_steady_tick(Duration::from_millis(120));
    bar
}
