// file: src/repository/classifier.rs
// description: repo classification against the valid id set and config marker
// reference: set membership plus on-disk marker existence check

use crate::error::{AuditError, Result};
use crate::models::{RepoEntry, RepoStatus};
use crate::repository::{DiscoveredRepo, ValidRepoSet};
use std::path::{Path, PathBuf};
use tracing::info;

pub struct RepoClassifier<'a> {
    valid: &'a ValidRepoSet,
    config_marker: PathBuf,
}

impl<'a> RepoClassifier<'a> {
    pub fn new(valid: &'a ValidRepoSet, config_marker: impl Into<PathBuf>) -> Self {
        Self {
            valid,
            config_marker: config_marker.into(),
        }
    }

    pub fn classify(&self, repo: &DiscoveredRepo) -> Result<RepoEntry> {
        info!("Checking {}", repo.id);

        let status = if self.valid.contains(&repo.id) {
            info!("Is valid: {}", repo.path.display());
            if self.has_config(&repo.path)? {
                RepoStatus::ValidWithConfig
            } else {
                RepoStatus::Valid
            }
        } else {
            info!("Not valid: {}", repo.path.display());
            RepoStatus::Invalid
        };

        Ok(RepoEntry {
            id: repo.id.clone(),
            path: repo.path.clone(),
            status,
        })
    }

    /// True when the marker exists on disk under the repo directory.
    pub fn has_config(&self, repo_path: &Path) -> Result<bool> {
        let marker = repo_path.join(&self.config_marker);
        marker
            .try_exists()
            .map_err(|e| AuditError::file_operation(marker, e))
    }
}
