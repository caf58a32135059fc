// file: src/utils/validation.rs
// description: up-front checks on the repo id list and sync root arguments
// reference: input validation patterns

use crate::error::{AuditError, Result};
use std::fs;
use std::path::Path;

pub struct Validator;

impl Validator {
    /// The id list must be a readable regular file (symlinks are resolved).
    pub fn validate_repo_ids_file(path: &Path) -> Result<()> {
        let metadata = fs::metadata(path).map_err(|e| AuditError::file_operation(path, e))?;

        if !metadata.is_file() {
            return Err(AuditError::Validation(format!(
                "Repo id list must be a file of namespace/repo lines: {}",
                path.display()
            )));
        }

        Ok(())
    }

    pub fn validate_sync_root(path: &Path) -> Result<()> {
        let metadata = fs::metadata(path).map_err(|e| AuditError::file_operation(path, e))?;

        if !metadata.is_dir() {
            return Err(AuditError::Validation(format!(
                "Sync root must be a directory of namespace/repo folders: {}",
                path.display()
            )));
        }

        Ok(())
    }
}
