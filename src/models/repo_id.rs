// file: src/models/repo_id.rs
// description: namespace/repo identifier used as the lookup key for validity
// reference: internal data structures

use crate::error::{AuditError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RepoId {
    pub namespace: String,
    pub name: String,
}

impl RepoId {
    pub fn new(namespace: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            namespace: namespace.into(),
            name: name.into(),
        }
    }

    /// Parses a `namespace/repo` line. Both segments must be non-empty and
    /// the repo segment may not contain another separator.
    pub fn parse(raw: &str) -> Result<Self> {
        let trimmed = raw.trim();

        match trimmed.split_once('/') {
            Some((namespace, name))
                if !namespace.is_empty() && !name.is_empty() && !name.contains('/') =>
            {
                Ok(Self::new(namespace, name))
            }
            _ => Err(AuditError::Validation(format!(
                "Invalid repo id (expected namespace/repo): {:?}",
                trimmed
            ))),
        }
    }

    pub fn key(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for RepoId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.namespace, self.name)
    }
}
