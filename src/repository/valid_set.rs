// file: src/repository/valid_set.rs
// description: Loading the set of valid namespace/repo identifiers
// reference: line oriented id list, one namespace/repo per line

use crate::error::{AuditError, Result};
use crate::models::RepoId;
use std::collections::HashSet;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use tracing::{debug, info, warn};

#[derive(Debug, Clone, Default)]
pub struct ValidRepoSet {
    ids: HashSet<String>,
}

impl ValidRepoSet {
    pub fn load(path: &Path, skip_blank_lines: bool) -> Result<Self> {
        let file = File::open(path).map_err(|e| AuditError::file_operation(path, e))?;
        let set = Self::from_reader(BufReader::new(file), skip_blank_lines)
            .map_err(|e| match e {
                AuditError::Io(source) => AuditError::file_operation(path, source),
                other => other,
            })?;

        info!("Got {} repos", set.len());
        Ok(set)
    }

    pub fn from_reader<R: BufRead>(reader: R, skip_blank_lines: bool) -> Result<Self> {
        let mut ids = HashSet::new();

        for (index, line) in reader.lines().enumerate() {
            let line = line?;
            let id = line.trim();

            if id.is_empty() && skip_blank_lines {
                debug!("Skipping blank line {}", index + 1);
                continue;
            }

            if RepoId::parse(id).is_err() {
                warn!(
                    "Line {} is not a namespace/repo id and will never match: {:?}",
                    index + 1,
                    id
                );
            }

            ids.insert(id.to_string());
        }

        Ok(Self { ids })
    }

    pub fn contains(&self, id: &RepoId) -> bool {
        self.ids.contains(&id.key())
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }
}

impl<S: Into<String>> FromIterator<S> for ValidRepoSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self {
            ids: iter.into_iter().map(Into::into).collect(),
        }
    }
}
