// file: src/repository/scanner.rs
// description: Two level namespace/repo directory discovery under the sync root
// reference: https://docs.rs/walkdir

use crate::config::AuditConfig;
use crate::error::{AuditError, Result};
use crate::models::RepoId;
use std::ffi::OsStr;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};
use walkdir::{DirEntry, WalkDir};

pub struct RepoScanner {
    config: AuditConfig,
}

#[derive(Debug, Clone)]
pub struct DiscoveredRepo {
    pub id: RepoId,
    pub path: PathBuf,
}

impl RepoScanner {
    pub fn new(config: AuditConfig) -> Self {
        Self { config }
    }

    /// Lists every `root/namespace/repo` directory in file-name order.
    ///
    /// Files at either level are ignored. Symlinked directories are followed
    /// unless `follow_links` is off; links that dangle or point back at an
    /// ancestor are skipped with a warning. Any other read error aborts the scan.
    pub fn scan(&self, root: &Path) -> Result<Vec<DiscoveredRepo>> {
        info!("Scanning sync directory: {}", root.display());
        let mut repos = Vec::new();

        let walker = WalkDir::new(root)
            .min_depth(1)
            .max_depth(2)
            .follow_links(self.config.follow_links)
            .sort_by_file_name()
            .into_iter()
            .filter_entry(|entry| self.should_visit(entry));

        for entry in walker {
            let entry = match entry {
                Ok(entry) => entry,
                Err(err) if is_unfollowable_link(&err) => {
                    warn!("Skipping unfollowable symlink: {}", err);
                    continue;
                }
                Err(err) => return Err(err.into()),
            };

            if entry.depth() == 1 {
                info!("Processing {}", entry.path().display());
                continue;
            }

            let namespace_path = entry.path().parent().ok_or_else(|| {
                AuditError::Validation(format!(
                    "Repo path has no namespace: {}",
                    entry.path().display()
                ))
            })?;
            let namespace = namespace_path
                .file_name()
                .map(|n| dir_name(n, namespace_path))
                .ok_or_else(|| {
                    AuditError::Validation(format!(
                        "Repo path has no namespace: {}",
                        entry.path().display()
                    ))
                })?;
            let name = dir_name(entry.file_name(), entry.path());

            repos.push(DiscoveredRepo {
                id: RepoId::new(namespace, name),
                path: entry.path().to_path_buf(),
            });
        }

        info!("Found {} repo directories", repos.len());
        Ok(repos)
    }

    fn should_visit(&self, entry: &DirEntry) -> bool {
        if !entry.file_type().is_dir() {
            debug!("Skipping non-directory: {}", entry.path().display());
            return false;
        }

        if self.config.skip_hidden && is_hidden(entry) {
            debug!("Skipping hidden directory: {}", entry.path().display());
            return false;
        }

        true
    }
}

fn is_hidden(entry: &DirEntry) -> bool {
    entry
        .file_name()
        .to_str()
        .map(|name| name.starts_with('.'))
        .unwrap_or(false)
}

fn is_unfollowable_link(err: &walkdir::Error) -> bool {
    if err.loop_ancestor().is_some() {
        return true;
    }

    err.path()
        .and_then(|path| fs::symlink_metadata(path).ok())
        .map(|meta| meta.file_type().is_symlink())
        .unwrap_or(false)
}

/// Non UTF-8 names are matched in their lossy form, which no valid id can hold.
fn dir_name(name: &OsStr, path: &Path) -> String {
    match name.to_str() {
        Some(name) => name.to_string(),
        None => {
            let lossy = name.to_string_lossy().into_owned();
            warn!(
                "Directory name is not valid UTF-8, checking it as {:?}: {}",
                lossy,
                path.display()
            );
            lossy
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn keys(repos: &[DiscoveredRepo]) -> Vec<String> {
        repos.iter().map(|r| r.id.key()).collect()
    }

    #[test]
    fn test_scan_two_levels() {
        let temp = TempDir::new().unwrap();
        fs::create_dir_all(temp.path().join("acme/widgets/.oxen")).unwrap();
        fs::create_dir_all(temp.path().join("acme/other")).unwrap();
        fs::create_dir_all(temp.path().join("beta/data")).unwrap();

        let scanner = RepoScanner::new(AuditConfig::default());
        let repos = scanner.scan(temp.path()).unwrap();

        assert_eq!(keys(&repos), vec!["acme/other", "acme/widgets", "beta/data"]);
        assert_eq!(repos[1].path, temp.path().join("acme/widgets"));
    }

    #[test]
    fn test_scan_ignores_files_at_both_levels() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("README.md"), "stray").unwrap();
        fs::create_dir_all(temp.path().join("acme/widgets")).unwrap();
        fs::write(temp.path().join("acme/notes.txt"), "stray").unwrap();

        let scanner = RepoScanner::new(AuditConfig::default());
        let repos = scanner.scan(temp.path()).unwrap();

        assert_eq!(keys(&repos), vec!["acme/widgets"]);
    }

    #[test]
    fn test_scan_empty_root() {
        let temp = TempDir::new().unwrap();
        let scanner = RepoScanner::new(AuditConfig::default());
        assert!(scanner.scan(temp.path()).unwrap().is_empty());
    }

    #[test]
    fn test_skip_hidden() {
        let temp = TempDir::new().unwrap();
        fs::create_dir_all(temp.path().join(".cache/tmp")).unwrap();
        fs::create_dir_all(temp.path().join("acme/.trash")).unwrap();
        fs::create_dir_all(temp.path().join("acme/widgets")).unwrap();

        let visible = RepoScanner::new(AuditConfig::default())
            .scan(temp.path())
            .unwrap();
        assert_eq!(visible.len(), 3);

        let config = AuditConfig {
            skip_hidden: true,
            ..AuditConfig::default()
        };
        let repos = RepoScanner::new(config).scan(temp.path()).unwrap();
        assert_eq!(keys(&repos), vec!["acme/widgets"]);
    }

    #[test]
    fn test_missing_root_is_error() {
        let temp = TempDir::new().unwrap();
        let scanner = RepoScanner::new(AuditConfig::default());
        assert!(scanner.scan(&temp.path().join("missing")).is_err());
    }

    #[cfg(unix)]
    #[test]
    fn test_follows_symlinked_namespace_and_repo() {
        use std::os::unix::fs::symlink;

        let temp = TempDir::new().unwrap();
        let store = temp.path().join("store");
        let sync = temp.path().join("sync");
        fs::create_dir_all(store.join("ns2/repo2")).unwrap();
        fs::create_dir_all(store.join("real_repo")).unwrap();
        fs::create_dir_all(sync.join("acme")).unwrap();
        symlink(store.join("ns2"), sync.join("ns2")).unwrap();
        symlink(store.join("real_repo"), sync.join("acme/linked")).unwrap();

        let repos = RepoScanner::new(AuditConfig::default()).scan(&sync).unwrap();
        assert_eq!(keys(&repos), vec!["acme/linked", "ns2/repo2"]);
        assert_eq!(repos[0].path, sync.join("acme/linked"));

        let config = AuditConfig {
            follow_links: false,
            ..AuditConfig::default()
        };
        let repos = RepoScanner::new(config).scan(&sync).unwrap();
        assert!(repos.is_empty());
    }

    #[cfg(unix)]
    #[test]
    fn test_dangling_and_looping_links_are_skipped() {
        use std::os::unix::fs::symlink;

        let temp = TempDir::new().unwrap();
        fs::create_dir_all(temp.path().join("acme/widgets")).unwrap();
        symlink(temp.path().join("gone"), temp.path().join("acme/dangling")).unwrap();
        symlink(temp.path().join("acme"), temp.path().join("acme/self")).unwrap();

        let repos = RepoScanner::new(AuditConfig::default())
            .scan(temp.path())
            .unwrap();
        let keys = keys(&repos);

        assert!(keys.contains(&"acme/widgets".to_string()));
        assert!(!keys.contains(&"acme/dangling".to_string()));
    }

    #[cfg(unix)]
    #[test]
    fn test_non_utf8_name_is_kept_lossy() {
        use std::os::unix::ffi::OsStrExt;

        let temp = TempDir::new().unwrap();
        let name = OsStr::from_bytes(b"bad\xffname");
        fs::create_dir_all(temp.path().join("acme").join(name)).unwrap();

        let repos = RepoScanner::new(AuditConfig::default())
            .scan(temp.path())
            .unwrap();

        assert_eq!(repos.len(), 1);
        assert_eq!(repos[0].id.namespace, "acme");
        assert_eq!(repos[0].id.name, "bad\u{FFFD}name");
        assert_eq!(repos[0].path, temp.path().join("acme").join(name));
    }
}
