//! Backup freshness: finds the newest backup file in a directory.
//!
//! Backups are produced by an external job. [`BackupMonitor`] only lists
//! the directory and reads modification times; it never opens, validates
//! or removes the files. Recency is the only signal.

use std::path::{Path, PathBuf};
use std::time::SystemTime;

/// Reported in place of a file name when no backup exists.
pub const NO_BACKUP: &str = "Aucun backup";

/// Outcome of a backup directory scan.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BackupStatus {
    /// No matching file was found (or the directory is absent).
    Missing,
    /// The most recently modified matching file.
    Latest {
        /// Base name of the file.
        file_name: String,
        /// Whole seconds elapsed since its modification time.
        age_seconds: u64,
    },
}

impl BackupStatus {
    /// Base file name, or [`NO_BACKUP`].
    #[must_use]
    pub fn file_name(&self) -> &str {
        match self {
            Self::Missing => NO_BACKUP,
            Self::Latest { file_name, .. } => file_name,
        }
    }

    /// Age in seconds, `0` when no backup exists.
    #[must_use]
    pub const fn age_seconds(&self) -> u64 {
        match self {
            Self::Missing => 0,
            Self::Latest { age_seconds, .. } => *age_seconds,
        }
    }
}

/// Scans one directory for files named `*.<extension>`.
#[derive(Debug, Clone)]
pub struct BackupMonitor {
    dir: PathBuf,
    extension: String,
}

impl BackupMonitor {
    /// Creates a monitor over `dir` matching `*.<extension>`.
    #[must_use]
    pub fn new(dir: impl Into<PathBuf>, extension: impl Into<String>) -> Self {
        Self {
            dir: dir.into(),
            extension: extension.into(),
        }
    }

    /// Directory being watched.
    #[must_use]
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Returns the newest matching file relative to the current time.
    pub async fn latest(&self) -> BackupStatus {
        self.latest_at(SystemTime::now()).await
    }

    /// Returns the newest matching file, aging it against `now`.
    ///
    /// An unreadable or missing directory yields [`BackupStatus::Missing`].
    /// Entries whose metadata cannot be read, dangling links included,
    /// are skipped.
    pub async fn latest_at(&self, now: SystemTime) -> BackupStatus {
        let mut entries = match tokio::fs::read_dir(&self.dir).await {
            Ok(entries) => entries,
            Err(e) => {
                if e.kind() != std::io::ErrorKind::NotFound {
                    tracing::warn!(dir = %self.dir.display(), error = %e, "backup directory unreadable");
                }
                return BackupStatus::Missing;
            }
        };

        let mut newest: Option<(SystemTime, String)> = None;
        loop {
            let entry = match entries.next_entry().await {
                Ok(Some(entry)) => entry,
                Ok(None) => break,
                Err(e) => {
                    tracing::warn!(dir = %self.dir.display(), error = %e, "backup listing interrupted");
                    break;
                }
            };
            let Some(name) = entry.file_name().to_str().map(str::to_owned) else {
                continue;
            };
            if !self.matches(&name) {
                continue;
            }
            // Follows symlinks: a link to a backup counts with its target's mtime.
            let Ok(meta) = tokio::fs::metadata(entry.path()).await else {
                continue;
            };
            if !meta.is_file() {
                continue;
            }
            let Ok(modified) = meta.modified() else {
                continue;
            };
            if newest.as_ref().is_none_or(|(best, _)| modified > *best) {
                newest = Some((modified, name));
            }
        }

        match newest {
            None => BackupStatus::Missing,
            Some((modified, file_name)) => {
                // A clock skewed behind the file's mtime reads as zero age.
                let age_seconds = now
                    .duration_since(modified)
                    .map(|d| d.as_secs())
                    .unwrap_or(0);
                tracing::debug!(file = %file_name, age_seconds, "latest backup");
                BackupStatus::Latest {
                    file_name,
                    age_seconds,
                }
            }
        }
    }

    /// Shell-glob `*.<ext>` semantics: hidden names never match.
    fn matches(&self, name: &str) -> bool {
        if name.starts_with('.') {
            return false;
        }
        name.rsplit_once('.')
            .is_some_and(|(_, ext)| ext == self.extension)
    }
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;
    use std::fs::File;
    use std::time::Duration;

    fn touch(dir: &Path, name: &str, modified: SystemTime) {
        let Ok(file) = File::create(dir.join(name)) else {
            panic!("create {name}");
        };
        if file.set_modified(modified).is_err() {
            panic!("set mtime on {name}");
        }
    }

    fn temp_dir() -> tempfile::TempDir {
        let Ok(dir) = tempfile::tempdir() else {
            panic!("tempdir");
        };
        dir
    }

    #[tokio::test]
    async fn empty_directory_reports_sentinel() {
        let dir = temp_dir();
        let status = BackupMonitor::new(dir.path(), "db").latest().await;
        assert_eq!(status, BackupStatus::Missing);
        assert_eq!(status.file_name(), "Aucun backup");
        assert_eq!(status.age_seconds(), 0);
    }

    #[tokio::test]
    async fn missing_directory_reports_sentinel() {
        let dir = temp_dir();
        let monitor = BackupMonitor::new(dir.path().join("absent"), "db");
        assert_eq!(monitor.latest().await, BackupStatus::Missing);
    }

    #[tokio::test]
    async fn newest_file_wins() {
        let dir = temp_dir();
        let now = SystemTime::now();
        touch(dir.path(), "a.db", now - Duration::from_secs(3_600));
        touch(dir.path(), "b.db", now - Duration::from_secs(120));

        let status = BackupMonitor::new(dir.path(), "db").latest_at(now).await;
        assert_eq!(
            status,
            BackupStatus::Latest {
                file_name: "b.db".to_string(),
                age_seconds: 120,
            }
        );
    }

    #[tokio::test]
    async fn non_matching_names_are_ignored() {
        let dir = temp_dir();
        let now = SystemTime::now();
        touch(dir.path(), "old.db", now - Duration::from_secs(600));
        touch(dir.path(), "newer.db.tmp", now);
        touch(dir.path(), ".hidden.db", now);
        touch(dir.path(), "notes.txt", now);
        if std::fs::create_dir(dir.path().join("dir.db")).is_err() {
            panic!("create dir.db");
        }

        let status = BackupMonitor::new(dir.path(), "db").latest_at(now).await;
        assert_eq!(status.file_name(), "old.db");
        assert_eq!(status.age_seconds(), 600);
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn symlinked_backup_is_reported() {
        let dir = temp_dir();
        let now = SystemTime::now();
        let store = dir.path().join("store");
        if std::fs::create_dir(&store).is_err() {
            panic!("create store dir");
        }
        touch(&store, "real.bin", now - Duration::from_secs(90));
        if std::os::unix::fs::symlink(store.join("real.bin"), dir.path().join("latest.db")).is_err() {
            panic!("symlink latest.db");
        }
        if std::os::unix::fs::symlink(store.join("gone.bin"), dir.path().join("dangling.db")).is_err() {
            panic!("symlink dangling.db");
        }

        let status = BackupMonitor::new(dir.path(), "db").latest_at(now).await;
        assert_eq!(status.file_name(), "latest.db");
        assert_eq!(status.age_seconds(), 90);
    }

    #[tokio::test]
    async fn future_mtime_reads_as_zero_age() {
        let dir = temp_dir();
        let now = SystemTime::now();
        touch(dir.path(), "skewed.db", now + Duration::from_secs(30));

        let status = BackupMonitor::new(dir.path(), "db").latest_at(now).await;
        assert_eq!(status.file_name(), "skewed.db");
        assert_eq!(status.age_seconds(), 0);
    }

    #[test]
    fn extension_must_match_exactly() {
        let monitor = BackupMonitor::new("/backup", "db");
        assert!(monitor.matches("x.db"));
        assert!(monitor.matches("nightly.2024-01-01.db"));
        assert!(!monitor.matches("x.dbx"));
        assert!(!monitor.matches("db"));
    }
}
