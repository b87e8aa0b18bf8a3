//! Size-rotated append-only file for trace output.

use std::fs::{self, File, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use std::time::{SystemTime, UNIX_EPOCH};

/// Rotate once the live file passes 10 MB.
const ROTATE_AT_BYTES: u64 = 10 * 1024 * 1024;

/// Rotated copies kept next to the live file.
const KEPT_BACKUPS: usize = 3;

/// Line-oriented writer that moves the live file aside when it grows too big.
///
/// Backups are named `<stem>.json.<unix-nanos>`; only the newest
/// [`KEPT_BACKUPS`] survive a rotation.
pub struct RotatingFile {
    path: PathBuf,
    limit: u64,
    handle: Mutex<Option<File>>,
}

impl RotatingFile {
    pub const fn new(path: PathBuf) -> Self {
        Self::with_limit(path, ROTATE_AT_BYTES)
    }

    const fn with_limit(path: PathBuf, limit: u64) -> Self {
        Self {
            path,
            limit,
            handle: Mutex::new(None),
        }
    }

    /// Appends `line` plus a newline, rotating first if the file is over the limit.
    ///
    /// # Errors
    ///
    /// Returns the underlying I/O error, or `Other` if the lock is poisoned.
    pub fn append(&self, line: &str) -> io::Result<()> {
        let mut handle = self
            .handle
            .lock()
            .map_err(|e| io::Error::new(io::ErrorKind::Other, format!("trace file lock poisoned: {e}")))?;

        let oversized = fs::metadata(&self.path).is_ok_and(|meta| meta.len() > self.limit);
        if oversized {
            *handle = None;
            self.rotate()?;
        }

        if handle.is_none() {
            *handle = Some(OpenOptions::new().create(true).append(true).open(&self.path)?);
        }
        if let Some(file) = handle.as_mut() {
            writeln!(file, "{line}")?;
            file.flush()?;
        }
        Ok(())
    }

    fn rotate(&self) -> io::Result<()> {
        fs::rename(&self.path, backup_path(&self.path))?;
        prune_backups(&self.path)
    }
}

/// First unused `<stem>.json.<unix-nanos>[.<n>]` name next to `path`.
fn backup_path(path: &Path) -> PathBuf {
    let stamp = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map_or(0, |elapsed| elapsed.as_nanos());
    let base = path.with_extension(format!("json.{stamp}"));

    let mut candidate = base.clone();
    let mut n = 1;
    while candidate.exists() {
        candidate = base.with_extension(format!("{stamp}.{n}"));
        n += 1;
    }
    candidate
}

/// Deletes all but the newest [`KEPT_BACKUPS`] rotated copies of `path`.
fn prune_backups(path: &Path) -> io::Result<()> {
    let (Some(dir), Some(stem)) = (path.parent(), path.file_stem().and_then(|s| s.to_str())) else {
        return Ok(());
    };
    let prefix = format!("{stem}.json.");

    let mut backups: Vec<(Option<SystemTime>, PathBuf)> = fs::read_dir(dir)?
        .filter_map(std::result::Result::ok)
        .map(|entry| entry.path())
        .filter(|p| {
            p.file_name()
                .and_then(|name| name.to_str())
                .is_some_and(|name| name.starts_with(&prefix))
        })
        .map(|p| (fs::metadata(&p).and_then(|m| m.modified()).ok(), p))
        .collect();

    backups.sort_by(|a, b| b.cmp(a));
    for (_, stale) in backups.into_iter().skip(KEPT_BACKUPS) {
        let _ = fs::remove_file(stale);
    }
    Ok(())
}

impl std::fmt::Debug for RotatingFile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RotatingFile")
            .field("path", &self.path)
            .field("limit", &self.limit)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn backup_count(dir: &Path) -> usize {
        fs::read_dir(dir)
            .unwrap()
            .filter_map(std::result::Result::ok)
            .filter(|e| e.file_name().to_string_lossy().starts_with("traces.json."))
            .count()
    }

    #[test]
    fn appends_lines() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("traces.json");
        let file = RotatingFile::new(path.clone());

        file.append("{\"a\":1}").unwrap();
        file.append("{\"b\":2}").unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "{\"a\":1}\n{\"b\":2}\n");
    }

    #[test]
    fn backup_name_never_reuses_an_existing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("traces.json");

        let first = backup_path(&path);
        fs::write(&first, "kept").unwrap();
        let second = backup_path(&path);
        fs::write(&second, "kept").unwrap();

        assert_ne!(first, second);
        assert!(!backup_path(&path).exists());
        assert!(second
            .file_name()
            .unwrap()
            .to_string_lossy()
            .starts_with("traces.json."));
    }

    #[test]
    fn rotates_oversized_file_and_prunes_backups() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("traces.json");
        for stamp in 1..=4 {
            fs::write(dir.path().join(format!("traces.json.{stamp}")), "old").unwrap();
        }
        fs::write(&path, "x".repeat(64)).unwrap();

        let file = RotatingFile::with_limit(path.clone(), 16);
        file.append("fresh").unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "fresh\n");
        assert_eq!(backup_count(dir.path()), KEPT_BACKUPS);
    }
}
