//! Size-rotated trace file.
//!
//! Lines are appended to a single file. Once the file would exceed its size
//! limit it is shifted to `<name>.1`, earlier backups move up by one, and the
//! oldest beyond the retention count is deleted.

use std::fs::{self, File, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::sync::Mutex;

/// Default size limit before rotation (10 MB).
pub const DEFAULT_MAX_BYTES: u64 = 10 * 1024 * 1024;

/// Default number of rotated backups kept.
pub const DEFAULT_BACKUPS: usize = 3;

/// Thread-safe rotating line writer.
pub struct RotatingFile {
    path: PathBuf,
    max_bytes: u64,
    backups: usize,
    /// Open handle and bytes written to it; opened lazily on first write.
    state: Mutex<Option<(File, u64)>>,
}

impl RotatingFile {
    #[must_use]
    pub const fn new(path: PathBuf) -> Self {
        Self::with_limits(path, DEFAULT_MAX_BYTES, DEFAULT_BACKUPS)
    }

    #[must_use]
    pub const fn with_limits(path: PathBuf, max_bytes: u64, backups: usize) -> Self {
        Self {
            path,
            max_bytes,
            backups,
            state: Mutex::new(None),
        }
    }

    /// Appends `line` plus a newline, rotating first if the file is full.
    ///
    /// # Errors
    ///
    /// Returns an error if the lock is poisoned or any filesystem operation
    /// fails.
    pub fn write_line(&self, line: &str) -> io::Result<()> {
        let mut state = self
            .state
            .lock()
            .map_err(|e| io::Error::new(io::ErrorKind::Other, format!("trace file lock poisoned: {e}")))?;

        let incoming = line.len() as u64 + 1;
        let current = match state.as_ref() {
            Some((_, written)) => *written,
            None => fs::metadata(&self.path).map_or(0, |meta| meta.len()),
        };
        if current > 0 && current + incoming > self.max_bytes {
            *state = None;
            self.rotate()?;
        }

        if state.is_none() {
            let file = OpenOptions::new().create(true).append(true).open(&self.path)?;
            let written = file.metadata()?.len();
            *state = Some((file, written));
        }

        if let Some((file, written)) = state.as_mut() {
            writeln!(file, "{line}")?;
            file.flush()?;
            *written += incoming;
        }
        Ok(())
    }

    /// Path of the `index`-th backup, `1` being the newest.
    #[must_use]
    pub fn backup_path(&self, index: usize) -> PathBuf {
        backup_of(&self.path, index)
    }

    fn rotate(&self) -> io::Result<()> {
        if self.backups == 0 {
            return match fs::remove_file(&self.path) {
                Err(e) if e.kind() != io::ErrorKind::NotFound => Err(e),
                _ => Ok(()),
            };
        }

        let oldest = self.backup_path(self.backups);
        if oldest.exists() {
            fs::remove_file(&oldest)?;
        }
        for index in (1..self.backups).rev() {
            let from = self.backup_path(index);
            if from.exists() {
                fs::rename(&from, self.backup_path(index + 1))?;
            }
        }
        if self.path.exists() {
            fs::rename(&self.path, self.backup_path(1))?;
        }
        Ok(())
    }
}

fn backup_of(path: &Path, index: usize) -> PathBuf {
    let mut name = path.as_os_str().to_os_string();
    name.push(format!(".{index}"));
    PathBuf::from(name)
}

impl std::fmt::Debug for RotatingFile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RotatingFile")
            .field("path", &self.path)
            .field("max_bytes", &self.max_bytes)
            .field("backups", &self.backups)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn read(path: &Path) -> String {
        fs::read_to_string(path).unwrap_or_default()
    }

    #[test]
    fn appends_lines() {
        let dir = tempfile::tempdir().unwrap();
        let writer = RotatingFile::new(dir.path().join("trace.json"));

        writer.write_line("{\"a\":1}").unwrap();
        writer.write_line("{\"b\":2}").unwrap();

        assert_eq!(read(&dir.path().join("trace.json")), "{\"a\":1}\n{\"b\":2}\n");
    }

    #[test]
    fn rotates_and_keeps_limited_backups() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("trace.json");
        let writer = RotatingFile::with_limits(path.clone(), 10, 2);

        for line in ["one-----", "two-----", "three---", "four----"] {
            writer.write_line(line).unwrap();
        }

        assert_eq!(read(&path), "four----\n");
        assert_eq!(read(&writer.backup_path(1)), "three---\n");
        assert_eq!(read(&writer.backup_path(2)), "two-----\n");
        assert!(!writer.backup_path(3).exists());
    }

    #[test]
    fn existing_file_size_counts_toward_limit() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("trace.json");
        fs::write(&path, "previous-run\n").unwrap();

        let writer = RotatingFile::with_limits(path.clone(), 16, 1);
        writer.write_line("next-run").unwrap();

        assert_eq!(read(&writer.backup_path(1)), "previous-run\n");
        assert_eq!(read(&path), "next-run\n");
    }
}
