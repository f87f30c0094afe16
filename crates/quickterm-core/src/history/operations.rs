use std::collections::BTreeSet;
use std::fs;
use std::io::{Read, Seek, SeekFrom, Write};
use std::path::{Path, PathBuf};

use nix::fcntl::{Flock, FlockArg};
use tracing::{debug, warn};

use crate::history::errors::HistoryError;

/// The shell history file, held under an exclusive `flock`.
///
/// The lock is taken on open and released when the value is dropped, so a
/// whole read, menu, write sequence runs without interleaving with another
/// invocation.
pub struct HistoryFile {
    file: Flock<fs::File>,
    path: PathBuf,
}

impl HistoryFile {
    /// Open (creating it and its parent directory if needed) and lock `path`.
    pub fn open_locked(path: &Path) -> Result<Self, HistoryError> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|e| HistoryError::OpenFailed {
                path: path.to_path_buf(),
                message: format!("failed to create directory {}: {}", parent.display(), e),
            })?;
        }

        let file = fs::OpenOptions::new()
            .create(true)
            .truncate(false)
            .read(true)
            .write(true)
            .open(path)
            .map_err(|e| HistoryError::OpenFailed {
                path: path.to_path_buf(),
                message: e.to_string(),
            })?;

        let file = Flock::lock(file, FlockArg::LockExclusive).map_err(|(_, e)| {
            HistoryError::LockFailed {
                path: path.to_path_buf(),
                message: e.to_string(),
            }
        })?;

        debug!(event = "core.history.locked", path = %path.display());

        Ok(Self {
            file,
            path: path.to_path_buf(),
        })
    }

    /// Stored shell order, most recent first.
    ///
    /// An empty, unreadable or malformed file yields an empty list.
    pub fn read(&mut self) -> Vec<String> {
        let mut content = String::new();
        let read = self
            .file
            .seek(SeekFrom::Start(0))
            .and_then(|_| self.file.read_to_string(&mut content));

        if let Err(e) = read {
            warn!(
                event = "core.history.read_failed",
                path = %self.path.display(),
                error = %e
            );
            return Vec::new();
        }

        if content.trim().is_empty() {
            return Vec::new();
        }

        match serde_json::from_str::<Vec<String>>(&content) {
            Ok(order) => order,
            Err(e) => {
                warn!(
                    event = "core.history.parse_failed",
                    path = %self.path.display(),
                    error = %e
                );
                Vec::new()
            }
        }
    }

    /// Replace the stored order.
    pub fn write(&mut self, order: &[String]) -> Result<(), HistoryError> {
        let content = serde_json::to_string(order).map_err(|e| HistoryError::SerializeFailed {
            message: e.to_string(),
        })?;

        self.file.set_len(0)?;
        self.file.seek(SeekFrom::Start(0))?;
        self.file.write_all(content.as_bytes())?;
        self.file.flush()?;

        debug!(
            event = "core.history.written",
            path = %self.path.display(),
            entries = order.len()
        );
        Ok(())
    }
}

/// Order in which shells are offered.
///
/// `history` is used when it names exactly the configured shells; otherwise
/// the configured names are offered sorted.
pub fn shell_order(history: &[String], shells: &[String]) -> Vec<String> {
    let mut seen = BTreeSet::new();
    let deduped: Vec<String> = history
        .iter()
        .filter(|name| seen.insert(name.as_str()))
        .cloned()
        .collect();

    let configured: BTreeSet<&str> = shells.iter().map(String::as_str).collect();
    if !deduped.is_empty() && seen == configured {
        return deduped;
    }

    let mut sorted = shells.to_vec();
    sorted.sort();
    sorted
}

/// Move `shell` to the front of `order`.
pub fn promote(order: &[String], shell: &str) -> Vec<String> {
    std::iter::once(shell.to_string())
        .chain(order.iter().filter(|name| *name != shell).cloned())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn names(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_shell_order_uses_matching_history() {
        let order = shell_order(
            &names(&["python", "js", "haskell"]),
            &names(&["haskell", "js", "python"]),
        );
        assert_eq!(order, names(&["python", "js", "haskell"]));
    }

    #[test]
    fn test_shell_order_ignores_stale_history() {
        let order = shell_order(&names(&["python", "ruby"]), &names(&["python", "js"]));
        assert_eq!(order, names(&["js", "python"]));
    }

    #[test]
    fn test_shell_order_without_history() {
        let order = shell_order(&[], &names(&["shell", "haskell"]));
        assert_eq!(order, names(&["haskell", "shell"]));
    }

    #[test]
    fn test_shell_order_drops_duplicates() {
        let order = shell_order(&names(&["js", "python", "js"]), &names(&["js", "python"]));
        assert_eq!(order, names(&["js", "python"]));
    }

    #[test]
    fn test_promote() {
        let order = promote(&names(&["haskell", "js", "python"]), "python");
        assert_eq!(order, names(&["python", "haskell", "js"]));

        let order = promote(&names(&["python", "js"]), "python");
        assert_eq!(order, names(&["python", "js"]));
    }

    #[test]
    fn test_open_creates_parent_directory() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("cache/i3/i3-quickterm.order");

        let mut history = HistoryFile::open_locked(&path).unwrap();
        assert!(path.exists());
        assert!(history.read().is_empty());
    }

    #[test]
    fn test_write_then_read_back() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("order");

        {
            let mut history = HistoryFile::open_locked(&path).unwrap();
            history
                .write(&names(&["python", "js", "haskell", "shell"]))
                .unwrap();
            history.write(&names(&["js", "python"])).unwrap();
        }

        assert_eq!(fs::read_to_string(&path).unwrap(), r#"["js","python"]"#);

        let mut history = HistoryFile::open_locked(&path).unwrap();
        assert_eq!(history.read(), names(&["js", "python"]));
    }

    #[test]
    fn test_read_malformed_content() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("order");
        fs::write(&path, "not json{{").unwrap();

        let mut history = HistoryFile::open_locked(&path).unwrap();
        assert!(history.read().is_empty());
    }

    #[test]
    fn test_lock_released_on_drop() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("order");

        let first = HistoryFile::open_locked(&path).unwrap();
        drop(first);

        let file = fs::OpenOptions::new().read(true).open(&path).unwrap();
        let locked = Flock::lock(file, FlockArg::LockExclusiveNonblock);
        assert!(locked.is_ok());
    }

    #[test]
    fn test_lock_is_exclusive() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("order");

        let _held = HistoryFile::open_locked(&path).unwrap();

        let file = fs::OpenOptions::new().read(true).open(&path).unwrap();
        let locked = Flock::lock(file, FlockArg::LockExclusiveNonblock);
        assert!(locked.is_err());
    }
}
