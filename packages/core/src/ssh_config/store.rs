//! Reading and writing SSH config files
//!
//! The propagation driver only sees the `ConfigStore` trait, so it can run
//! against the real filesystem, an in-memory map, or a dry run.

use std::collections::BTreeMap;
use std::ffi::OsString;
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;

use super::error::SshConfigError;

/// Whole-file source and sink for config text
pub trait ConfigStore {
    /// Read the complete content of `path`
    fn read(&self, path: &Path) -> Result<String, SshConfigError>;

    /// Replace the complete content of `path`
    fn write(&mut self, path: &Path, contents: &str) -> Result<(), SshConfigError>;
}

/// Filesystem-backed store
///
/// Writes go to a temporary file next to the destination, which is then
/// renamed over it, so a failed write never leaves a truncated config.
#[derive(Debug, Clone, Default)]
pub struct FsStore {
    /// Copy the existing file to `<name>.bak` before replacing it
    pub backup: bool,
}

impl FsStore {
    pub fn new(backup: bool) -> Self {
        Self { backup }
    }
}

/// `<path>.bak`, next to the original
pub fn backup_path(path: &Path) -> PathBuf {
    let mut name: OsString = path.as_os_str().to_owned();
    name.push(".bak");
    PathBuf::from(name)
}

/// The file a symlink points at, or `path` itself for anything else
fn resolve_symlink(path: &Path) -> io::Result<PathBuf> {
    match fs::symlink_metadata(path) {
        Ok(metadata) if metadata.file_type().is_symlink() => fs::canonicalize(path),
        _ => Ok(path.to_path_buf()),
    }
}

impl ConfigStore for FsStore {
    fn read(&self, path: &Path) -> Result<String, SshConfigError> {
        fs::read_to_string(path)
            .map_err(|e| SshConfigError::ReadFailed(format!("{}: {}", path.display(), e)))
    }

    fn write(&mut self, path: &Path, contents: &str) -> Result<(), SshConfigError> {
        let write_err = |what: &str, e: io::Error| {
            SshConfigError::WriteFailed(format!("{what} {}: {e}", path.display()))
        };

        // Renaming onto a symlink would replace the link, not the file it names
        let path = resolve_symlink(path).map_err(|e| write_err("symlink target of", e))?;
        let path = path.as_path();

        if self.backup && path.exists() {
            let backup = backup_path(path);
            fs::copy(path, &backup).map_err(|e| write_err("backup of", e))?;
            tracing::debug!("Created SSH config backup: {}", backup.display());
        }

        let dir = match path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };

        let mut tmp = NamedTempFile::new_in(dir).map_err(|e| write_err("temp file for", e))?;
        tmp.write_all(contents.as_bytes())
            .map_err(|e| write_err("contents of", e))?;
        tmp.as_file()
            .sync_all()
            .map_err(|e| write_err("sync of", e))?;

        // Temp files are created 0600; keep whatever the config had
        if let Ok(metadata) = fs::metadata(path) {
            fs::set_permissions(tmp.path(), metadata.permissions())
                .map_err(|e| write_err("permissions for", e))?;
        }

        tmp.persist(path)
            .map_err(|e| write_err("rename onto", e.error))?;

        tracing::debug!("Wrote {} bytes to {}", contents.len(), path.display());
        Ok(())
    }
}

/// In-memory store keyed by path
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    files: BTreeMap<PathBuf, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder pattern: seed a file
    pub fn with_file(mut self, path: impl Into<PathBuf>, contents: impl Into<String>) -> Self {
        self.files.insert(path.into(), contents.into());
        self
    }

    pub fn get(&self, path: &Path) -> Option<&str> {
        self.files.get(path).map(String::as_str)
    }
}

impl ConfigStore for MemoryStore {
    fn read(&self, path: &Path) -> Result<String, SshConfigError> {
        self.get(path)
            .map(str::to_string)
            .ok_or_else(|| SshConfigError::ReadFailed(format!("{}: no such file", path.display())))
    }

    fn write(&mut self, path: &Path, contents: &str) -> Result<(), SshConfigError> {
        self.files.insert(path.to_path_buf(), contents.to_string());
        Ok(())
    }
}

/// A write that a dry run held back
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingWrite {
    pub path: PathBuf,
    pub before: String,
    pub after: String,
}

impl PendingWrite {
    /// Line pairs `(before, after)` that differ, by line position
    pub fn changed_lines(&self) -> Vec<(&str, &str)> {
        self.before
            .lines()
            .zip(self.after.lines())
            .filter(|(before, after)| before != after)
            .collect()
    }
}

/// Reads through to an inner store and records writes instead of applying them
///
/// Reads of a path that was already "written" return the recorded content,
/// so a multi-step run sees its own pending changes.
#[derive(Debug)]
pub struct DryRunStore<S> {
    inner: S,
    pending: Vec<PendingWrite>,
}

impl<S: ConfigStore> DryRunStore<S> {
    pub fn new(inner: S) -> Self {
        Self {
            inner,
            pending: Vec::new(),
        }
    }

    pub fn pending(&self) -> &[PendingWrite] {
        &self.pending
    }

    pub fn into_pending(self) -> Vec<PendingWrite> {
        self.pending
    }
}

impl<S: ConfigStore> ConfigStore for DryRunStore<S> {
    fn read(&self, path: &Path) -> Result<String, SshConfigError> {
        match self.pending.iter().rev().find(|w| w.path == path) {
            Some(write) => Ok(write.after.clone()),
            None => self.inner.read(path),
        }
    }

    fn write(&mut self, path: &Path, contents: &str) -> Result<(), SshConfigError> {
        let before = self.read(path).unwrap_or_default();
        tracing::debug!("Dry run: skipping write to {}", path.display());
        self.pending.push(PendingWrite {
            path: path.to_path_buf(),
            before,
            after: contents.to_string(),
        });
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_fs_store_replaces_content() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config");
        fs::write(&path, "Host a\n  HostName x\n").unwrap();

        let mut store = FsStore::default();
        store.write(&path, "Host a\n  HostName y\n").unwrap();

        assert_eq!(store.read(&path).unwrap(), "Host a\n  HostName y\n");
        assert!(!backup_path(&path).exists());
    }

    #[test]
    fn test_fs_store_backup() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config");
        fs::write(&path, "old\n").unwrap();

        let mut store = FsStore::new(true);
        store.write(&path, "new\n").unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "new\n");
        assert_eq!(fs::read_to_string(backup_path(&path)).unwrap(), "old\n");
    }

    #[cfg(unix)]
    #[test]
    fn test_fs_store_keeps_permissions() {
        use std::os::unix::fs::PermissionsExt;

        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config");
        fs::write(&path, "old\n").unwrap();
        fs::set_permissions(&path, fs::Permissions::from_mode(0o644)).unwrap();

        FsStore::default().write(&path, "new\n").unwrap();

        let mode = fs::metadata(&path).unwrap().permissions().mode();
        assert_eq!(mode & 0o777, 0o644);
    }

    #[cfg(unix)]
    #[test]
    fn test_fs_store_writes_through_symlink() {
        let temp_dir = TempDir::new().unwrap();
        let real = temp_dir.path().join("dotfiles_config");
        let link = temp_dir.path().join("config");
        fs::write(&real, "Host a\n  HostName x\n").unwrap();
        std::os::unix::fs::symlink(&real, &link).unwrap();

        FsStore::new(true)
            .write(&link, "Host a\n  HostName y\n")
            .unwrap();

        assert!(fs::symlink_metadata(&link).unwrap().file_type().is_symlink());
        assert_eq!(fs::read_to_string(&real).unwrap(), "Host a\n  HostName y\n");
        assert_eq!(
            fs::read_to_string(backup_path(&real)).unwrap(),
            "Host a\n  HostName x\n"
        );
    }

    #[test]
    fn test_fs_store_read_missing_file() {
        let temp_dir = TempDir::new().unwrap();
        let err = FsStore::default()
            .read(&temp_dir.path().join("absent"))
            .unwrap_err();
        assert!(matches!(err, SshConfigError::ReadFailed(_)));
    }

    #[test]
    fn test_backup_path_appends_suffix() {
        assert_eq!(
            backup_path(Path::new("/home/me/.ssh/config")),
            PathBuf::from("/home/me/.ssh/config.bak")
        );
    }

    #[test]
    fn test_dry_run_records_instead_of_writing() {
        let inner = MemoryStore::new().with_file("cfg", "a\nb\n");
        let mut store = DryRunStore::new(inner);
        store.write(Path::new("cfg"), "a\nc\n").unwrap();

        assert_eq!(store.read(Path::new("cfg")).unwrap(), "a\nc\n");
        let pending = store.into_pending();
        assert_eq!(pending.len(), 1);
        assert_eq!(pending[0].changed_lines(), vec![("b", "c")]);
    }
}
