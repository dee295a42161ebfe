// src/fs/mod.rs

use std::fmt::Debug;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

pub mod mock;

/// Abstract filesystem interface used to locate the repo and discover checks.
pub trait FileSystem: Send + Sync + Debug {
    fn canonicalize(&self, path: &Path) -> Result<PathBuf>;

    /// Return the entries directly inside a directory, in listing order.
    /// Returns full paths.
    fn read_dir(&self, path: &Path) -> Result<Vec<PathBuf>>;

    /// Whether `path` can be launched as a check: a regular file the current
    /// user may execute (`access(2)` with `X_OK` on unix).
    fn is_executable(&self, path: &Path) -> bool;
}

/// Implementation that uses `std::fs`.
#[derive(Debug, Clone, Default)]
pub struct RealFileSystem;

impl FileSystem for RealFileSystem {
    fn canonicalize(&self, path: &Path) -> Result<PathBuf> {
        fs::canonicalize(path).with_context(|| format!("canonicalizing {:?}", path))
    }

    fn read_dir(&self, path: &Path) -> Result<Vec<PathBuf>> {
        let mut entries = Vec::new();
        for entry in fs::read_dir(path).with_context(|| format!("reading dir {:?}", path))? {
            let entry = entry.with_context(|| format!("reading entry of {:?}", path))?;
            entries.push(entry.path());
        }
        Ok(entries)
    }

    #[cfg(unix)]
    fn is_executable(&self, path: &Path) -> bool {
        use rustix::fs::{Access, access};

        // Directories pass access(X_OK) too, but cannot be launched.
        let is_file = fs::metadata(path).map(|m| m.is_file()).unwrap_or(false);
        is_file && access(path, Access::EXEC_OK).is_ok()
    }

    #[cfg(not(unix))]
    fn is_executable(&self, path: &Path) -> bool {
        path.is_file()
    }
}
