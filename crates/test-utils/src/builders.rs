#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tempfile::TempDir;

use run_all::layout::{CHECKS_DIR_NAME, Layout};

/// Builder for a throwaway repository containing a `quality-checks`
/// directory.
///
/// The temporary directory is removed when the builder (or the `TempDir`
/// returned by [`ChecksDirBuilder::into_temp_dir`]) is dropped.
pub struct ChecksDirBuilder {
    root: TempDir,
}

impl ChecksDirBuilder {
    pub fn new() -> Result<Self> {
        Self::from_temp_dir(tempfile::tempdir()?)
    }

    /// Create the repository under `parent`, e.g. to stay on the same
    /// filesystem as the build output.
    pub fn new_in(parent: impl AsRef<Path>) -> Result<Self> {
        Self::from_temp_dir(tempfile::tempdir_in(parent)?)
    }

    fn from_temp_dir(root: TempDir) -> Result<Self> {
        fs::create_dir(root.path().join(CHECKS_DIR_NAME))
            .context("creating checks dir")?;
        Ok(Self { root })
    }

    /// Canonical repo root (symlinks in the temp path resolved).
    pub fn repo_root(&self) -> PathBuf {
        fs::canonicalize(self.root.path()).unwrap_or_else(|_| self.root.path().to_path_buf())
    }

    pub fn checks_dir(&self) -> PathBuf {
        self.repo_root().join(CHECKS_DIR_NAME)
    }

    /// Layout as the runner would compute it if installed as `runner_name`.
    pub fn layout(&self, runner_name: &str) -> Layout {
        Layout {
            repo_root: self.repo_root(),
            checks_dir: self.checks_dir(),
            runner_name: runner_name.to_string(),
        }
    }

    /// Write a `/bin/sh` script with the given body, mode 0755.
    pub fn script(self, name: &str, body: &str) -> Result<Self> {
        let contents = format!("#!/bin/sh\n{body}\n");
        self.file_with_mode(name, contents.as_bytes(), 0o755)
    }

    /// Write a file that is not executable (mode 0644).
    pub fn plain_file(self, name: &str, contents: &str) -> Result<Self> {
        self.file_with_mode(name, contents.as_bytes(), 0o644)
    }

    pub fn subdir(self, name: &str) -> Result<Self> {
        fs::create_dir(self.checks_dir().join(name))
            .with_context(|| format!("creating subdir {name}"))?;
        Ok(self)
    }

    pub fn file_with_mode(self, name: &str, contents: &[u8], mode: u32) -> Result<Self> {
        let path = self.checks_dir().join(name);
        fs::write(&path, contents).with_context(|| format!("writing {:?}", path))?;
        set_mode(&path, mode)?;
        Ok(self)
    }

    pub fn into_temp_dir(self) -> TempDir {
        self.root
    }
}

#[cfg(unix)]
fn set_mode(path: &Path, mode: u32) -> Result<()> {
    use std::os::unix::fs::PermissionsExt;

    fs::set_permissions(path, fs::Permissions::from_mode(mode))
        .with_context(|| format!("chmod {:o} {:?}", mode, path))
}

#[cfg(not(unix))]
fn set_mode(_path: &Path, _mode: u32) -> Result<()> {
    Ok(())
}
