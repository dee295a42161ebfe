// src/layout.rs

//! Repository layout as seen from the runner executable.
//!
//! The runner lives in `<repo root>/quality-checks/`, so the repo root is the
//! parent of the directory holding the (symlink-resolved) executable. The run
//! refuses to start unless the working directory is that root.

use std::path::{Path, PathBuf};

use tracing::debug;

use crate::errors::{Result, RunAllError};
use crate::fs::FileSystem;

/// Name of the checks directory, relative to the repo root.
pub const CHECKS_DIR_NAME: &str = "quality-checks";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Layout {
    pub repo_root: PathBuf,
    pub checks_dir: PathBuf,
    /// File name of the runner itself; never executed as a check.
    pub runner_name: String,
}

impl Layout {
    /// Derive the layout from the path of the runner executable.
    pub fn from_runner_path(fs: &dyn FileSystem, runner: &Path) -> Result<Self> {
        let runner = fs.canonicalize(runner)?;

        let runner_name = runner
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .ok_or_else(|| RunAllError::RunnerLocation(runner.clone()))?;
        let repo_root = runner
            .parent()
            .and_then(Path::parent)
            .ok_or_else(|| RunAllError::RunnerLocation(runner.clone()))?
            .to_path_buf();

        let layout = Self {
            checks_dir: repo_root.join(CHECKS_DIR_NAME),
            repo_root,
            runner_name,
        };
        debug!(?layout, "resolved repository layout");
        Ok(layout)
    }

    /// Derive the layout from the currently running executable.
    pub fn from_current_exe(fs: &dyn FileSystem) -> Result<Self> {
        let exe = std::env::current_exe()?;
        Self::from_runner_path(fs, &exe)
    }

    /// Fail with [`RunAllError::NotInRepoRoot`] unless `cwd` is the repo root.
    pub fn verify_cwd(&self, fs: &dyn FileSystem, cwd: &Path) -> Result<()> {
        let cwd = fs.canonicalize(cwd)?;
        if cwd != self.repo_root {
            debug!(cwd = %cwd.display(), repo_root = %self.repo_root.display(), "cwd mismatch");
            return Err(RunAllError::NotInRepoRoot {
                runner_name: self.runner_name.clone(),
            });
        }
        Ok(())
    }
}
