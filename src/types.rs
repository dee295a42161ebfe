// src/types.rs

use std::path::PathBuf;

/// An executable entry of the checks directory, selected for execution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Check {
    /// Entry file name; used for prefixes and in the failure summary.
    pub name: String,
    /// Full path the check is launched from.
    pub path: PathBuf,
}

impl Check {
    pub fn new(name: impl Into<String>, path: impl Into<PathBuf>) -> Self {
        Self {
            name: name.into(),
            path: path.into(),
        }
    }
}

/// Result of a single check process.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CheckOutcome {
    Passed,
    /// Non-zero exit. Holds the exit code, or the negated signal number if
    /// the process was killed by a signal.
    Failed(i32),
}

impl CheckOutcome {
    /// Map a raw exit code to an outcome.
    pub fn from_code(code: i32) -> Self {
        if code == 0 {
            CheckOutcome::Passed
        } else {
            CheckOutcome::Failed(code)
        }
    }
}

/// Aggregate result of a full run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunSummary {
    /// Number of checks that were launched.
    pub executed: usize,
    /// Names of failed checks, in completion order.
    pub failed: Vec<String>,
}

impl RunSummary {
    pub fn all_passed(&self) -> bool {
        self.failed.is_empty()
    }
}
