// src/report.rs

//! Human-readable run output.
//!
//! Everything the user sees on stdout goes through [`Reporter`]: the
//! announcement before each check, the prefixed lines of its output, the
//! per-check failure notice and the closing summary. Diagnostics go to
//! `tracing` instead.

use std::io::{self, Write};

/// Line-oriented writer for run output.
pub struct Reporter {
    out: Box<dyn Write + Send>,
}

impl Reporter {
    pub fn new(out: Box<dyn Write + Send>) -> Self {
        Self { out }
    }

    /// Reporter writing to the process stdout.
    pub fn stdout() -> Self {
        Self::new(Box::new(io::stdout()))
    }

    pub fn announce(&mut self, check: &str) -> io::Result<()> {
        writeln!(self.out, "Executing: {check}")
    }

    /// One line of a check's output, trimmed and prefixed with its name.
    pub fn check_line(&mut self, check: &str, line: &str) -> io::Result<()> {
        writeln!(self.out, "[{check}] {}", line.trim())?;
        self.out.flush()
    }

    pub fn check_failed(&mut self, check: &str, code: i32) -> io::Result<()> {
        writeln!(self.out, "Script {check} failed with exit status {code}.")
    }

    pub fn separator(&mut self) -> io::Result<()> {
        writeln!(self.out)?;
        self.out.flush()
    }

    /// Closing block listing failed checks. Writes nothing when all passed.
    pub fn failure_summary(&mut self, failed: &[String]) -> io::Result<()> {
        if failed.is_empty() {
            return Ok(());
        }

        writeln!(self.out, "The following scripts failed:")?;
        for name in failed {
            writeln!(self.out, "- {name}")?;
        }
        self.out.flush()
    }
}

impl std::fmt::Debug for Reporter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Reporter").finish_non_exhaustive()
    }
}
