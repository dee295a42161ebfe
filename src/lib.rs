// src/lib.rs

pub mod discovery;
pub mod errors;
pub mod exec;
pub mod fs;
pub mod layout;
pub mod logging;
pub mod report;
pub mod runner;
pub mod types;

use tracing::debug;

use crate::discovery::discover_checks;
use crate::errors::Result;
use crate::exec::ProcessBackend;
use crate::fs::RealFileSystem;
use crate::layout::Layout;
use crate::report::Reporter;
use crate::runner::run_checks;
use crate::types::RunSummary;

/// High-level entry point used by `main.rs`.
///
/// This wires together:
/// - the repo-root guard
/// - check discovery
/// - sequential execution with output on stdout
pub async fn run() -> Result<RunSummary> {
    let fs = RealFileSystem;

    let layout = Layout::from_current_exe(&fs)?;
    let cwd = std::env::current_dir()?;
    layout.verify_cwd(&fs, &cwd)?;

    let checks = discover_checks(&fs, &layout)?;
    debug!(checks = ?checks.iter().map(|c| c.name.as_str()).collect::<Vec<_>>(), "run order");

    let mut backend = ProcessBackend::new();
    let mut reporter = Reporter::stdout();
    run_checks(&checks, &mut backend, &mut reporter).await
}
