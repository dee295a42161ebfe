// src/runner.rs

//! The sequential run loop.

use tracing::info;

use crate::errors::Result;
use crate::exec::CheckBackend;
use crate::report::Reporter;
use crate::types::{Check, CheckOutcome, RunSummary};

/// Run `checks` one after another, in the given order.
///
/// Each check is announced, executed through `backend` and followed by a
/// blank line. Checks that exit non-zero are reported and collected; the run
/// carries on with the next check. A backend error (the check could not be
/// launched) stops the run immediately.
///
/// When at least one check failed, the failure summary is written before
/// returning.
pub async fn run_checks<B>(
    checks: &[Check],
    backend: &mut B,
    reporter: &mut Reporter,
) -> Result<RunSummary>
where
    B: CheckBackend + ?Sized,
{
    let mut summary = RunSummary::default();

    for check in checks {
        reporter.announce(&check.name)?;

        let outcome = backend.run_check(check, reporter).await?;
        summary.executed += 1;

        if let CheckOutcome::Failed(code) = outcome {
            info!(check = %check.name, exit_code = code, "check failed");
            reporter.check_failed(&check.name, code)?;
            summary.failed.push(check.name.clone());
        }

        reporter.separator()?;
    }

    reporter.failure_summary(&summary.failed)?;

    info!(
        executed = summary.executed,
        failed = summary.failed.len(),
        "run finished"
    );
    Ok(summary)
}
