// src/exec/process.rs

//! Single check process runner.

use std::io::{BufRead, BufReader, PipeReader};
use std::process::{ExitStatus, Stdio};

use anyhow::Context;
use tokio::process::Command;
use tokio::sync::mpsc;
use tracing::info;

use crate::errors::{Result, RunAllError};
use crate::report::Reporter;
use crate::types::{Check, CheckOutcome};

/// Launch `check`, forward its output line by line to `reporter` and wait
/// for it to exit.
///
/// The executable is started directly, without a shell, so the file name is
/// never interpreted. stdout and stderr share one pipe, so lines are reported
/// in the order the child wrote them.
pub async fn run_process(check: &Check, reporter: &mut Reporter) -> Result<CheckOutcome> {
    info!(check = %check.name, path = %check.path.display(), "starting check process");

    let (reader, writer) = std::io::pipe()?;

    let mut cmd = Command::new(&check.path);
    cmd.stdout(Stdio::from(writer.try_clone()?))
        .stderr(Stdio::from(writer))
        .kill_on_drop(true);
    let spawned = cmd.spawn();
    // The command owns the parent's write ends; the reader sees EOF only once
    // they are closed.
    drop(cmd);

    let mut child = spawned.map_err(|source| RunAllError::Launch {
        check: check.name.clone(),
        source,
    })?;

    let (tx, mut rx) = mpsc::channel::<std::io::Result<Vec<u8>>>(64);
    let forwarder = tokio::task::spawn_blocking(move || forward_segments(reader, tx));

    while let Some(segment) = rx.recv().await {
        let bytes = segment?;
        reporter.check_line(&check.name, &String::from_utf8_lossy(&bytes))?;
    }
    forwarder
        .await
        .with_context(|| format!("joining output reader of check '{}'", check.name))?;

    let status = child.wait().await?;
    let code = exit_code(status);

    info!(
        check = %check.name,
        exit_code = code,
        success = status.success(),
        "check process exited"
    );

    Ok(CheckOutcome::from_code(code))
}

/// Read `\n`-separated segments from the child's pipe until EOF.
///
/// Runs on a blocking thread; stops early once the receiver is gone.
fn forward_segments(reader: PipeReader, tx: mpsc::Sender<std::io::Result<Vec<u8>>>) {
    for segment in BufReader::new(reader).split(b'\n') {
        if tx.blocking_send(segment).is_err() {
            break;
        }
    }
}

/// Exit code of a finished process; a signal kill maps to the negated
/// signal number.
#[cfg(unix)]
fn exit_code(status: ExitStatus) -> i32 {
    use std::os::unix::process::ExitStatusExt;

    match (status.code(), status.signal()) {
        (Some(code), _) => code,
        (None, Some(signal)) => {
            tracing::debug!(signal, "check process terminated by signal");
            -signal
        }
        (None, None) => -1,
    }
}

#[cfg(not(unix))]
fn exit_code(status: ExitStatus) -> i32 {
    status.code().unwrap_or(-1)
}
