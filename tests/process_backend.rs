// tests/process_backend.rs

#![cfg(unix)]

mod common;
use crate::common::{ChecksDirBuilder, SharedBuffer, init_tracing};

use std::error::Error;

use run_all::discovery::discover_checks;
use run_all::errors::RunAllError;
use run_all::exec::{CheckBackend, ProcessBackend};
use run_all::fs::RealFileSystem;
use run_all::runner::run_checks;
use run_all::types::{Check, CheckOutcome};

type TestResult = Result<(), Box<dyn Error>>;

#[tokio::test]
async fn stdout_and_stderr_lines_are_prefixed_and_trimmed() -> TestResult {
    init_tracing();
    let repo = ChecksDirBuilder::new()?.script(
        "mixed.sh",
        "echo '  out line  '\necho 'err line' >&2\nprintf 'no newline'",
    )?;
    let check = Check::new("mixed.sh", repo.checks_dir().join("mixed.sh"));

    let out = SharedBuffer::new();
    let mut reporter = out.reporter();
    let outcome = ProcessBackend::new().run_check(&check, &mut reporter).await?;

    assert_eq!(outcome, CheckOutcome::Passed);
    assert_eq!(
        out.lines(),
        vec!["[mixed.sh] out line", "[mixed.sh] err line", "[mixed.sh] no newline"]
    );
    Ok(())
}

#[tokio::test]
async fn interleaved_stdout_and_stderr_keep_write_order() -> TestResult {
    init_tracing();
    let repo = ChecksDirBuilder::new()?.script(
        "chatty.sh",
        "i=1\nwhile [ $i -le 300 ]; do\n  echo out$i\n  echo err$i >&2\n  i=$((i+1))\ndone",
    )?;
    let check = Check::new("chatty.sh", repo.checks_dir().join("chatty.sh"));

    let out = SharedBuffer::new();
    let mut reporter = out.reporter();
    let outcome = ProcessBackend::new().run_check(&check, &mut reporter).await?;

    assert_eq!(outcome, CheckOutcome::Passed);
    let expected: Vec<String> = (1..=300)
        .flat_map(|i| [format!("[chatty.sh] out{i}"), format!("[chatty.sh] err{i}")])
        .collect();
    assert_eq!(out.lines(), expected);
    Ok(())
}

#[tokio::test]
async fn exit_code_is_reported() -> TestResult {
    init_tracing();
    let repo = ChecksDirBuilder::new()?.script("fail.sh", "exit 7")?;
    let check = Check::new("fail.sh", repo.checks_dir().join("fail.sh"));

    let out = SharedBuffer::new();
    let mut reporter = out.reporter();
    let outcome = ProcessBackend::new().run_check(&check, &mut reporter).await?;

    assert_eq!(outcome, CheckOutcome::Failed(7));
    assert!(out.contents().is_empty());
    Ok(())
}

#[tokio::test]
async fn signal_kill_maps_to_negative_code() -> TestResult {
    let repo = ChecksDirBuilder::new()?.script("killed.sh", "kill -9 $$")?;
    let check = Check::new("killed.sh", repo.checks_dir().join("killed.sh"));

    let out = SharedBuffer::new();
    let mut reporter = out.reporter();
    let outcome = ProcessBackend::new().run_check(&check, &mut reporter).await?;

    assert_eq!(outcome, CheckOutcome::Failed(-9));
    Ok(())
}

#[tokio::test]
async fn file_names_are_not_interpreted_by_a_shell() -> TestResult {
    init_tracing();
    let repo = ChecksDirBuilder::new()?.script("odd name; echo injected", "echo safe")?;
    let check = Check::new(
        "odd name; echo injected",
        repo.checks_dir().join("odd name; echo injected"),
    );

    let out = SharedBuffer::new();
    let mut reporter = out.reporter();
    let outcome = ProcessBackend::new().run_check(&check, &mut reporter).await?;

    assert_eq!(outcome, CheckOutcome::Passed);
    assert_eq!(out.lines(), vec!["[odd name; echo injected] safe"]);
    Ok(())
}

#[tokio::test]
async fn missing_executable_is_a_launch_error() -> TestResult {
    let repo = ChecksDirBuilder::new()?;
    let check = Check::new("gone.sh", repo.checks_dir().join("gone.sh"));

    let out = SharedBuffer::new();
    let mut reporter = out.reporter();
    let result = ProcessBackend::new().run_check(&check, &mut reporter).await;

    match result {
        Err(RunAllError::Launch { check, source }) => {
            assert_eq!(check, "gone.sh");
            assert_eq!(source.kind(), std::io::ErrorKind::NotFound);
        }
        other => panic!("expected Launch error, got {:?}", other),
    }
    Ok(())
}

#[tokio::test]
async fn discovered_checks_run_end_to_end() -> TestResult {
    init_tracing();
    let repo = ChecksDirBuilder::new()?
        .script("b.sh", "exit 1")?
        .script("a.sh", "echo hi")?
        .plain_file("notes.sh", "echo never")?
        .script("README.md", "echo never")?
        .script("run_all", "echo never")?
        .subdir("lib")?;
    let layout = repo.layout("run_all");

    let checks = discover_checks(&RealFileSystem, &layout)?;
    let mut names: Vec<&str> = checks.iter().map(|c| c.name.as_str()).collect();
    names.sort();
    assert_eq!(names, vec!["a.sh", "b.sh"]);

    let out = SharedBuffer::new();
    let mut reporter = out.reporter();
    let summary = run_checks(&checks, &mut ProcessBackend::new(), &mut reporter).await?;

    assert_eq!(summary.failed, vec!["b.sh"]);
    let contents = out.contents();
    assert!(contents.contains("[a.sh] hi\n"));
    assert!(contents.contains("Script b.sh failed with exit status 1.\n"));
    assert!(contents.ends_with("The following scripts failed:\n- b.sh\n"));
    assert!(!contents.contains("never"));
    Ok(())
}
