// tests/layout_guard.rs

mod common;
use crate::common::{ChecksDirBuilder, init_tracing};

use std::error::Error;
use std::path::{Path, PathBuf};

use run_all::errors::RunAllError;
use run_all::fs::RealFileSystem;
use run_all::fs::mock::MockFileSystem;
use run_all::layout::Layout;

type TestResult = Result<(), Box<dyn Error>>;

fn mock_repo() -> MockFileSystem {
    let fs = MockFileSystem::new();
    fs.add_file("/work/repo/quality-checks/run_all", true);
    fs.add_dir("/work/repo/src");
    fs
}

#[test]
fn repo_root_is_parent_of_runner_dir() -> TestResult {
    init_tracing();
    let fs = mock_repo();

    let layout = Layout::from_runner_path(&fs, Path::new("/work/repo/quality-checks/run_all"))?;

    assert_eq!(layout.repo_root, PathBuf::from("/work/repo"));
    assert_eq!(layout.checks_dir, PathBuf::from("/work/repo/quality-checks"));
    assert_eq!(layout.runner_name, "run_all");
    Ok(())
}

#[test]
fn cwd_equal_to_repo_root_passes() -> TestResult {
    let fs = mock_repo();
    let layout = Layout::from_runner_path(&fs, Path::new("/work/repo/quality-checks/run_all"))?;

    layout.verify_cwd(&fs, Path::new("/work/repo"))?;
    Ok(())
}

#[test]
fn cwd_elsewhere_is_rejected_with_guidance() -> TestResult {
    let fs = mock_repo();
    let layout = Layout::from_runner_path(&fs, Path::new("/work/repo/quality-checks/run_all"))?;

    for cwd in ["/work/repo/src", "/work/repo/quality-checks", "/work"] {
        match layout.verify_cwd(&fs, Path::new(cwd)) {
            Err(err @ RunAllError::NotInRepoRoot { .. }) => {
                let msg = err.to_string();
                assert!(msg.starts_with("The script must be run from the repo root."));
                assert!(msg.ends_with("then type: ./quality-checks/run_all."), "got: {msg}");
            }
            other => panic!("expected NotInRepoRoot for {cwd}, got {:?}", other),
        }
    }
    Ok(())
}

#[test]
fn runner_at_filesystem_root_has_no_repo_root() {
    let fs = MockFileSystem::new();
    fs.add_file("/run_all", true);

    match Layout::from_runner_path(&fs, Path::new("/run_all")) {
        Err(RunAllError::RunnerLocation(path)) => assert_eq!(path, PathBuf::from("/run_all")),
        other => panic!("expected RunnerLocation, got {:?}", other),
    }
}

#[cfg(unix)]
#[test]
fn symlinked_runner_resolves_to_its_target() -> TestResult {
    let repo = ChecksDirBuilder::new()?.script("run_all", "exit 0")?;
    let elsewhere = tempfile::tempdir()?;
    let link = elsewhere.path().join("bin").join("run_all");
    std::fs::create_dir(elsewhere.path().join("bin"))?;
    std::os::unix::fs::symlink(repo.checks_dir().join("run_all"), &link)?;

    let layout = Layout::from_runner_path(&RealFileSystem, &link)?;

    assert_eq!(layout.repo_root, repo.repo_root());
    assert_eq!(layout.runner_name, "run_all");
    layout.verify_cwd(&RealFileSystem, &repo.repo_root())?;
    Ok(())
}
