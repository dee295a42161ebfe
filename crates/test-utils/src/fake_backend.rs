use std::collections::HashMap;
use std::future::Future;
use std::io::{self, Write};
use std::pin::Pin;
use std::sync::{Arc, Mutex};

use run_all::errors::{Result, RunAllError};
use run_all::exec::CheckBackend;
use run_all::report::Reporter;
use run_all::types::{Check, CheckOutcome};

/// What a scripted check does when the fake backend "runs" it.
#[derive(Debug, Clone)]
enum Script {
    Exit { lines: Vec<String>, code: i32 },
    LaunchError,
}

/// A fake backend that:
/// - records which checks were "run", in order
/// - writes the scripted output lines to the reporter
/// - returns the scripted exit code (0 for unscripted checks).
#[derive(Debug, Clone, Default)]
pub struct FakeBackend {
    scripts: HashMap<String, Script>,
    executed: Arc<Mutex<Vec<String>>>,
}

impl FakeBackend {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_check(mut self, name: &str, lines: &[&str], code: i32) -> Self {
        self.scripts.insert(
            name.to_string(),
            Script::Exit {
                lines: lines.iter().map(|l| l.to_string()).collect(),
                code,
            },
        );
        self
    }

    /// Make `name` fail to launch, like a missing or unreadable executable.
    pub fn with_launch_error(mut self, name: &str) -> Self {
        self.scripts.insert(name.to_string(), Script::LaunchError);
        self
    }

    pub fn executed(&self) -> Vec<String> {
        self.executed.lock().unwrap().clone()
    }
}

impl CheckBackend for FakeBackend {
    fn run_check<'a>(
        &'a mut self,
        check: &'a Check,
        reporter: &'a mut Reporter,
    ) -> Pin<Box<dyn Future<Output = Result<CheckOutcome>> + Send + 'a>> {
        let script = self.scripts.get(&check.name).cloned();
        let executed = Arc::clone(&self.executed);

        Box::pin(async move {
            match script {
                Some(Script::LaunchError) => Err(RunAllError::Launch {
                    check: check.name.clone(),
                    source: io::Error::new(io::ErrorKind::NotFound, "scripted launch error"),
                }),
                Some(Script::Exit { lines, code }) => {
                    executed.lock().unwrap().push(check.name.clone());
                    for line in &lines {
                        reporter.check_line(&check.name, line)?;
                    }
                    Ok(CheckOutcome::from_code(code))
                }
                None => {
                    executed.lock().unwrap().push(check.name.clone());
                    Ok(CheckOutcome::Passed)
                }
            }
        })
    }
}

/// `Write` sink shared between a `Reporter` and the test inspecting it.
#[derive(Debug, Clone, Default)]
pub struct SharedBuffer {
    inner: Arc<Mutex<Vec<u8>>>,
}

impl SharedBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn reporter(&self) -> Reporter {
        Reporter::new(Box::new(self.clone()))
    }

    pub fn contents(&self) -> String {
        String::from_utf8_lossy(&self.inner.lock().unwrap()).into_owned()
    }

    pub fn lines(&self) -> Vec<String> {
        self.contents().lines().map(str::to_string).collect()
    }
}

impl Write for SharedBuffer {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.inner.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}
