// src/exec/backend.rs

//! Pluggable check execution.
//!
//! The runner loop hands each check to a `CheckBackend` and gets its outcome
//! back. Output lines are written to the `Reporter` while the check runs.

use std::future::Future;
use std::pin::Pin;

use crate::errors::Result;
use crate::report::Reporter;
use crate::types::{Check, CheckOutcome};

use super::process::run_process;

/// Trait abstracting how a single check is executed.
pub trait CheckBackend: Send {
    /// Run `check` to completion, streaming its output lines to `reporter`.
    ///
    /// An `Err` means the check could not be run at all (e.g. launch
    /// failure) and aborts the whole run. A check that ran and exited
    /// non-zero is `Ok(CheckOutcome::Failed(_))`.
    fn run_check<'a>(
        &'a mut self,
        check: &'a Check,
        reporter: &'a mut Reporter,
    ) -> Pin<Box<dyn Future<Output = Result<CheckOutcome>> + Send + 'a>>;
}

/// Backend that launches checks as OS processes.
#[derive(Debug, Clone, Default)]
pub struct ProcessBackend;

impl ProcessBackend {
    pub fn new() -> Self {
        Self
    }
}

impl CheckBackend for ProcessBackend {
    fn run_check<'a>(
        &'a mut self,
        check: &'a Check,
        reporter: &'a mut Reporter,
    ) -> Pin<Box<dyn Future<Output = Result<CheckOutcome>> + Send + 'a>> {
        Box::pin(run_process(check, reporter))
    }
}
