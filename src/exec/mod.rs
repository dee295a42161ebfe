// src/exec/mod.rs

//! Process execution layer.
//!
//! - [`backend`] provides the `CheckBackend` trait the runner loop talks to,
//!   and the production `ProcessBackend`. Tests swap in a fake backend.
//! - [`process`] launches a single check with `tokio::process::Command` and
//!   streams its output to the reporter.

pub mod backend;
pub mod process;

pub use backend::{CheckBackend, ProcessBackend};
pub use process::run_process;
