// src/errors.rs

//! Crate-wide error type.

use std::path::PathBuf;

use thiserror::Error;

use crate::layout::CHECKS_DIR_NAME;

#[derive(Error, Debug)]
pub enum RunAllError {
    /// The runner was started from somewhere other than the repo root.
    ///
    /// The message is user guidance, not a diagnostic; `main` prints it on
    /// stdout.
    #[error(
        "The script must be run from the repo root. Please cd into the repo root \
         directory and then type: ./{}/{runner_name}.",
        CHECKS_DIR_NAME
    )]
    NotInRepoRoot { runner_name: String },

    #[error("cannot derive repo root from runner path {0:?}")]
    RunnerLocation(PathBuf),

    #[error("failed to launch check '{check}': {source}")]
    Launch {
        check: String,
        #[source]
        source: std::io::Error,
    },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

pub type Result<T> = std::result::Result<T, RunAllError>;
