// src/main.rs

use std::process::ExitCode;

use run_all::errors::RunAllError;
use run_all::{logging, run};

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    if let Err(err) = logging::init_logging() {
        eprintln!("run_all error: {err:?}");
    }

    match run().await {
        Ok(summary) if summary.all_passed() => ExitCode::SUCCESS,
        Ok(_) => ExitCode::FAILURE,
        Err(err @ RunAllError::NotInRepoRoot { .. }) => {
            println!("{err}");
            ExitCode::FAILURE
        }
        Err(err) => {
            eprintln!("run_all error: {err}");
            ExitCode::FAILURE
        }
    }
}
