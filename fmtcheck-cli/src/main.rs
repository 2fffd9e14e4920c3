// These Clippy lints are disabled because this is a CLI binary, not a library:
// - print_stdout/print_stderr: CLI tools are expected to print to stdout/stderr for user output.
// - unwrap_used/expect_used: In a CLI binary, panicking on unrecoverable errors is acceptable.
#![allow(
    clippy::print_stdout,
    clippy::print_stderr,
    clippy::unwrap_used,
    clippy::expect_used
)]

mod cli;
mod logging;
mod server;

use std::process::ExitCode;

#[tokio::main]
async fn main() -> ExitCode {
    match cli::run().await {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}
