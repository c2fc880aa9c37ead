//! Binary crate for the `goforecast` command-line tool.
//!
//! This crate focuses on:
//! - Parsing CLI arguments
//! - Logging setup
//! - Turning the lookup result into an exit status

use std::{io::Write, process::ExitCode};

use clap::{Parser, error::ErrorKind};
use tracing_subscriber::EnvFilter;

mod cli;

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    init_tracing();

    let cmd = match cli::Cli::try_parse() {
        Ok(cmd) => cmd,
        Err(err) if matches!(err.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            err.exit()
        }
        Err(err) => {
            let _ = err.print();
            return ExitCode::from(1);
        }
    };

    ExitCode::from(report(cmd.run().await, &mut std::io::stderr()))
}

/// The only exit-status decision: 0 on success, otherwise `Error: <msg>` on
/// `err_out` and 1.
fn report(result: anyhow::Result<()>, err_out: &mut impl Write) -> u8 {
    match result {
        Ok(()) => 0,
        Err(err) => {
            let _ = writeln!(err_out, "Error: {err}");
            1
        }
    }
}

/// Initialize global tracing subscriber on stderr.
///
/// Uses `RUST_LOG` if set (e.g. `RUST_LOG=goforecast_core=debug`), otherwise
/// only warnings are shown so stdout carries just the report.
fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("goforecast_cli=warn,goforecast_core=warn"));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .try_init();
}
