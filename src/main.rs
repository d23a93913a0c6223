//! Lettericon - command-line tool for generating browser extension icons

use std::process::ExitCode;

use lettericon::cli;

fn main() -> ExitCode {
    cli::run()
}
