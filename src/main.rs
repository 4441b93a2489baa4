//! jwatch CLI - compile the Java sources of the current directory
//!
//! Usage:
//!   jwatch          strict build: stop at the first failure, trace commands
//!   jwatch watch    build, then rebuild whenever a file is written
//!   jwatch <other>  lenient build: compile everything, exit 0

mod cli;
mod commands;
mod ui;

use jwatch::{BuildError, Invocation};

use crate::cli::Cli;

fn main() {
    let cli = Cli::parse_verbatim(std::env::args_os());
    let invocation = Invocation::from_args(&cli.args);

    if let Err(err) = commands::build::cmd_build(invocation) {
        let build_error = err.downcast_ref::<BuildError>();
        // The compiler has already printed its diagnostics.
        if !matches!(build_error, Some(BuildError::CompileFailure { .. })) {
            eprintln!("Error: {:#}", err);
        }
        std::process::exit(build_error.map(BuildError::exit_code).unwrap_or(1));
    }
}
