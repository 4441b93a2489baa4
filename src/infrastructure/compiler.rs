//! Subprocess compiler

use std::io;
use std::path::{Path, PathBuf};
use std::process::{Command, ExitStatus};

use crate::application::Compiler;
use crate::domain::CompileStatus;
use crate::error::{BuildError, BuildResult};

/// Runs `<program> <file>` in `working_dir`, inheriting stdio so the
/// compiler's diagnostics reach the terminal unchanged.
///
/// A program that cannot be found or executed fails the file the way a
/// shell would, with status 127 or 126 respectively.
#[derive(Debug, Clone)]
pub struct ProcessCompiler {
    program: String,
    working_dir: PathBuf,
}

impl ProcessCompiler {
    pub fn new(program: impl Into<String>, working_dir: impl Into<PathBuf>) -> Self {
        Self {
            program: program.into(),
            working_dir: working_dir.into(),
        }
    }
}

impl Compiler for ProcessCompiler {
    fn program(&self) -> &str {
        &self.program
    }

    fn compile(&self, file: &Path) -> BuildResult<CompileStatus> {
        let status = match Command::new(&self.program)
            .arg(file)
            .current_dir(&self.working_dir)
            .status()
        {
            Ok(status) => status,
            Err(source) => return self.launch_failure(source),
        };

        if status.success() {
            Ok(CompileStatus::Success)
        } else {
            Ok(CompileStatus::Failed {
                code: exit_code(status),
            })
        }
    }
}

impl ProcessCompiler {
    fn launch_failure(&self, source: io::Error) -> BuildResult<CompileStatus> {
        let (code, reason) = match source.kind() {
            io::ErrorKind::NotFound => (127, "command not found"),
            io::ErrorKind::PermissionDenied => (126, "permission denied"),
            _ => {
                return Err(BuildError::CompilerLaunch {
                    program: self.program.clone(),
                    source,
                })
            }
        };
        eprintln!("jwatch: {}: {}", self.program, reason);
        Ok(CompileStatus::Failed { code })
    }
}

/// Exit code of a finished process, using the shell convention of
/// 128 + signal number for processes killed by a signal.
fn exit_code(status: ExitStatus) -> i32 {
    if let Some(code) = status.code() {
        return code;
    }
    #[cfg(unix)]
    {
        use std::os::unix::process::ExitStatusExt;
        if let Some(signal) = status.signal() {
            return 128 + signal;
        }
    }
    1
}
