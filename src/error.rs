//! Error types for jwatch
//!
//! Library code returns [`BuildError`]; the binary wraps it in `anyhow` and
//! inspects [`BuildError::exit_code`] to decide the process status.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for jwatch operations
pub type BuildResult<T> = Result<T, BuildError>;

/// Main error type for jwatch operations
#[derive(Error, Debug)]
pub enum BuildError {
    /// The compiler exited non-zero for a source file
    #[error("compilation of {file} failed with exit status {code}")]
    CompileFailure { file: PathBuf, code: i32 },

    /// The compiler process could not be started for a reason other than
    /// a missing or non-executable program
    #[error("failed to launch compiler '{program}'")]
    CompilerLaunch {
        program: String,
        #[source]
        source: std::io::Error,
    },

    /// The source directory could not be listed
    #[error("cannot list source directory {path}")]
    ReadDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The filesystem watcher could not be set up
    #[error("cannot watch {path}: {message}")]
    Watch { path: PathBuf, message: String },

    /// A config file could not be parsed or holds unusable values
    #[error("invalid config in {file}: {message}")]
    InvalidConfig { file: PathBuf, message: String },

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl BuildError {
    /// Exit status the process should terminate with for this error.
    ///
    /// A compile failure forwards the compiler's own status; everything else
    /// is a runner fault and maps to 1.
    pub fn exit_code(&self) -> i32 {
        match self {
            BuildError::CompileFailure { code, .. } => *code,
            _ => 1,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_compile_failure() {
        let err = BuildError::CompileFailure {
            file: PathBuf::from("Main.java"),
            code: 1,
        };
        assert_eq!(
            err.to_string(),
            "compilation of Main.java failed with exit status 1"
        );
    }

    #[test]
    fn test_compile_failure_forwards_compiler_status() {
        let err = BuildError::CompileFailure {
            file: PathBuf::from("Broken.java"),
            code: 2,
        };
        assert_eq!(err.exit_code(), 2);
    }

    #[test]
    fn test_infrastructure_errors_exit_with_one() {
        let err = BuildError::Watch {
            path: PathBuf::from("."),
            message: "inotify limit reached".to_string(),
        };
        assert_eq!(err.exit_code(), 1);
        assert_eq!(err.to_string(), "cannot watch .: inotify limit reached");
    }

    #[test]
    fn test_io_cause_is_reported_once_in_the_chain() {
        let err = BuildError::ReadDir {
            path: PathBuf::from("src"),
            source: std::io::Error::new(std::io::ErrorKind::Other, "disk on fire"),
        };
        assert_eq!(err.to_string(), "cannot list source directory src");

        let chain = format!("{:#}", anyhow::Error::from(err));
        assert_eq!(chain, "cannot list source directory src: disk on fire");
    }

    #[test]
    fn test_launch_error_message_leaves_cause_to_the_chain() {
        let err = BuildError::CompilerLaunch {
            program: "javac".to_string(),
            source: std::io::Error::new(std::io::ErrorKind::Other, "resource busy"),
        };
        assert_eq!(err.to_string(), "failed to launch compiler 'javac'");
        assert_eq!(err.exit_code(), 1);
    }
}
