//! jwatch - compile the Java sources of a directory, optionally on every change
//!
//! A run performs one build pass over every `*.java` file in the working
//! directory, invoking the compiler once per file. In watch mode it then
//! blocks on filesystem notifications and repeats the pass for each one.

pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;

// Re-exports for convenience
pub use application::{
    BuildEvent, BuildRunner, BuildSession, ChangeSource, Compiler, PassSummary, RunnerOptions,
    SessionSummary,
};
pub use config::{Config, ConfigWarning};
pub use domain::{BuildMode, CompileStatus, DirectoryChanged, Invocation, RunnerState, SourceFileSet};
pub use error::{BuildError, BuildResult};
pub use infrastructure::{list_sources, DirectoryWatcher, ProcessCompiler};
