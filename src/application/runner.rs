//! Build pass

use std::path::PathBuf;

use crate::domain::CompileStatus;
use crate::error::{BuildError, BuildResult};
use crate::infrastructure::list_sources;

use super::event::BuildEvent;
use super::ports::Compiler;

/// Runner configuration, fixed at construction
#[derive(Debug, Clone)]
pub struct RunnerOptions {
    /// Directory whose sources are compiled
    pub root: PathBuf,
    /// Source extension without the leading dot
    pub extension: String,
    /// Abort the pass on the first compile failure
    pub strict: bool,
    /// Emit a [`BuildEvent::CommandTrace`] before each invocation
    pub trace: bool,
}

impl RunnerOptions {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            extension: "java".to_string(),
            strict: false,
            trace: false,
        }
    }

    pub fn with_extension(mut self, extension: impl Into<String>) -> Self {
        self.extension = extension.into();
        self
    }

    /// Strict runs also trace, the way `set -ex` would.
    pub fn with_strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self.trace |= strict;
        self
    }

    pub fn with_trace(mut self, trace: bool) -> Self {
        self.trace = trace;
        self
    }
}

/// Outcome of a pass that ran to the end
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PassSummary {
    pub compiled: usize,
    pub failed: usize,
}

pub struct BuildRunner<C> {
    compiler: C,
    options: RunnerOptions,
}

impl<C: Compiler> BuildRunner<C> {
    pub fn new(compiler: C, options: RunnerOptions) -> Self {
        Self { compiler, options }
    }

    pub fn options(&self) -> &RunnerOptions {
        &self.options
    }

    /// Compile every matching source once, in listing order.
    ///
    /// In strict mode the first failure is returned as
    /// [`BuildError::CompileFailure`] and no further file is compiled.
    pub fn run_pass(&self, on_event: &impl Fn(BuildEvent)) -> BuildResult<PassSummary> {
        let sources = list_sources(&self.options.root, &self.options.extension)?;
        on_event(BuildEvent::PassStarted {
            files: sources.len(),
        });

        let mut summary = PassSummary::default();
        for file in &sources {
            let display = file.display().to_string();
            on_event(BuildEvent::Compiling {
                file: display.clone(),
            });
            if self.options.trace {
                on_event(BuildEvent::CommandTrace {
                    command: format!("{} {}", self.compiler.program(), display),
                });
            }

            match self.compiler.compile(file)? {
                CompileStatus::Success => summary.compiled += 1,
                CompileStatus::Failed { code } => {
                    on_event(BuildEvent::CompileFailed {
                        file: display,
                        code,
                    });
                    if self.options.strict {
                        return Err(BuildError::CompileFailure {
                            file: file.clone(),
                            code,
                        });
                    }
                    summary.failed += 1;
                }
            }
        }

        on_event(BuildEvent::PassComplete {
            compiled: summary.compiled,
            failed: summary.failed,
        });
        Ok(summary)
    }
}
