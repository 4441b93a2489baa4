//! Ports implemented by the infrastructure layer

use std::path::Path;
use std::sync::mpsc::Receiver;

use crate::domain::{CompileStatus, DirectoryChanged};
use crate::error::BuildResult;

/// Something that compiles a single source file
pub trait Compiler {
    /// Program name, used for command traces
    fn program(&self) -> &str;

    /// Compile `file` (relative to the build root), blocking until done.
    ///
    /// A non-zero exit is a [`CompileStatus::Failed`], not an error; errors
    /// are reserved for failing to run the compiler at all.
    fn compile(&self, file: &Path) -> BuildResult<CompileStatus>;
}

/// Blocking source of "directory changed" notifications
pub trait ChangeSource {
    /// Block until the next change. `Ok(None)` means no change will ever
    /// arrive again.
    fn next_change(&mut self) -> BuildResult<Option<DirectoryChanged>>;
}

impl ChangeSource for Receiver<DirectoryChanged> {
    fn next_change(&mut self) -> BuildResult<Option<DirectoryChanged>> {
        Ok(self.recv().ok())
    }
}

impl<C: Compiler + ?Sized> Compiler for &C {
    fn program(&self) -> &str {
        (**self).program()
    }

    fn compile(&self, file: &Path) -> BuildResult<CompileStatus> {
        (**self).compile(file)
    }
}
