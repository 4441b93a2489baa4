use std::path::PathBuf;

/// Result of a single compiler invocation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompileStatus {
    Success,
    /// Non-zero exit. `code` is the exit status, or 128 + signal number when
    /// the compiler was killed.
    Failed { code: i32 },
}

impl CompileStatus {
    pub fn is_success(&self) -> bool {
        matches!(self, CompileStatus::Success)
    }
}

/// One "directory changed" notification.
///
/// The runner treats it as opaque; `path` is only used for reporting.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DirectoryChanged {
    pub path: Option<PathBuf>,
}

impl DirectoryChanged {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: Some(path.into()),
        }
    }
}
