//! Invocation parsing
//!
//! Only two facts are read from the arguments: whether any argument is
//! present, and whether the first one is the literal `watch`.

use std::ffi::OsStr;

/// Literal first argument that selects watch mode
pub const WATCH_TOKEN: &str = "watch";

/// Build mode, fixed for the lifetime of the process
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BuildMode {
    /// One build pass, then exit
    OneShot,
    /// One build pass, then rebuild on every change until killed
    Watch,
}

/// How the process was invoked
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Invocation {
    pub mode: BuildMode,
    /// Fail fast on the first compile failure and trace executed commands.
    /// Enabled exactly when no arguments were given.
    pub strict: bool,
}

impl Invocation {
    pub fn from_args<I, S>(args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<OsStr>,
    {
        let mut args = args.into_iter();
        match args.next() {
            None => Self {
                mode: BuildMode::OneShot,
                strict: true,
            },
            Some(first) => Self {
                mode: if first.as_ref() == OsStr::new(WATCH_TOKEN) {
                    BuildMode::Watch
                } else {
                    BuildMode::OneShot
                },
                strict: false,
            },
        }
    }
}
