//! Domain types
//!
//! Plain values with no IO: how the process was invoked, which state the
//! runner is in, and what a build pass operates on.

mod invocation;
mod outcome;
mod sources;
mod state;

pub use invocation::{BuildMode, Invocation, WATCH_TOKEN};
pub use outcome::{CompileStatus, DirectoryChanged};
pub use sources::SourceFileSet;
pub use state::{RunnerState, Trigger};
