//! Application layer
//!
//! - `BuildRunner` - one build pass over the source directory
//! - `BuildSession` - drives the runner through its lifecycle, including the
//!   watch loop
//! - `BuildEvent` - events emitted while running, rendered by the CLI
//!
//! IO sits behind the [`Compiler`] and [`ChangeSource`] ports so the runner can
//! be driven by fakes in tests.

mod event;
mod ports;
mod runner;
mod session;


pub use event::BuildEvent;
pub use ports::{ChangeSource, Compiler};
pub use runner::{BuildRunner, PassSummary, RunnerOptions};
pub use session::{BuildSession, SessionSummary};
