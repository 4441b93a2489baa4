//! Runner lifecycle
//!
//! ```text
//! Idle --start--> Building --pass done (one-shot)--> Terminal
//!                 Building --pass done (watch)-----> Watching
//!                 Building --fail fast-------------> Terminal
//! Watching --change--> Building
//! Watching --source closed--> Terminal
//! ```

use super::BuildMode;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunnerState {
    Idle,
    Building,
    Watching,
    Terminal,
}

/// Something that moves the runner between states
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Trigger {
    Start,
    PassComplete,
    FailFast,
    Changed,
    /// The change source ended. In production only an external signal stops
    /// a watching process, which never reaches this code; test sources end
    /// by closing their channel.
    SourceClosed,
}

impl RunnerState {
    /// Next state for `trigger`, or `None` if the trigger is not valid here.
    pub fn advance(self, trigger: Trigger, mode: BuildMode) -> Option<RunnerState> {
        use RunnerState::*;
        match (self, trigger) {
            (Idle, Trigger::Start) => Some(Building),
            (Building, Trigger::PassComplete) => Some(match mode {
                BuildMode::OneShot => Terminal,
                BuildMode::Watch => Watching,
            }),
            (Building, Trigger::FailFast) => Some(Terminal),
            (Watching, Trigger::Changed) => Some(Building),
            (Watching, Trigger::SourceClosed) => Some(Terminal),
            _ => None,
        }
    }

    pub fn is_terminal(self) -> bool {
        self == RunnerState::Terminal
    }
}
