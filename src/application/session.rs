//! Build session
//!
//! Walks the runner through its lifecycle: one initial pass, then, in watch
//! mode, one pass per change notification. Passes never overlap because the
//! change source is only polled between them.

use crate::domain::{BuildMode, RunnerState, Trigger};
use crate::error::{BuildError, BuildResult};

use super::event::BuildEvent;
use super::ports::{ChangeSource, Compiler};
use super::runner::BuildRunner;

/// Totals across every pass of a session
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SessionSummary {
    pub passes: usize,
    pub compiled: usize,
    pub failed: usize,
}

pub struct BuildSession<'a, C> {
    runner: &'a BuildRunner<C>,
    mode: BuildMode,
}

impl<'a, C: Compiler> BuildSession<'a, C> {
    pub fn new(runner: &'a BuildRunner<C>, mode: BuildMode) -> Self {
        Self { runner, mode }
    }

    /// Run until the lifecycle reaches its terminal state (blocking).
    ///
    /// `open_source` is called once, when the session first starts watching;
    /// one-shot sessions never call it.
    pub fn run<S, O, F>(&self, open_source: O, on_event: F) -> BuildResult<SessionSummary>
    where
        S: ChangeSource,
        O: FnOnce() -> BuildResult<S>,
        F: Fn(BuildEvent),
    {
        let mut summary = SessionSummary::default();
        let mut open_source = Some(open_source);
        let mut source: Option<S> = None;
        let mut state = self.step(RunnerState::Idle, Trigger::Start);

        while !state.is_terminal() {
            state = match state {
                RunnerState::Building => match self.runner.run_pass(&on_event) {
                    Ok(pass) => {
                        summary.passes += 1;
                        summary.compiled += pass.compiled;
                        summary.failed += pass.failed;
                        self.step(state, Trigger::PassComplete)
                    }
                    Err(e @ BuildError::CompileFailure { .. }) => {
                        debug_assert!(self.step(state, Trigger::FailFast).is_terminal());
                        return Err(e);
                    }
                    Err(e) => return Err(e),
                },
                RunnerState::Watching => {
                    if source.is_none() {
                        let open = open_source.take().ok_or_else(|| {
                            BuildError::Io(std::io::Error::other("change source already consumed"))
                        })?;
                        on_event(BuildEvent::WatchStarted {
                            path: self.runner.options().root.display().to_string(),
                        });
                        source = Some(open()?);
                    }
                    let active = source.as_mut().ok_or_else(|| {
                        BuildError::Io(std::io::Error::other("change source unavailable"))
                    })?;
                    match active.next_change()? {
                        Some(change) => {
                            on_event(BuildEvent::ChangeDetected {
                                path: change.path.map(|p| p.display().to_string()),
                            });
                            self.step(state, Trigger::Changed)
                        }
                        None => self.step(state, Trigger::SourceClosed),
                    }
                }
                RunnerState::Idle | RunnerState::Terminal => RunnerState::Terminal,
            };
        }

        Ok(summary)
    }

    fn step(&self, state: RunnerState, trigger: Trigger) -> RunnerState {
        // Every transition requested above is valid for its state.
        state
            .advance(trigger, self.mode)
            .unwrap_or(RunnerState::Terminal)
    }
}
