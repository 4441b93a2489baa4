use jwatch::config::{ConfigWarning, Verbosity};
use jwatch::BuildEvent;

use crate::ui::primitives::icon::Icon;

/// Where a rendered line goes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stream {
    Stdout,
    Stderr,
}

/// Render one event as a terminal line, or `None` if the verbosity hides it.
///
/// The `Compiling` progress line is always shown; it is the only output a
/// plain run is guaranteed to produce besides the compiler's own.
pub fn render_build_event(
    timestamp: Option<&str>,
    event: &BuildEvent,
    verbosity: Verbosity,
    supports_color: bool,
    supports_unicode: bool,
) -> Option<(Stream, String)> {
    let prefix = timestamp.map(|t| format!("[{}] ", t)).unwrap_or_default();
    let quiet = verbosity == Verbosity::Quiet;

    let (stream, body) = match event {
        BuildEvent::PassStarted { files } => {
            if verbosity != Verbosity::Verbose {
                return None;
            }
            (
                Stream::Stdout,
                format!(
                    "{} Building {} source file{}",
                    Icon::Progress.colored(supports_color, supports_unicode),
                    files,
                    if *files == 1 { "" } else { "s" }
                ),
            )
        }
        BuildEvent::Compiling { file } => (Stream::Stdout, format!("Compiling {}", file)),
        BuildEvent::CommandTrace { command } => (Stream::Stderr, format!("+ {}", command)),
        BuildEvent::CompileFailed { file, code } => (
            Stream::Stderr,
            format!(
                "{} {} failed (exit {})",
                Icon::Error.colored(supports_color, supports_unicode),
                file,
                code
            ),
        ),
        BuildEvent::PassComplete { compiled, failed } => {
            if quiet {
                return None;
            }
            let line = if *failed > 0 {
                format!(
                    "{} Build: {} compiled, {} failed",
                    Icon::Warning.colored(supports_color, supports_unicode),
                    compiled,
                    failed
                )
            } else {
                format!(
                    "{} Build: {} compiled",
                    Icon::Success.colored(supports_color, supports_unicode),
                    compiled
                )
            };
            (Stream::Stdout, line)
        }
        BuildEvent::WatchStarted { path } => {
            if quiet {
                return None;
            }
            (
                Stream::Stdout,
                format!(
                    "{} Watching: {}",
                    Icon::Watch.colored(supports_color, supports_unicode),
                    path
                ),
            )
        }
        BuildEvent::ChangeDetected { path } => {
            if quiet {
                return None;
            }
            let arrow = Icon::Arrow.colored(supports_color, supports_unicode);
            let line = match path {
                Some(path) => format!("{} Changed: {}", arrow, path),
                None => format!("{} Change detected", arrow),
            };
            (Stream::Stdout, line)
        }
    };

    Some((stream, format!("{}{}\n", prefix, body)))
}

pub fn render_config_warning(
    warning: &ConfigWarning,
    supports_color: bool,
    supports_unicode: bool,
) -> String {
    let location = match warning.line {
        Some(line) => format!("{}:{}", warning.file.display(), line),
        None => warning.file.display().to_string(),
    };
    let hint = warning
        .suggestion
        .as_ref()
        .map(|s| format!(" (did you mean '{}'?)", s))
        .unwrap_or_default();
    format!(
        "{} Unknown config key '{}' in {}{}\n",
        Icon::Warning.colored(supports_color, supports_unicode),
        warning.key,
        location,
        hint
    )
}
