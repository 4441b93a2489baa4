//! Terminal and NDJSON rendering for the CLI

pub mod context;
pub mod primitives;
pub mod terminal;
pub mod theme;
pub mod views;

use std::io::Write;

use jwatch::BuildEvent;

use context::UiContext;
use views::build::{render_build_event, Stream};

/// Print one event according to the UI context.
///
/// Write errors (e.g. a closed pipe) are ignored; they must not stop a build.
pub fn emit(ui: &UiContext, event: &BuildEvent) {
    if ui.json {
        let mut out = std::io::stdout().lock();
        let _ = writeln!(out, "{}", event.to_json(ui.command));
        let _ = out.flush();
        return;
    }

    let timestamp = ui
        .timestamps
        .then(|| chrono::Local::now().format("%H:%M:%S").to_string());
    let Some((stream, line)) =
        render_build_event(timestamp.as_deref(), event, ui.verbosity, ui.color, ui.unicode)
    else {
        return;
    };

    match stream {
        Stream::Stdout => {
            let mut out = std::io::stdout().lock();
            let _ = out.write_all(line.as_bytes());
            let _ = out.flush();
        }
        Stream::Stderr => {
            let _ = std::io::stderr().write_all(line.as_bytes());
        }
    }
}
