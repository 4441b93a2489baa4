//! Build event types for terminal and NDJSON output

use serde::Serialize;

/// Events emitted by the runner and the session
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum BuildEvent {
    /// A pass is about to compile `files` sources
    PassStarted { files: usize },
    /// Progress line, emitted before each compiler invocation
    Compiling { file: String },
    /// Command about to be executed (strict or verbose runs only)
    CommandTrace { command: String },
    /// The compiler exited non-zero
    CompileFailed { file: String, code: i32 },
    /// A pass finished without aborting
    PassComplete { compiled: usize, failed: usize },
    /// The session is now waiting for changes under `path`
    WatchStarted { path: String },
    /// A change notification woke the session up
    ChangeDetected { path: Option<String> },
}

impl BuildEvent {
    /// Convert to a JSON line with a `command` field naming the run kind
    pub fn to_json(&self, command: &str) -> String {
        let mut value =
            serde_json::to_value(self).unwrap_or_else(|_| serde_json::json!({"event": "error"}));
        if let Some(obj) = value.as_object_mut() {
            obj.insert("command".to_string(), serde_json::json!(command));
        }
        serde_json::to_string(&value).unwrap_or_else(|_| "{}".to_string())
    }
}
