use jwatch::config::{ColorMode, Config, OutputFormat, Verbosity};
use jwatch::BuildMode;

use crate::ui::terminal::{detect_capabilities, TerminalCapabilities};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UiContext {
    pub json: bool,
    pub verbosity: Verbosity,
    pub color: bool,
    pub unicode: bool,
    /// Prefix lines with the wall-clock time (watch runs)
    pub timestamps: bool,
    /// Value of the `command` field on NDJSON lines
    pub command: &'static str,
}

impl UiContext {
    pub fn new(config: &Config, mode: BuildMode) -> Self {
        Self::from_caps(config, mode, detect_capabilities())
    }

    pub(crate) fn from_caps(config: &Config, mode: BuildMode, caps: TerminalCapabilities) -> Self {
        let color = match config.output.color {
            ColorMode::Never => false,
            ColorMode::Always => true,
            ColorMode::Auto => caps.supports_color && !caps.is_ci,
        };
        let watch = mode == BuildMode::Watch;

        Self {
            json: config.output.format == OutputFormat::Json,
            verbosity: config.output.verbosity,
            color,
            unicode: caps.supports_unicode,
            timestamps: watch,
            command: if watch { "watch" } else { "build" },
        }
    }
}
