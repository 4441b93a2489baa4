//! Configuration module for jwatch
//!
//! Configuration hierarchy:
//! 1. Environment variables (JWATCH_*) (highest priority)
//! 2. Project config (./jwatch.toml)
//! 3. User config (~/.config/jwatch/config.toml)
//! 4. Built-in defaults (lowest priority)
//!
//! The defaults compile `*.java` with `javac`, which is all a plain run needs.
//! Command-line arguments never reach the config: only the first one is
//! inspected, and only to pick the build mode.

mod loader;
mod types;

pub use loader::{resolve, user_config_path, with_env_overrides, ConfigWarning, PROJECT_CONFIG_FILE};
pub use types::{BuildConfig, ColorMode, Config, OutputConfig, OutputFormat, Verbosity, WatchConfig};
