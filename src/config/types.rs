//! Configuration type definitions

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{BuildError, BuildResult};

/// Compiler configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BuildConfig {
    /// Compiler program. Arguments are not supported; the source file is
    /// always the only one passed.
    #[serde(default = "default_compiler")]
    pub compiler: String,

    /// Source extension, with or without the leading dot
    #[serde(default = "default_extension")]
    pub extension: String,
}

impl Default for BuildConfig {
    fn default() -> Self {
        Self {
            compiler: default_compiler(),
            extension: default_extension(),
        }
    }
}

fn default_compiler() -> String {
    "javac".to_string()
}

fn default_extension() -> String {
    "java".to_string()
}

/// Watch configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WatchConfig {
    /// Also react to writes in subdirectories
    #[serde(default = "default_true")]
    pub recursive: bool,
}

impl Default for WatchConfig {
    fn default() -> Self {
        Self { recursive: true }
    }
}

fn default_true() -> bool {
    true
}

/// Output configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutputConfig {
    #[serde(default)]
    pub format: OutputFormat,

    #[serde(default)]
    pub color: ColorMode,

    #[serde(default)]
    pub verbosity: Verbosity,
}

/// Output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable lines
    #[default]
    Text,
    /// One JSON object per event (NDJSON)
    Json,
}

/// Color output mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ColorMode {
    #[default]
    Auto,
    Always,
    Never,
}

/// Verbosity level
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Verbosity {
    Quiet,
    #[default]
    Normal,
    Verbose,
}

/// Main configuration structure
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub build: BuildConfig,

    #[serde(default)]
    pub watch: WatchConfig,

    #[serde(default)]
    pub output: OutputConfig,
}

impl Config {
    /// Source extension without the leading dot
    pub fn extension(&self) -> &str {
        self.build.extension.trim_start_matches('.')
    }

    /// Reject values no run could work with. `origin` names the file the
    /// values came from, for the error message.
    pub fn validate(&self, origin: &Path) -> BuildResult<()> {
        if self.build.compiler.trim().is_empty() {
            return Err(BuildError::InvalidConfig {
                file: origin.to_path_buf(),
                message: "build.compiler must not be empty".to_string(),
            });
        }
        if self.extension().is_empty() {
            return Err(BuildError::InvalidConfig {
                file: origin.to_path_buf(),
                message: "build.extension must not be empty".to_string(),
            });
        }
        Ok(())
    }
}
