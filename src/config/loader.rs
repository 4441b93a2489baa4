//! Configuration loading

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{BuildError, BuildResult};

use super::types::{ColorMode, Config, OutputFormat, Verbosity};

/// File name of the project config, looked up in the build root
pub const PROJECT_CONFIG_FILE: &str = "jwatch.toml";

/// Non-fatal configuration warning surfaced to CLI users.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigWarning {
    pub key: String,
    pub file: PathBuf,
    pub line: Option<usize>,
    pub suggestion: Option<String>,
}

/// Load configuration and collect non-fatal warnings (e.g. unknown keys).
pub fn load_with_warnings(path: &Path) -> BuildResult<(Config, Vec<ConfigWarning>)> {
    let content = fs::read_to_string(path)?;

    let mut unknown_paths: Vec<String> = Vec::new();
    let deserializer = toml::de::Deserializer::new(&content);

    let config: Config = serde_ignored::deserialize(deserializer, |p| {
        unknown_paths.push(p.to_string());
    })
    .map_err(|e| BuildError::InvalidConfig {
        file: path.to_path_buf(),
        message: e.to_string(),
    })?;

    let warnings = unknown_paths
        .into_iter()
        .map(|path_str| {
            let key = path_str
                .split('.')
                .next_back()
                .unwrap_or(path_str.as_str())
                .to_string();
            ConfigWarning {
                key: key.clone(),
                file: path.to_path_buf(),
                line: find_line_number(&content, &key),
                suggestion: suggest_key(&key),
            }
        })
        .collect();

    Ok((config, warnings))
}

/// Resolve the effective configuration.
///
/// The project config wins over the user config; the first one that exists
/// is used whole (files are not merged). Environment overrides are applied
/// last, through `get_env` so callers and tests control the environment.
pub fn resolve(
    project_root: &Path,
    user_config: Option<&Path>,
    get_env: impl Fn(&str) -> Option<String>,
) -> BuildResult<(Config, Vec<ConfigWarning>)> {
    let project_config = project_root.join(PROJECT_CONFIG_FILE);
    let candidates = std::iter::once(project_config.as_path()).chain(user_config);

    let mut loaded = None;
    for candidate in candidates {
        if candidate.is_file() {
            let (config, warnings) = load_with_warnings(candidate)?;
            config.validate(candidate)?;
            loaded = Some((config, warnings));
            break;
        }
    }

    let (config, warnings) = loaded.unwrap_or_default();
    let config = with_env_overrides(config, get_env);
    config.validate(Path::new("environment"))?;
    Ok((config, warnings))
}

/// User-level config file (`<config dir>/jwatch/config.toml`)
pub fn user_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("jwatch").join("config.toml"))
}

/// Apply environment variable overrides (JWATCH_* prefix)
///
/// Unrecognised values for enumerated settings fall back to the default.
pub fn with_env_overrides(mut config: Config, get_env: impl Fn(&str) -> Option<String>) -> Config {
    // JWATCH_COMPILER
    if let Some(compiler) = get_env("JWATCH_COMPILER") {
        config.build.compiler = compiler;
    }

    // JWATCH_EXTENSION
    if let Some(extension) = get_env("JWATCH_EXTENSION") {
        config.build.extension = extension;
    }

    // JWATCH_FORMAT
    if let Some(format) = get_env("JWATCH_FORMAT") {
        config.output.format = match format.to_lowercase().as_str() {
            "json" | "ndjson" => OutputFormat::Json,
            _ => OutputFormat::Text,
        };
    }

    // JWATCH_COLOR
    if let Some(color) = get_env("JWATCH_COLOR") {
        config.output.color = match color.to_lowercase().as_str() {
            "always" => ColorMode::Always,
            "never" => ColorMode::Never,
            _ => ColorMode::Auto,
        };
    }

    // JWATCH_VERBOSITY
    if let Some(verbosity) = get_env("JWATCH_VERBOSITY") {
        config.output.verbosity = match verbosity.to_lowercase().as_str() {
            "quiet" => Verbosity::Quiet,
            "verbose" => Verbosity::Verbose,
            _ => Verbosity::Normal,
        };
    }

    config
}

fn find_line_number(content: &str, needle: &str) -> Option<usize> {
    for (i, line) in content.lines().enumerate() {
        if line.contains(needle) {
            return Some(i + 1);
        }
    }
    None
}

fn suggest_key(unknown: &str) -> Option<String> {
    const CANDIDATES: &[&str] = &[
        "build",
        "compiler",
        "extension",
        "watch",
        "recursive",
        "output",
        "format",
        "color",
        "verbosity",
    ];

    let mut best: Option<(&str, usize)> = None;
    for candidate in CANDIDATES {
        let dist = levenshtein(unknown, candidate);
        best = match best {
            None => Some((candidate, dist)),
            Some((_, best_dist)) if dist < best_dist => Some((candidate, dist)),
            Some(current) => Some(current),
        };
    }

    match best {
        Some((candidate, dist)) if dist <= 2 => Some(candidate.to_string()),
        _ => None,
    }
}

fn levenshtein(a: &str, b: &str) -> usize {
    if a == b {
        return 0;
    }

    let a_bytes = a.as_bytes();
    let b_bytes = b.as_bytes();

    let mut prev: Vec<usize> = (0..=b_bytes.len()).collect();
    let mut curr = vec![0usize; b_bytes.len() + 1];

    for (i, &ac) in a_bytes.iter().enumerate() {
        curr[0] = i + 1;
        for (j, &bc) in b_bytes.iter().enumerate() {
            let cost = if ac == bc { 0 } else { 1 };
            curr[j + 1] =
                std::cmp::min(std::cmp::min(prev[j + 1] + 1, curr[j] + 1), prev[j] + cost);
        }
        prev.clone_from_slice(&curr);
    }

    prev[b_bytes.len()]
}
