use std::path::Path;

use anyhow::{Context, Result};

use jwatch::config::{self, Config, Verbosity};
use jwatch::{
    BuildRunner, BuildSession, DirectoryWatcher, Invocation, ProcessCompiler, RunnerOptions,
    SessionSummary,
};

use crate::ui::context::UiContext;
use crate::ui::views::build::render_config_warning;

/// Build the sources in the working directory, then keep rebuilding if the
/// invocation asked for watch mode. Only returns in watch mode on error.
pub fn cmd_build(invocation: Invocation) -> Result<SessionSummary> {
    let root = std::env::current_dir().context("cannot determine the working directory")?;
    let user_config = config::user_config_path();

    let (config, warnings) = config::resolve(&root, user_config.as_deref(), |key| {
        std::env::var(key).ok()
    })?;
    let ui = UiContext::new(&config, invocation.mode);

    if !ui.json {
        for warning in &warnings {
            eprint!("{}", render_config_warning(warning, ui.color, ui.unicode));
        }
    }

    let runner = BuildRunner::new(
        ProcessCompiler::new(config.build.compiler.clone(), &root),
        runner_options(&root, &config, invocation),
    );

    let summary = BuildSession::new(&runner, invocation.mode).run(
        || {
            Ok(DirectoryWatcher::new(&root).with_recursive(config.watch.recursive))
        },
        |event| crate::ui::emit(&ui, &event),
    )?;

    Ok(summary)
}

fn runner_options(root: &Path, config: &Config, invocation: Invocation) -> RunnerOptions {
    RunnerOptions::new(root)
        .with_extension(config.extension())
        .with_trace(config.output.verbosity == Verbosity::Verbose)
        .with_strict(invocation.strict)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strict_invocation_traces_regardless_of_verbosity() {
        let inv = Invocation::from_args(Vec::<&str>::new());
        let options = runner_options(Path::new("."), &Config::default(), inv);
        assert!(options.strict);
        assert!(options.trace);
    }

    #[test]
    fn lenient_invocation_traces_only_when_verbose() {
        let inv = Invocation::from_args(["build"]);
        let mut config = Config::default();

        let options = runner_options(Path::new("."), &config, inv);
        assert!(!options.strict);
        assert!(!options.trace);

        config.output.verbosity = Verbosity::Verbose;
        let options = runner_options(Path::new("."), &config, inv);
        assert!(options.trace);
    }

    #[test]
    fn configured_extension_drops_leading_dot() {
        let mut config = Config::default();
        config.build.extension = ".src".to_string();
        let options = runner_options(Path::new("."), &config, Invocation::from_args(["x"]));
        assert_eq!(options.extension, "src");
    }
}
