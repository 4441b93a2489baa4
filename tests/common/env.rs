//! Test environment builder for isolated jwatch testing.
//!
//! Provides `TestEnv` - an isolated project directory with a fake compiler,
//! plus helpers to run the jwatch binary against it.

use std::fs;
use std::os::unix::fs::PermissionsExt;
use std::path::PathBuf;
use std::process::{Child, Command, Output, Stdio};
use std::time::{Duration, Instant};
use tempfile::TempDir;

use super::fixtures::FAKE_COMPILER;

/// Result of running the jwatch CLI
#[derive(Debug)]
pub struct TestResult {
    pub success: bool,
    pub exit_code: i32,
    pub stdout: String,
    pub stderr: String,
}

/// Isolated test environment with temp directories.
///
/// Provides:
/// - Isolated project directory (the working directory of every run)
/// - Isolated home/config directory, so no user config leaks in
/// - A fake compiler whose invocation log lives outside the project
pub struct TestEnv {
    pub project_root: TempDir,
    pub home_dir: TempDir,
    _tools_dir: TempDir,
    compiler: PathBuf,
    log: PathBuf,
}

impl TestEnv {
    pub fn new() -> Self {
        let tools_dir = TempDir::new().unwrap();
        let compiler = tools_dir.path().join("fake-javac");
        fs::write(&compiler, FAKE_COMPILER).unwrap();
        fs::set_permissions(&compiler, fs::Permissions::from_mode(0o755)).unwrap();
        let log = tools_dir.path().join("invocations.log");

        Self {
            project_root: TempDir::new().unwrap(),
            home_dir: TempDir::new().unwrap(),
            _tools_dir: tools_dir,
            compiler,
            log,
        }
    }

    /// Create project files with the given names
    pub fn with_files(self, names: &[&str]) -> Self {
        for name in names {
            self.write_file(name, super::fixtures::HELLO_JAVA);
        }
        self
    }

    pub fn write_file(&self, name: &str, content: &str) {
        fs::write(self.project_path(name), content).unwrap();
    }

    pub fn project_path(&self, relative: &str) -> PathBuf {
        self.project_root.path().join(relative)
    }

    /// Files the fake compiler was invoked with, in order
    pub fn invocations(&self) -> Vec<String> {
        fs::read_to_string(&self.log)
            .unwrap_or_default()
            .lines()
            .map(str::to_string)
            .collect()
    }

    /// Poll until at least `count` invocations were logged
    pub fn wait_for_invocations(&self, count: usize, timeout: Duration) -> Vec<String> {
        let deadline = Instant::now() + timeout;
        loop {
            let seen = self.invocations();
            if seen.len() >= count || Instant::now() >= deadline {
                return seen;
            }
            std::thread::sleep(Duration::from_millis(50));
        }
    }

    /// Run jwatch from the project root and wait for it to exit
    pub fn run(&self, args: &[&str]) -> TestResult {
        self.run_with_env(args, &[])
    }

    pub fn run_with_env(&self, args: &[&str], env_vars: &[(&str, &str)]) -> TestResult {
        let output = self
            .command(args, env_vars)
            .output()
            .expect("Failed to execute jwatch");
        output_to_result(output)
    }

    /// Start jwatch without waiting for it, with piped output
    pub fn spawn(&self, args: &[&str]) -> Child {
        self.command(args, &[])
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
            .expect("Failed to start jwatch")
    }

    fn command(&self, args: &[&str], env_vars: &[(&str, &str)]) -> Command {
        let mut cmd = Command::new(env!("CARGO_BIN_EXE_jwatch"));
        cmd.current_dir(self.project_root.path())
            .args(args)
            .env("HOME", self.home_dir.path())
            .env("XDG_CONFIG_HOME", self.home_dir.path())
            .env("NO_COLOR", "1")
            .env("JWATCH_COMPILER", &self.compiler)
            .env("JWATCH_TEST_LOG", &self.log)
            .env_remove("JWATCH_EXTENSION")
            .env_remove("JWATCH_FORMAT")
            .env_remove("JWATCH_VERBOSITY");

        for (key, value) in env_vars {
            cmd.env(key, value);
        }
        cmd
    }
}

fn output_to_result(output: Output) -> TestResult {
    TestResult {
        success: output.status.success(),
        exit_code: output.status.code().unwrap_or(-1),
        stdout: String::from_utf8_lossy(&output.stdout).to_string(),
        stderr: String::from_utf8_lossy(&output.stderr).to_string(),
    }
}
