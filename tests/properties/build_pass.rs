//! Property tests for build passes.

use std::cell::RefCell;
use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

use proptest::prelude::*;
use tempfile::TempDir;

use jwatch::{BuildResult, BuildRunner, CompileStatus, Compiler, RunnerOptions};

#[derive(Default)]
struct Recorder {
    calls: RefCell<Vec<PathBuf>>,
    fail_every: Option<usize>,
}

impl Compiler for Recorder {
    fn program(&self) -> &str {
        "javac"
    }

    fn compile(&self, file: &Path) -> BuildResult<CompileStatus> {
        let mut calls = self.calls.borrow_mut();
        calls.push(file.to_path_buf());
        Ok(match self.fail_every {
            Some(n) if calls.len() % n == 0 => CompileStatus::Failed { code: 1 },
            _ => CompileStatus::Success,
        })
    }
}

fn file_names() -> impl Strategy<Value = BTreeSet<String>> {
    let stem = proptest::string::string_regex("[A-Z][a-z0-9_]{0,11}").unwrap();
    let ext = prop_oneof![Just("java"), Just("txt"), Just("class"), Just("jav")];
    proptest::collection::btree_set(
        (stem, ext).prop_map(|(stem, ext)| format!("{stem}.{ext}")),
        0..=12,
    )
}

fn populate(names: &BTreeSet<String>) -> TempDir {
    let dir = TempDir::new().unwrap();
    for name in names {
        std::fs::write(dir.path().join(name), "class X {}\n").unwrap();
    }
    dir
}

fn expected_order(names: &BTreeSet<String>) -> Vec<PathBuf> {
    // BTreeSet<String> iterates in byte order, the same order a glob uses.
    names
        .iter()
        .filter(|n| n.ends_with(".java"))
        .map(PathBuf::from)
        .collect()
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 48,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: a pass invokes the compiler exactly once per matching file,
    /// in listing order.
    #[test]
    fn property_one_invocation_per_source_in_order(names in file_names()) {
        let dir = populate(&names);
        let recorder = Recorder::default();
        let runner = BuildRunner::new(&recorder, RunnerOptions::new(dir.path()));

        let summary = runner.run_pass(&|_| {}).unwrap();

        let expected = expected_order(&names);
        prop_assert_eq!(summary.compiled, expected.len());
        prop_assert_eq!(recorder.calls.borrow().clone(), expected);
    }

    /// PROPERTY: two passes with no change in between issue the same
    /// invocations.
    #[test]
    fn property_passes_are_not_cached(names in file_names()) {
        let dir = populate(&names);
        let recorder = Recorder::default();
        let runner = BuildRunner::new(&recorder, RunnerOptions::new(dir.path()));

        runner.run_pass(&|_| {}).unwrap();
        let first = recorder.calls.borrow().clone();
        runner.run_pass(&|_| {}).unwrap();
        let all = recorder.calls.borrow().clone();

        prop_assert_eq!(all.len(), first.len() * 2);
        prop_assert_eq!(&all[first.len()..], &first[..]);
    }

    /// PROPERTY: lenient passes attempt every file however many fail; strict
    /// passes stop at the first failure.
    #[test]
    fn property_strictness_decides_how_far_a_pass_goes(
        names in file_names(),
        fail_every in 1usize..4,
    ) {
        let dir = populate(&names);
        let total = expected_order(&names).len();

        let lenient = Recorder { fail_every: Some(fail_every), ..Recorder::default() };
        let runner = BuildRunner::new(&lenient, RunnerOptions::new(dir.path()));
        let summary = runner.run_pass(&|_| {}).unwrap();
        prop_assert_eq!(lenient.calls.borrow().len(), total);
        prop_assert_eq!(summary.failed, total / fail_every);

        let strict = Recorder { fail_every: Some(fail_every), ..Recorder::default() };
        let runner = BuildRunner::new(&strict, RunnerOptions::new(dir.path()).with_strict(true));
        let result = runner.run_pass(&|_| {});
        if total >= fail_every {
            prop_assert!(result.is_err());
            prop_assert_eq!(strict.calls.borrow().len(), fail_every);
        } else {
            prop_assert!(result.is_ok());
            prop_assert_eq!(strict.calls.borrow().len(), total);
        }
    }
}
