//! Source discovery

use std::fs;
use std::path::{Path, PathBuf};

use crate::domain::SourceFileSet;
use crate::error::{BuildError, BuildResult};

/// List the sources under `root` (non-recursive) that a pass should compile.
///
/// Only regular files (or symlinks to them) are kept. The returned paths are
/// relative to `root`.
pub fn list_sources(root: &Path, extension: &str) -> BuildResult<SourceFileSet> {
    let read_err = |source| BuildError::ReadDir {
        path: root.to_path_buf(),
        source,
    };

    let mut names = Vec::new();
    for entry in fs::read_dir(root).map_err(read_err)? {
        let entry = entry.map_err(read_err)?;
        if entry.path().is_file() {
            names.push(PathBuf::from(entry.file_name()));
        }
    }

    Ok(SourceFileSet::from_names(names, extension))
}
