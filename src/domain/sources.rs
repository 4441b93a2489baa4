//! Source file set

use std::path::{Path, PathBuf};

/// Files a build pass compiles, in the order they are compiled.
///
/// Entries are paths relative to the build root. The set is recomputed for
/// every pass and never cached.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SourceFileSet {
    files: Vec<PathBuf>,
}

impl SourceFileSet {
    /// Build a set from directory entry names, keeping the ones that match
    /// `extension` and ordering them the way a shell glob would: byte-wise by
    /// name, dot-files excluded.
    pub fn from_names<I>(names: I, extension: &str) -> Self
    where
        I: IntoIterator<Item = PathBuf>,
    {
        let mut files: Vec<PathBuf> = names
            .into_iter()
            .filter(|name| matches_extension(name, extension) && !is_hidden(name))
            .collect();
        files.sort_by(|a, b| a.as_os_str().as_encoded_bytes().cmp(b.as_os_str().as_encoded_bytes()));
        Self { files }
    }

    pub fn iter(&self) -> std::slice::Iter<'_, PathBuf> {
        self.files.iter()
    }

    pub fn len(&self) -> usize {
        self.files.len()
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }
}

impl<'a> IntoIterator for &'a SourceFileSet {
    type Item = &'a PathBuf;
    type IntoIter = std::slice::Iter<'a, PathBuf>;

    fn into_iter(self) -> Self::IntoIter {
        self.files.iter()
    }
}

fn matches_extension(name: &Path, extension: &str) -> bool {
    name.extension().map(|e| e == extension).unwrap_or(false)
}

fn is_hidden(name: &Path) -> bool {
    name.file_name()
        .map(|n| n.as_encoded_bytes().starts_with(b"."))
        .unwrap_or(false)
}
