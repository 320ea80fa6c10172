/// Test files available per file-format category

use std::path::{Path, PathBuf};
use rustc_hash::FxHashMap;
use crate::import::{FileFormat, ImportError, ImportErrorKind};

/// Ordered list of file names per `FileFormat`
///
/// File names are relative to the viewer's base directory.
#[derive(Debug, Clone, Default)]
pub struct TestFileCatalog {
    files: FxHashMap<FileFormat, Vec<String>>,
}

impl TestFileCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder: replace the file list of `format`
    pub fn with_files<I, S>(mut self, format: FileFormat, files: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.set_files(format, files);
        self
    }

    pub fn set_files<I, S>(&mut self, format: FileFormat, files: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.files.insert(format, files.into_iter().map(Into::into).collect());
    }

    /// Files of `format`, empty if none were registered
    pub fn files(&self, format: FileFormat) -> &[String] {
        self.files.get(&format).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn file(&self, format: FileFormat, index: usize) -> Option<&str> {
        self.files(format).get(index).map(String::as_str)
    }

    pub fn count(&self, format: FileFormat) -> usize {
        self.files(format).len()
    }

    /// Full path of the selected file under `base_directory`
    ///
    /// A selection with no backing file resolves to a `FileNotFound` import
    /// error so it surfaces like any other failed import.
    pub fn resolve(&self, base_directory: &Path, format: FileFormat, index: usize)
        -> std::result::Result<PathBuf, ImportError>
    {
        self.file(format, index)
            .map(|name| base_directory.join(name))
            .ok_or_else(|| ImportError::new(
                ImportErrorKind::FileNotFound,
                format!("No {} test file at index {}", format.as_str(), index),
            ))
    }
}
