/// Mock texture importer for unit tests (no decoding)
///
/// Results are registered per file name; unknown files fail with `FileNotFound`.

#[cfg(test)]
use std::cell::RefCell;
#[cfg(test)]
use std::path::{Path, PathBuf};
#[cfg(test)]
use rustc_hash::FxHashMap;
#[cfg(test)]
use crate::import::{ImportError, ImportErrorKind, TextureDescription, TextureImporter};

#[cfg(test)]
pub struct MockImporter {
    results: FxHashMap<String, std::result::Result<Vec<TextureDescription>, ImportError>>,
    /// Paths passed to `import`, in call order
    pub imported: RefCell<Vec<PathBuf>>,
}

#[cfg(test)]
impl MockImporter {
    pub fn new() -> Self {
        Self {
            results: FxHashMap::default(),
            imported: RefCell::new(Vec::new()),
        }
    }

    /// Register a successful import for `file`
    pub fn with_textures(mut self, file: &str, textures: Vec<TextureDescription>) -> Self {
        self.results.insert(file.to_string(), Ok(textures));
        self
    }

    /// Register a failing import for `file`
    pub fn with_error(mut self, file: &str, kind: ImportErrorKind, message: &str) -> Self {
        self.results.insert(file.to_string(), Err(ImportError::new(kind, message)));
        self
    }

    pub fn import_count(&self) -> usize {
        self.imported.borrow().len()
    }
}

#[cfg(test)]
impl TextureImporter for MockImporter {
    fn import(&self, path: &Path) -> std::result::Result<Vec<TextureDescription>, ImportError> {
        self.imported.borrow_mut().push(path.to_path_buf());
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        self.results
            .get(&name)
            .cloned()
            .unwrap_or_else(|| Err(ImportError::new(ImportErrorKind::FileNotFound, format!("{} not found", path.display()))))
    }
}
