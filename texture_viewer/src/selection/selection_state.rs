/// Externally driven selection coordinates and the "selection changed" flag

use crate::import::FileFormat;
use super::TestFileCatalog;

/// Which test file to import next
///
/// Every coordinate change sets the dirty flag; the frame orchestrator
/// clears it with `take_dirty` when it starts the reload. A new state starts
/// dirty so the first frame loads the initial selection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectionState {
    format: FileFormat,
    file_index: usize,
    dirty: bool,
}

impl SelectionState {
    pub fn new(format: FileFormat) -> Self {
        Self {
            format,
            file_index: 0,
            dirty: true,
        }
    }

    pub fn format(&self) -> FileFormat {
        self.format
    }

    pub fn file_index(&self) -> usize {
        self.file_index
    }

    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Clear the dirty flag, returning whether it was set
    pub fn take_dirty(&mut self) -> bool {
        std::mem::replace(&mut self.dirty, false)
    }

    // ===== FILE FORMAT =====

    pub fn prev_format(&mut self) {
        self.select_format(self.format.prev());
    }

    pub fn next_format(&mut self) {
        self.select_format(self.format.next());
    }

    /// Switch category; the file index restarts at 0
    pub fn select_format(&mut self, format: FileFormat) {
        self.format = format;
        self.file_index = 0;
        self.dirty = true;
    }

    // ===== FILE INDEX =====

    /// Previous file of the category, wrapping to the last one
    pub fn prev_file(&mut self, catalog: &TestFileCatalog) {
        let count = catalog.count(self.format);
        self.file_index = if self.file_index > 0 {
            self.file_index - 1
        } else {
            count.saturating_sub(1)
        };
        self.dirty = true;
    }

    /// Next file of the category, wrapping to the first one
    pub fn next_file(&mut self, catalog: &TestFileCatalog) {
        let count = catalog.count(self.format);
        self.file_index = if count == 0 { 0 } else { (self.file_index + 1) % count };
        self.dirty = true;
    }

    /// Select a file by index, clamped to the category
    pub fn select_file(&mut self, index: usize, catalog: &TestFileCatalog) {
        self.file_index = index.min(catalog.count(self.format).saturating_sub(1));
        self.dirty = true;
    }

    /// Whether the selected file is the last of its category
    ///
    /// An empty category counts as being at its last file.
    pub fn is_last_file(&self, catalog: &TestFileCatalog) -> bool {
        self.file_index + 1 >= catalog.count(self.format)
    }

    /// Step used by auto mode: next file, or first file of the next category
    pub fn advance(&mut self, catalog: &TestFileCatalog) {
        if self.is_last_file(catalog) {
            self.next_format();
        } else {
            self.next_file(catalog);
        }
    }
}

impl Default for SelectionState {
    fn default() -> Self {
        Self::new(FileFormat::Bitmap)
    }
}

#[cfg(test)]
#[path = "selection_state_tests.rs"]
mod tests;
