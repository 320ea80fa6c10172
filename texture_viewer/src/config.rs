/// Viewer configuration

use std::path::PathBuf;
use std::time::Duration;
use crate::import::FileFormat;
use crate::release::DEFAULT_FRAME_LATENCY;
use crate::selection::TestFileCatalog;

/// Viewer configuration
#[derive(Debug, Clone)]
pub struct ViewerConfig {
    /// Directory the catalog's file names are relative to
    pub base_directory: PathBuf,
    /// First descriptor slot managed by the viewer (slot 0 belongs to the UI)
    pub descriptor_slot_start: u32,
    /// Number of descriptor slots managed by the viewer
    pub descriptor_slot_count: u32,
    /// Frames the backend may keep in flight
    pub frame_latency: u64,
    /// Category selected at startup
    pub initial_format: FileFormat,
    /// Pause between auto mode steps
    pub auto_pause: Duration,
    /// Test files per category
    pub catalog: TestFileCatalog,
}

impl ViewerConfig {
    pub fn with_base_directory(mut self, base_directory: impl Into<PathBuf>) -> Self {
        self.base_directory = base_directory.into();
        self
    }

    pub fn with_descriptor_range(mut self, start: u32, count: u32) -> Self {
        self.descriptor_slot_start = start;
        self.descriptor_slot_count = count;
        self
    }

    pub fn with_frame_latency(mut self, frame_latency: u64) -> Self {
        self.frame_latency = frame_latency;
        self
    }

    pub fn with_initial_format(mut self, format: FileFormat) -> Self {
        self.initial_format = format;
        self
    }

    pub fn with_auto_pause(mut self, auto_pause: Duration) -> Self {
        self.auto_pause = auto_pause;
        self
    }

    pub fn with_catalog(mut self, catalog: TestFileCatalog) -> Self {
        self.catalog = catalog;
        self
    }

    /// One past the last managed descriptor slot
    pub fn descriptor_slot_end(&self) -> u64 {
        self.descriptor_slot_start as u64 + self.descriptor_slot_count as u64
    }
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self {
            base_directory: PathBuf::from("."),
            descriptor_slot_start: 1,
            descriptor_slot_count: 1023,
            frame_latency: DEFAULT_FRAME_LATENCY,
            initial_format: FileFormat::Bitmap,
            auto_pause: Duration::ZERO,
            catalog: TestFileCatalog::new(),
        }
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
