/// Texture viewer - per-frame orchestration of the resource lifecycle
///
/// The viewer owns the descriptor slot allocator, the deferred-release queue
/// and the selection controller, and ties them to the frame loop:
///
/// - `render_update` advances the frame counter, performs one-time setup on
///   the first call, sweeps the release queue and reloads the selection when
///   it changed.
/// - `render_pass` is read-only and draws the selected texture, or nothing.
///
/// The graphics backend is borrowed per call and never retained.

use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::{Duration, Instant};
use glam::Vec2;
use crate::backend::{
    Buffer, BufferDesc, BufferUsage, CommandList, GraphicsBackend, IndexType, Pipeline,
    PipelineDesc, Rect2D, ShaderConstants, ShaderVariation, Viewport,
};
use crate::binding::ResourceBinding;
use crate::config::ViewerConfig;
use crate::descriptor::DescriptorSlotAllocator;
use crate::error::{Error, Result};
use crate::import::{FileFormat, ImportErrorKind, TextureImporter};
use crate::release::DeferredReleaseQueue;
use crate::selection::{AutoAdvance, ControllerState, SelectionController, SelectionState, TestFileCatalog};
use crate::{viewer_debug, viewer_info};

const SOURCE: &str = "texview::Viewer";

/// Full-screen quad, two triangles
pub const QUAD_INDICES: [u16; 6] = [0, 3, 1, 1, 3, 2];

// ===== STATUS =====

/// One line of the texture list shown by the UI
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextureSummary {
    /// Pixel format name
    pub format: &'static str,
    /// "W x H" or "W x H x D"
    pub extent: String,
    /// Whether GPU objects exist for this texture
    pub bound: bool,
}

/// What the UI should show in place of (or next to) the rendered texture
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewerStatus {
    /// Nothing loaded yet
    Empty,
    /// The last import failed
    ImportFailed {
        kind: ImportErrorKind,
        message: String,
    },
    /// The last import succeeded; empty after a backend failure
    Loaded {
        textures: Vec<TextureSummary>,
    },
}

// ===== VIEWER =====

/// Objects created once on the first frame
struct FixedObjects {
    /// Indexed by `ShaderVariation::index`
    pipelines: Vec<Arc<dyn Pipeline>>,
    index_buffer: Arc<dyn Buffer>,
}

/// Frame orchestrator
pub struct Viewer {
    frame: u64,
    fixed: Option<FixedObjects>,
    descriptor_end: u64,
    slots: DescriptorSlotAllocator,
    release_queue: DeferredReleaseQueue,
    controller: SelectionController,
    selection: SelectionState,
    auto_advance: AutoAdvance,
    base_directory: PathBuf,
    catalog: TestFileCatalog,
    importer: Box<dyn TextureImporter>,
}

impl Viewer {
    /// Create a viewer; nothing touches the backend until the first `render_update`
    pub fn new(config: ViewerConfig, importer: Box<dyn TextureImporter>) -> Self {
        let descriptor_end = config.descriptor_slot_end();
        Self {
            frame: 0,
            fixed: None,
            descriptor_end,
            slots: DescriptorSlotAllocator::new(config.descriptor_slot_start, config.descriptor_slot_count),
            release_queue: DeferredReleaseQueue::new(config.frame_latency),
            controller: SelectionController::new(),
            selection: SelectionState::new(config.initial_format),
            auto_advance: AutoAdvance::new(config.auto_pause),
            base_directory: config.base_directory,
            catalog: config.catalog,
            importer,
        }
    }

    // ===== FRAME LOOP =====

    /// Per-frame update
    ///
    /// # Errors
    ///
    /// Only one-time setup can fail: `InitializationFailed` when the managed
    /// descriptor range does not fit the backend's table, or the backend's
    /// error when a pipeline or the index buffer cannot be created. Setup is
    /// retried on the next call. Import and backend failures during a reload
    /// are handled locally and reported through `status`.
    pub fn render_update(&mut self, backend: &mut dyn GraphicsBackend) -> Result<()> {
        self.frame += 1;

        if self.fixed.is_none() {
            self.fixed = Some(self.setup(backend)?);
        }

        self.controller.touch(self.frame);
        self.release_queue.sweep(self.frame, &mut self.slots);

        if self.selection.take_dirty() {
            self.reload(backend);
        }

        Ok(())
    }

    /// Record the draw of the selected texture into `cmd`
    ///
    /// Returns `Ok(false)` without recording anything when setup has not run,
    /// the set is empty, the selected texture has no GPU objects, or the
    /// screen has no area.
    pub fn render_pass(&self, cmd: &mut dyn CommandList, screen_size: Vec2) -> Result<bool> {
        let Some(fixed) = &self.fixed else {
            return Ok(false);
        };
        let Some(binding) = self.controller.textures().selected() else {
            return Ok(false);
        };
        let (Some(_), Some(slot)) = (binding.texture(), binding.slot()) else {
            return Ok(false);
        };
        if screen_size.x <= 0.0 || screen_size.y <= 0.0 {
            return Ok(false);
        }

        let variation = ShaderVariation::from_texture(binding.dimension(), binding.array_count());
        let pipeline = fixed.pipelines.get(variation.index()).ok_or_else(|| {
            Error::InvalidResource(format!("No pipeline for {}", variation.define()))
        })?;

        cmd.bind_pipeline(pipeline)?;
        cmd.set_viewport(Viewport {
            x: 0.0,
            y: 0.0,
            width: screen_size.x,
            height: screen_size.y,
            min_depth: 0.0,
            max_depth: 1.0,
        })?;
        cmd.set_scissor(Rect2D {
            x: 0,
            y: 0,
            width: screen_size.x as u32,
            height: screen_size.y as u32,
        })?;

        let constants = shader_constants(binding, screen_size);
        cmd.push_constants(0, bytemuck::bytes_of(&constants))?;
        cmd.bind_descriptor_table(slot)?;
        cmd.bind_index_buffer(&fixed.index_buffer, 0, IndexType::U16)?;
        cmd.draw_indexed(QUAD_INDICES.len() as u32, 0, 0)?;

        Ok(true)
    }

    fn setup(&mut self, backend: &mut dyn GraphicsBackend) -> Result<FixedObjects> {
        let capacity = backend.descriptor_capacity();
        if self.descriptor_end > capacity as u64 {
            return Err(Error::InitializationFailed(format!(
                "Descriptor range {:?} exceeds backend capacity {}",
                self.slots.range(),
                capacity
            )));
        }

        let pipelines = ShaderVariation::ALL
            .iter()
            .map(|variation| backend.create_pipeline(&PipelineDesc::for_variation(*variation)))
            .collect::<Result<Vec<_>>>()?;

        let index_data: &[u8] = bytemuck::cast_slice(&QUAD_INDICES);
        let index_buffer = backend.create_buffer(BufferDesc {
            size: index_data.len() as u64,
            usage: BufferUsage::Index,
            data: Some(index_data.to_vec()),
        })?;

        viewer_info!(SOURCE, "Setup complete: {} pipelines, descriptor slots {:?}",
            pipelines.len(), self.slots.range());

        Ok(FixedObjects {
            pipelines,
            index_buffer,
        })
    }

    fn reload(&mut self, backend: &mut dyn GraphicsBackend) {
        let format = self.selection.format();
        let index = self.selection.file_index();
        self.controller.mark_changed();

        match self.catalog.resolve(&self.base_directory, format, index) {
            Ok(path) => {
                self.controller.reload(
                    &path,
                    self.frame,
                    self.importer.as_ref(),
                    backend,
                    &mut self.slots,
                    &mut self.release_queue,
                );
            }
            Err(error) => {
                self.controller.reload_failed(error, self.frame, &mut self.release_queue);
            }
        }
    }

    // ===== FILE SELECTION =====

    pub fn prev_file_format(&mut self) {
        self.selection.prev_format();
        self.controller.mark_changed();
    }

    pub fn next_file_format(&mut self) {
        self.selection.next_format();
        self.controller.mark_changed();
    }

    pub fn select_file_format(&mut self, format: FileFormat) {
        self.selection.select_format(format);
        self.controller.mark_changed();
    }

    pub fn prev_test_file(&mut self) {
        self.selection.prev_file(&self.catalog);
        self.controller.mark_changed();
    }

    pub fn next_test_file(&mut self) {
        self.selection.next_file(&self.catalog);
        self.controller.mark_changed();
    }

    pub fn select_test_file(&mut self, index: usize) {
        self.selection.select_file(index, &self.catalog);
        self.controller.mark_changed();
    }

    // ===== AUTO MODE =====

    pub fn set_auto_mode(&mut self, enabled: bool, now: Instant) {
        self.auto_advance.set_enabled(enabled, now);
    }

    pub fn set_auto_pause(&mut self, pause: Duration) {
        self.auto_advance.set_interval(pause);
    }

    pub fn is_auto_mode(&self) -> bool {
        self.auto_advance.is_enabled()
    }

    /// Step auto mode; returns whether the selection moved
    pub fn tick(&mut self, now: Instant) -> bool {
        if !self.auto_advance.tick(now) {
            return false;
        }
        self.selection.advance(&self.catalog);
        self.controller.mark_changed();
        viewer_debug!(SOURCE, "Auto mode: {} file {}",
            self.selection.format().as_str(), self.selection.file_index());
        true
    }

    // ===== TEXTURE / SUBRESOURCE SELECTION =====

    pub fn select_texture(&mut self, value: i64) -> usize {
        self.controller.select_texture(value)
    }

    pub fn set_array_slice(&mut self, value: i64) -> u32 {
        self.controller.set_array_slice(value)
    }

    pub fn set_face(&mut self, value: i64) -> u32 {
        self.controller.set_face(value)
    }

    pub fn set_mip(&mut self, value: i64) -> u32 {
        self.controller.set_mip(value)
    }

    pub fn set_volume_slice(&mut self, value: i64) -> u32 {
        self.controller.set_volume_slice(value)
    }

    // ===== QUERIES =====

    /// Frames updated so far
    pub fn frame(&self) -> u64 {
        self.frame
    }

    pub fn is_setup(&self) -> bool {
        self.fixed.is_some()
    }

    pub fn file_format(&self) -> FileFormat {
        self.selection.format()
    }

    pub fn file_index(&self) -> usize {
        self.selection.file_index()
    }

    /// Catalog name of the selected file
    pub fn current_file(&self) -> Option<&str> {
        self.catalog.file(self.selection.format(), self.selection.file_index())
    }

    pub fn base_directory(&self) -> &Path {
        &self.base_directory
    }

    pub fn catalog(&self) -> &TestFileCatalog {
        &self.catalog
    }

    pub fn controller(&self) -> &SelectionController {
        &self.controller
    }

    pub fn slots(&self) -> &DescriptorSlotAllocator {
        &self.slots
    }

    pub fn release_queue(&self) -> &DeferredReleaseQueue {
        &self.release_queue
    }

    /// Display model of the last reload
    ///
    /// A pending selection change keeps showing the previous result until the
    /// next `render_update` performs the reload.
    pub fn status(&self) -> ViewerStatus {
        if let Some(error) = self.controller.import_error() {
            return ViewerStatus::ImportFailed {
                kind: error.kind,
                message: error.message.clone(),
            };
        }

        let textures = self.controller.textures();
        if textures.is_empty() && self.controller.state() != ControllerState::Bound {
            return ViewerStatus::Empty;
        }

        ViewerStatus::Loaded {
            textures: textures
                .iter()
                .map(|binding| TextureSummary {
                    format: binding.format().as_str(),
                    extent: binding.description().extent_label(),
                    bound: binding.has_gpu_texture(),
                })
                .collect(),
        }
    }
}

/// Constants pushed for the draw of `binding`
fn shader_constants(binding: &ResourceBinding, screen_size: Vec2) -> ShaderConstants {
    let extent = binding.extent();
    let selection = binding.selection();
    ShaderConstants {
        screen_aspect: screen_size.x / screen_size.y,
        texture_aspect: extent.x as f32 / extent.y.max(1) as f32,
        array_slice: selection.array_slice,
        face: selection.face,
        mip: selection.mip,
        volume_w: binding.volume_w(),
        point_sample: 1,
        _pad: 0,
    }
}

#[cfg(test)]
#[path = "viewer_tests.rs"]
mod tests;
