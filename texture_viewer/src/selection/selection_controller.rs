/// Selection controller - turns a selection change into a new TextureSet
///
/// On every reload the bindings of the current set are retired into the
/// deferred-release queue (never destroyed synchronously, the backend may
/// still be drawing them), then the importer is called and GPU objects are
/// created for each decoded texture.
///
/// Failure handling per decoded texture:
/// - no free descriptor slot: binding kept without GPU objects, cycle continues
/// - texture creation fails: slot released, binding kept without GPU objects
/// - view creation fails: every binding of this cycle is discarded and the
///   set ends empty. Slots go back to the allocator at once; GPU objects go
///   through the release queue since their uploads may be in flight.

use std::path::Path;
use crate::backend::GraphicsBackend;
use crate::binding::{ResourceBinding, TextureSet};
use crate::descriptor::DescriptorSlotAllocator;
use crate::import::{ImportError, TextureImporter};
use crate::release::DeferredReleaseQueue;
use crate::{viewer_debug, viewer_error, viewer_info, viewer_warn};

const SOURCE: &str = "texview::SelectionController";

/// Reload state machine
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControllerState {
    /// Nothing loaded yet
    Idle,
    /// Selection changed; reload runs on the next frame update
    PendingReload,
    /// Importer call in progress
    Importing,
    /// Import succeeded (the set may still be empty after a backend failure)
    Bound,
    /// Import failed; the error is kept until the next selection change
    ImportFailed,
}

/// Owns the current TextureSet and the last import error
pub struct SelectionController {
    state: ControllerState,
    textures: TextureSet,
    import_error: Option<ImportError>,
}

impl SelectionController {
    pub fn new() -> Self {
        Self {
            state: ControllerState::Idle,
            textures: TextureSet::new(),
            import_error: None,
        }
    }

    pub fn state(&self) -> ControllerState {
        self.state
    }

    pub fn textures(&self) -> &TextureSet {
        &self.textures
    }

    /// Error of the last import, if it failed
    pub fn import_error(&self) -> Option<&ImportError> {
        self.import_error.as_ref()
    }

    /// Record an externally observed selection change
    pub fn mark_changed(&mut self) {
        self.state = ControllerState::PendingReload;
    }

    /// Refresh the last-used frame of every current binding
    pub fn touch(&mut self, frame: u64) {
        for binding in self.textures.iter_mut() {
            binding.touch(frame);
        }
    }

    /// Retire the current set and load `path` in its place
    pub fn reload(
        &mut self,
        path: &Path,
        frame: u64,
        importer: &dyn TextureImporter,
        backend: &mut dyn GraphicsBackend,
        slots: &mut DescriptorSlotAllocator,
        queue: &mut DeferredReleaseQueue,
    ) -> ControllerState {
        self.retire_current(frame, queue);

        self.state = ControllerState::Importing;
        viewer_debug!(SOURCE, "Frame {}: importing {}", frame, path.display());

        let descriptions = match importer.import(path) {
            Ok(descriptions) => descriptions,
            Err(error) => return self.fail_import(error),
        };

        for description in descriptions {
            let mut binding = ResourceBinding::new(description);

            let slot = match slots.allocate() {
                Ok(slot) => slot,
                Err(_) => {
                    viewer_warn!(SOURCE, "No free descriptor slot for texture {} of {}, skipping",
                        self.textures.len(), path.display());
                    self.textures.push(binding);
                    continue;
                }
            };

            let upload = match backend.create_texture_and_upload(binding.description()) {
                Ok(upload) => upload,
                Err(e) => {
                    viewer_warn!(SOURCE, "Texture {} of {} not created: {}", self.textures.len(), path.display(), e);
                    slots.release(slot);
                    self.textures.push(binding);
                    continue;
                }
            };

            let view = backend.create_view(upload.texture.as_ref(), slot);
            binding.attach(upload, slot);
            self.textures.push(binding);

            if let Err(e) = view {
                viewer_error!(SOURCE, "View creation failed for {} at slot {}: {}", path.display(), slot, e);
                self.discard_cycle(frame, slots, queue);
                break;
            }
        }

        self.state = ControllerState::Bound;
        viewer_info!(SOURCE, "Loaded {} ({} texture(s))", path.display(), self.textures.len());
        self.state
    }

    /// Retire the current set and record an import failure that happened
    /// before the importer could be called
    pub fn reload_failed(&mut self, error: ImportError, frame: u64, queue: &mut DeferredReleaseQueue) -> ControllerState {
        self.retire_current(frame, queue);
        self.fail_import(error)
    }

    fn retire_current(&mut self, frame: u64, queue: &mut DeferredReleaseQueue) {
        self.import_error = None;
        for binding in self.textures.drain() {
            queue.retire(binding, frame);
        }
    }

    fn fail_import(&mut self, error: ImportError) -> ControllerState {
        viewer_warn!(SOURCE, "Import failed: {}", error);
        self.import_error = Some(error);
        self.state = ControllerState::ImportFailed;
        self.state
    }

    fn discard_cycle(&mut self, frame: u64, slots: &mut DescriptorSlotAllocator, queue: &mut DeferredReleaseQueue) {
        for mut binding in self.textures.drain() {
            if let Some(slot) = binding.take_slot() {
                slots.release(slot);
            }
            if binding.has_gpu_texture() {
                queue.retire(binding, frame);
            }
        }
    }

    // ===== TEXTURE / SUBRESOURCE SELECTION =====

    pub fn select_texture(&mut self, value: i64) -> usize {
        self.textures.select(value)
    }

    pub fn set_array_slice(&mut self, value: i64) -> u32 {
        self.textures.selected_mut().map_or(0, |b| b.set_array_slice(value))
    }

    pub fn set_face(&mut self, value: i64) -> u32 {
        self.textures.selected_mut().map_or(0, |b| b.set_face(value))
    }

    pub fn set_mip(&mut self, value: i64) -> u32 {
        self.textures.selected_mut().map_or(0, |b| b.set_mip(value))
    }

    pub fn set_volume_slice(&mut self, value: i64) -> u32 {
        self.textures.selected_mut().map_or(0, |b| b.set_volume_slice(value))
    }
}

impl Default for SelectionController {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
#[path = "selection_controller_tests.rs"]
mod tests;
