/// Per-texture bundle of GPU objects and subresource selection state

use std::sync::Arc;
use glam::UVec3;
use crate::backend::{Buffer, Texture, TextureUpload};
use crate::descriptor::SlotIndex;
use crate::import::{TextureDescription, TextureDimension, TextureFormat};

// ===== SUBRESOURCE ARITHMETIC =====

/// Extent of mip level `mip` of a texture whose base extent is `base`
///
/// Each axis is halved per level with a floor of 1.
pub fn mip_extent(base: UVec3, mip: u32) -> UVec3 {
    let axis = |v: u32| v.checked_shr(mip).unwrap_or(0).max(1);
    UVec3::new(axis(base.x), axis(base.y), axis(base.z))
}

/// Normalized depth coordinate sampling the center of volume slice `slice`
pub fn volume_depth_coordinate(slice: u32, extent: UVec3) -> f32 {
    (slice as f32 + 0.5) / extent.z.max(1) as f32
}

/// Clamp a UI-driven selection into `[0, count - 1]`
///
/// Stepping below zero wraps to the last element; values past the end clamp
/// to it. A zero count yields 0.
pub fn clamp_selection(value: i64, count: u32) -> u32 {
    if count == 0 {
        return 0;
    }
    let last = count - 1;
    if value < 0 {
        last
    } else {
        value.min(last as i64) as u32
    }
}

/// Selected array slice / face / mip / volume slice of a binding
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SubresourceSelection {
    pub array_slice: u32,
    pub face: u32,
    pub mip: u32,
    pub volume_slice: u32,
}

// ===== RESOURCE BINDING =====

/// GPU-resident view of one imported texture
///
/// A binding without a texture handle represents a texture whose GPU
/// creation was skipped; it is listed but never drawn. Dropping the binding
/// drops its GPU handles, so bindings that may still be referenced by
/// in-flight work must go through the deferred-release queue instead.
pub struct ResourceBinding {
    texture: Option<Arc<dyn Texture>>,
    upload_buffer: Option<Arc<dyn Buffer>>,
    slot: Option<SlotIndex>,
    last_used_frame: u64,
    description: TextureDescription,
    selection: SubresourceSelection,
}

impl ResourceBinding {
    /// Binding for `description` with no GPU objects yet
    pub fn new(description: TextureDescription) -> Self {
        Self {
            texture: None,
            upload_buffer: None,
            slot: None,
            last_used_frame: 0,
            description,
            selection: SubresourceSelection::default(),
        }
    }

    /// Attach the created GPU objects and the descriptor slot holding their view
    pub fn attach(&mut self, upload: TextureUpload, slot: SlotIndex) {
        self.texture = Some(upload.texture);
        self.upload_buffer = Some(upload.upload_buffer);
        self.slot = Some(slot);
    }

    /// Whether the binding owns a GPU texture and can be drawn
    pub fn has_gpu_texture(&self) -> bool {
        self.texture.is_some()
    }

    pub fn texture(&self) -> Option<&Arc<dyn Texture>> {
        self.texture.as_ref()
    }

    /// Staging buffer the texture's upload reads from
    pub fn upload_buffer(&self) -> Option<&Arc<dyn Buffer>> {
        self.upload_buffer.as_ref()
    }

    pub fn slot(&self) -> Option<SlotIndex> {
        self.slot
    }

    /// Detach the descriptor slot so it can be handed back to the allocator
    pub(crate) fn take_slot(&mut self) -> Option<SlotIndex> {
        self.slot.take()
    }

    pub fn last_used_frame(&self) -> u64 {
        self.last_used_frame
    }

    /// Record that the binding is referenced by work submitted in `frame`
    pub fn touch(&mut self, frame: u64) {
        self.last_used_frame = frame;
    }

    pub fn description(&self) -> &TextureDescription {
        &self.description
    }

    pub fn format(&self) -> TextureFormat {
        self.description.format
    }

    pub fn dimension(&self) -> TextureDimension {
        self.description.dimension
    }

    pub fn extent(&self) -> UVec3 {
        self.description.extent
    }

    pub fn array_count(&self) -> u32 {
        self.description.array_size.max(1)
    }

    pub fn face_count(&self) -> u32 {
        self.description.faces.max(1)
    }

    pub fn mip_count(&self) -> u32 {
        self.description.mips.max(1)
    }

    pub fn selection(&self) -> SubresourceSelection {
        self.selection
    }

    /// Extent of the currently selected mip
    pub fn selected_mip_extent(&self) -> UVec3 {
        mip_extent(self.extent(), self.selection.mip)
    }

    /// Depth coordinate of the selected volume slice at the selected mip
    pub fn volume_w(&self) -> f32 {
        volume_depth_coordinate(self.selection.volume_slice, self.selected_mip_extent())
    }

    pub fn set_array_slice(&mut self, value: i64) -> u32 {
        self.selection.array_slice = clamp_selection(value, self.array_count());
        self.selection.array_slice
    }

    pub fn set_face(&mut self, value: i64) -> u32 {
        self.selection.face = clamp_selection(value, self.face_count());
        self.selection.face
    }

    /// Select a mip; the volume slice is re-clamped to the new mip's depth
    pub fn set_mip(&mut self, value: i64) -> u32 {
        self.selection.mip = clamp_selection(value, self.mip_count());
        let depth = self.selected_mip_extent().z;
        self.selection.volume_slice = self.selection.volume_slice.min(depth - 1);
        self.selection.mip
    }

    pub fn set_volume_slice(&mut self, value: i64) -> u32 {
        self.selection.volume_slice = clamp_selection(value, self.selected_mip_extent().z);
        self.selection.volume_slice
    }
}

#[cfg(test)]
#[path = "resource_binding_tests.rs"]
mod tests;
