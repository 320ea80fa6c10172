/// GraphicsBackend trait - resource creation capability set

use std::sync::Arc;
use crate::error::Result;
use crate::descriptor::SlotIndex;
use crate::import::TextureDescription;
use super::{Buffer, BufferDesc, Pipeline, PipelineDesc, Texture};

/// GPU objects produced by a texture creation request
///
/// `upload_buffer` is the staging buffer the copy commands read from; it has
/// to outlive the submission that performs the copy, so it is kept alongside
/// the texture for the binding's whole lifetime.
#[derive(Clone)]
pub struct TextureUpload {
    pub texture: Arc<dyn Texture>,
    pub upload_buffer: Arc<dyn Buffer>,
}

/// Graphics backend capability set
///
/// Implemented by the host application's backend (D3D12, Vulkan, ...).
/// The viewer never retains the backend: it is passed by reference to every
/// call that needs it and invoked synchronously.
pub trait GraphicsBackend {
    /// Number of entries in the shader-visible descriptor table
    fn descriptor_capacity(&self) -> u32;

    /// Create a GPU texture for `desc` and record the commands uploading its pixels
    fn create_texture_and_upload(&mut self, desc: &TextureDescription) -> Result<TextureUpload>;

    /// Write a shader-visible view of `texture` into descriptor `slot`
    fn create_view(&mut self, texture: &dyn Texture, slot: SlotIndex) -> Result<()>;

    /// Create one of the fixed full-screen pipelines
    fn create_pipeline(&mut self, desc: &PipelineDesc) -> Result<Arc<dyn Pipeline>>;

    /// Create a buffer, uploading `desc.data` if present
    fn create_buffer(&mut self, desc: BufferDesc) -> Result<Arc<dyn Buffer>>;
}
