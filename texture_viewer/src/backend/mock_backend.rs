/// Mock graphics backend for unit tests (no GPU required)
///
/// Tracks every created and destroyed GPU object so tests can check that
/// resources are released exactly when the deferred-release rules allow it.
/// Failures can be injected per call index.

#[cfg(test)]
use std::sync::{Arc, Mutex};
#[cfg(test)]
use rustc_hash::FxHashSet;

#[cfg(test)]
use crate::backend::{
    Buffer, BufferDesc, CommandList, GraphicsBackend, IndexType, Pipeline, PipelineDesc,
    Rect2D, ShaderVariation, Texture, TextureUpload, Viewport,
};
#[cfg(test)]
use crate::descriptor::SlotIndex;
#[cfg(test)]
use crate::error::Result;
#[cfg(test)]
use crate::import::TextureDescription;
#[cfg(test)]
use crate::viewer_bail;

/// Shared record of object lifetimes
#[cfg(test)]
pub type Ledger = Arc<Mutex<Vec<String>>>;

// ============================================================================
// Mock Texture
// ============================================================================

#[cfg(test)]
pub struct MockTexture {
    pub description: TextureDescription,
    pub name: String,
    destroyed: Ledger,
}

#[cfg(test)]
impl Texture for MockTexture {
    fn description(&self) -> &TextureDescription {
        &self.description
    }
}

#[cfg(test)]
impl Drop for MockTexture {
    fn drop(&mut self) {
        self.destroyed.lock().unwrap().push(self.name.clone());
    }
}

// ============================================================================
// Mock Buffer
// ============================================================================

#[cfg(test)]
pub struct MockBuffer {
    pub size: u64,
    pub name: String,
    destroyed: Ledger,
}

#[cfg(test)]
impl Buffer for MockBuffer {
    fn size(&self) -> u64 {
        self.size
    }
}

#[cfg(test)]
impl Drop for MockBuffer {
    fn drop(&mut self) {
        self.destroyed.lock().unwrap().push(self.name.clone());
    }
}

// ============================================================================
// Mock Pipeline
// ============================================================================

#[cfg(test)]
#[derive(Debug)]
pub struct MockPipeline {
    pub variation: ShaderVariation,
}

#[cfg(test)]
impl Pipeline for MockPipeline {
    fn variation(&self) -> ShaderVariation {
        self.variation
    }
}

// ============================================================================
// Mock CommandList
// ============================================================================

#[cfg(test)]
#[derive(Debug, Default)]
pub struct MockCommandList {
    pub commands: Vec<String>,
    pub bound_slot: Option<SlotIndex>,
    pub bound_variation: Option<ShaderVariation>,
    pub constants: Vec<u8>,
    pub viewport: Option<Viewport>,
}

#[cfg(test)]
impl MockCommandList {
    pub fn new() -> Self {
        Self::default()
    }
}

#[cfg(test)]
impl CommandList for MockCommandList {
    fn set_viewport(&mut self, viewport: Viewport) -> Result<()> {
        self.viewport = Some(viewport);
        self.commands.push("set_viewport".to_string());
        Ok(())
    }

    fn set_scissor(&mut self, _scissor: Rect2D) -> Result<()> {
        self.commands.push("set_scissor".to_string());
        Ok(())
    }

    fn bind_pipeline(&mut self, pipeline: &Arc<dyn Pipeline>) -> Result<()> {
        self.bound_variation = Some(pipeline.variation());
        self.commands.push("bind_pipeline".to_string());
        Ok(())
    }

    fn push_constants(&mut self, _offset: u32, data: &[u8]) -> Result<()> {
        self.constants = data.to_vec();
        self.commands.push("push_constants".to_string());
        Ok(())
    }

    fn bind_descriptor_table(&mut self, slot: SlotIndex) -> Result<()> {
        self.bound_slot = Some(slot);
        self.commands.push("bind_descriptor_table".to_string());
        Ok(())
    }

    fn bind_index_buffer(&mut self, _buffer: &Arc<dyn Buffer>, _offset: u64, _index_type: IndexType) -> Result<()> {
        self.commands.push("bind_index_buffer".to_string());
        Ok(())
    }

    fn draw_indexed(&mut self, index_count: u32, _first_index: u32, _vertex_offset: i32) -> Result<()> {
        self.commands.push(format!("draw_indexed({})", index_count));
        Ok(())
    }
}

// ============================================================================
// Mock Backend
// ============================================================================

/// Mock backend that tracks created resources without GPU
#[cfg(test)]
pub struct MockBackend {
    pub capacity: u32,
    /// Names of created textures and buffers
    pub created: Ledger,
    /// Names of destroyed textures and buffers, in drop order
    pub destroyed: Ledger,
    /// `(texture name, slot)` for every successful view creation
    pub views: Vec<(String, SlotIndex)>,
    pub pipelines: Vec<ShaderVariation>,
    /// Zero-based `create_texture_and_upload` calls that fail
    pub fail_texture_calls: FxHashSet<usize>,
    /// Zero-based `create_view` calls that fail
    pub fail_view_calls: FxHashSet<usize>,
    pub fail_pipelines: bool,
    texture_calls: usize,
    view_calls: usize,
    next_id: usize,
}

#[cfg(test)]
impl MockBackend {
    pub fn new() -> Self {
        Self::with_capacity(1024)
    }

    pub fn with_capacity(capacity: u32) -> Self {
        Self {
            capacity,
            created: Arc::new(Mutex::new(Vec::new())),
            destroyed: Arc::new(Mutex::new(Vec::new())),
            views: Vec::new(),
            pipelines: Vec::new(),
            fail_texture_calls: FxHashSet::default(),
            fail_view_calls: FxHashSet::default(),
            fail_pipelines: false,
            texture_calls: 0,
            view_calls: 0,
            next_id: 0,
        }
    }

    pub fn created_textures(&self) -> Vec<String> {
        self.created.lock().unwrap().iter().filter(|n| n.starts_with("texture_")).cloned().collect()
    }

    pub fn destroyed_textures(&self) -> Vec<String> {
        self.destroyed.lock().unwrap().iter().filter(|n| n.starts_with("texture_")).cloned().collect()
    }

    /// Textures created and not yet dropped
    pub fn live_texture_count(&self) -> usize {
        self.created_textures().len() - self.destroyed_textures().len()
    }

    fn next_name(&mut self, prefix: &str) -> String {
        let name = format!("{}_{}", prefix, self.next_id);
        self.next_id += 1;
        name
    }
}

#[cfg(test)]
impl GraphicsBackend for MockBackend {
    fn descriptor_capacity(&self) -> u32 {
        self.capacity
    }

    fn create_texture_and_upload(&mut self, desc: &TextureDescription) -> Result<TextureUpload> {
        let call = self.texture_calls;
        self.texture_calls += 1;
        if self.fail_texture_calls.contains(&call) {
            viewer_bail!("texview::mock", "create_texture_and_upload: injected failure on call {}", call);
        }

        let texture_name = self.next_name("texture");
        let upload_name = self.next_name("upload");
        self.created.lock().unwrap().push(texture_name.clone());
        self.created.lock().unwrap().push(upload_name.clone());

        Ok(TextureUpload {
            texture: Arc::new(MockTexture {
                description: desc.clone(),
                name: texture_name,
                destroyed: self.destroyed.clone(),
            }),
            upload_buffer: Arc::new(MockBuffer {
                size: (desc.extent.x * desc.extent.y * desc.extent.z * 4) as u64,
                name: upload_name,
                destroyed: self.destroyed.clone(),
            }),
        })
    }

    fn create_view(&mut self, texture: &dyn Texture, slot: SlotIndex) -> Result<()> {
        let call = self.view_calls;
        self.view_calls += 1;
        if self.fail_view_calls.contains(&call) {
            viewer_bail!("texview::mock", "create_view: injected failure on call {}", call);
        }
        if slot >= self.capacity {
            viewer_bail!("texview::mock", "create_view: slot {} out of range (capacity = {})", slot, self.capacity);
        }
        let extent = texture.description().extent;
        self.views.push((format!("{}x{}x{}", extent.x, extent.y, extent.z), slot));
        Ok(())
    }

    fn create_pipeline(&mut self, desc: &PipelineDesc) -> Result<Arc<dyn Pipeline>> {
        if self.fail_pipelines {
            viewer_bail!("texview::mock", "create_pipeline: injected failure for {}", desc.variation.define());
        }
        self.pipelines.push(desc.variation);
        Ok(Arc::new(MockPipeline { variation: desc.variation }))
    }

    fn create_buffer(&mut self, desc: BufferDesc) -> Result<Arc<dyn Buffer>> {
        let name = self.next_name("buffer");
        self.created.lock().unwrap().push(name.clone());
        Ok(Arc::new(MockBuffer {
            size: desc.size,
            name,
            destroyed: self.destroyed.clone(),
        }))
    }
}
