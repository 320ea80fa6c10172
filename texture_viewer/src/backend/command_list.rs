/// CommandList trait - for recording the viewer's draw

use std::sync::Arc;
use crate::error::Result;
use crate::descriptor::SlotIndex;
use super::{Buffer, IndexType, Pipeline};

/// Command list for recording rendering commands
///
/// Commands are recorded by the viewer's render pass and submitted by the
/// host application. Submission is asynchronous: anything referenced here
/// must stay alive for the backend's frame latency.
pub trait CommandList {
    /// Set the viewport
    fn set_viewport(&mut self, viewport: Viewport) -> Result<()>;

    /// Set the scissor rectangle
    fn set_scissor(&mut self, scissor: Rect2D) -> Result<()>;

    /// Bind a graphics pipeline
    fn bind_pipeline(&mut self, pipeline: &Arc<dyn Pipeline>) -> Result<()>;

    /// Push 32-bit constants to the bound pipeline
    ///
    /// # Arguments
    ///
    /// * `offset` - Offset in bytes into the constant range
    /// * `data` - Data to push
    fn push_constants(&mut self, offset: u32, data: &[u8]) -> Result<()>;

    /// Bind the shader-visible descriptor table starting at `slot`
    fn bind_descriptor_table(&mut self, slot: SlotIndex) -> Result<()>;

    /// Bind an index buffer
    fn bind_index_buffer(&mut self, buffer: &Arc<dyn Buffer>, offset: u64, index_type: IndexType) -> Result<()>;

    /// Draw indexed vertices
    ///
    /// # Arguments
    ///
    /// * `index_count` - Number of indices to draw
    /// * `first_index` - Index of first index
    /// * `vertex_offset` - Value added to vertex index before indexing into the vertex buffer
    fn draw_indexed(&mut self, index_count: u32, first_index: u32, vertex_offset: i32) -> Result<()>;
}

/// Viewport dimensions and depth range
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    pub min_depth: f32,
    pub max_depth: f32,
}

/// 2D rectangle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rect2D {
    pub x: i32,
    pub y: i32,
    pub width: u32,
    pub height: u32,
}
