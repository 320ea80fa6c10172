/// Backend module - the graphics backend capability set consumed by the viewer

// Module declarations
pub mod graphics_backend;
pub mod texture;
pub mod buffer;
pub mod pipeline;
pub mod command_list;
pub mod shader_variation;

// Re-export everything from graphics_backend.rs
pub use graphics_backend::*;

// Re-export from other modules
pub use texture::*;
pub use buffer::*;
pub use pipeline::*;
pub use command_list::*;
pub use shader_variation::*;

// Mock backend for tests (no GPU required)
#[cfg(test)]
pub mod mock_backend;
