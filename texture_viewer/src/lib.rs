/*!
# Texture Viewer

Lifecycle management for GPU-resident texture views.

The viewer repeatedly swaps which imported texture is "current" in response to
selection changes, while the graphics backend consumes those resources
asynchronously over several frames in flight. Superseded resources are never
destroyed synchronously: they sit in a deferred-release queue until the
backend has certainly finished with them.

## Architecture

- **DescriptorSlotAllocator**: bounded pool of shader-visible descriptor slots
- **DeferredReleaseQueue**: retired bindings, released after the frame latency
- **ResourceBinding**: GPU objects + descriptor slot + subresource selection of one texture
- **SelectionController**: turns a selection change into a new TextureSet
- **Viewer**: per-frame orchestration (`render_update` / `render_pass`)

The importer and the graphics backend are external collaborators expressed as
traits (`TextureImporter`, `GraphicsBackend`, `CommandList`).
*/

// Modules
pub mod error;
pub mod log;
pub mod import;
pub mod descriptor;
pub mod backend;
pub mod binding;
pub mod release;
pub mod selection;
pub mod config;
pub mod viewer;

// Main texview namespace module
pub mod texview {
    // Error types
    pub use crate::error::{Error, Result};

    // Frame orchestrator and its configuration
    pub use crate::viewer::{Viewer, ViewerStatus, TextureSummary};
    pub use crate::config::ViewerConfig;

    // Logging sub-module (types only, macros live at the crate root)
    pub mod log {
        pub use crate::log::{Logger, LogEntry, LogSeverity, DefaultLogger, set_logger, reset_logger};
    }

    // Backend collaborator traits and types
    pub mod backend {
        pub use crate::backend::*;
    }

    // Import collaborator traits and types
    pub mod import {
        pub use crate::import::*;
    }

    // Resource lifecycle building blocks
    pub mod lifecycle {
        pub use crate::descriptor::*;
        pub use crate::release::*;
        pub use crate::binding::*;
        pub use crate::selection::*;
    }
}

// Re-export math library at crate root
pub use glam;
