/// Import module - the texture import collaborator and the types it produces

// Module declarations
pub mod file_format;
pub mod import_error;
pub mod texture_description;
pub mod texture_importer;

// Re-export from other modules
pub use file_format::*;
pub use import_error::*;
pub use texture_description::*;
pub use texture_importer::*;

// Mock importer for tests
#[cfg(test)]
pub mod mock_importer;
