/// Texture importer trait - the image decoding collaborator

use std::path::Path;
use super::{ImportError, TextureDescription};

/// Turns a file path into an ordered list of decoded texture descriptions
///
/// Implemented outside this crate by the actual decoding pipeline. A single
/// file may yield several textures (e.g. a texture array stored as multiple
/// logical textures); the order is the order bindings are created in.
pub trait TextureImporter {
    /// Import the file at `path`
    ///
    /// Blocking from the caller's point of view.
    fn import(&self, path: &Path) -> std::result::Result<Vec<TextureDescription>, ImportError>;
}
