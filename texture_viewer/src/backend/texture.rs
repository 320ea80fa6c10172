/// GPU texture trait

use crate::import::TextureDescription;

/// GPU texture resource trait
///
/// Implemented by backend-specific texture types. The GPU object is destroyed
/// when the last reference is dropped, so holders must keep it alive until the
/// backend has finished every submission that references it.
pub trait Texture: Send + Sync {
    /// Description the texture was created from
    fn description(&self) -> &TextureDescription;
}
