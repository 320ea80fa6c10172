/// Shader variations and the constants pushed by the viewer's draw

use bytemuck::{Pod, Zeroable};
use crate::import::TextureDimension;

/// Texture shape a full-screen pipeline is compiled for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShaderVariation {
    Texture1d,
    Texture1dArray,
    Texture2d,
    Texture2dArray,
    TextureCube,
    TextureCubeArray,
    Texture3d,
}

/// `(dimension, arrayed) -> variation`
const VARIATION_TABLE: [(TextureDimension, bool, ShaderVariation); 8] = [
    (TextureDimension::Texture1D, false, ShaderVariation::Texture1d),
    (TextureDimension::Texture1D, true, ShaderVariation::Texture1dArray),
    (TextureDimension::Texture2D, false, ShaderVariation::Texture2d),
    (TextureDimension::Texture2D, true, ShaderVariation::Texture2dArray),
    (TextureDimension::TextureCube, false, ShaderVariation::TextureCube),
    (TextureDimension::TextureCube, true, ShaderVariation::TextureCubeArray),
    // Volume textures cannot be arrayed
    (TextureDimension::Texture3D, false, ShaderVariation::Texture3d),
    (TextureDimension::Texture3D, true, ShaderVariation::Texture3d),
];

impl ShaderVariation {
    /// Every variation, in pipeline creation order
    pub const ALL: [ShaderVariation; 7] = [
        ShaderVariation::Texture1d,
        ShaderVariation::Texture1dArray,
        ShaderVariation::Texture2d,
        ShaderVariation::Texture2dArray,
        ShaderVariation::TextureCube,
        ShaderVariation::TextureCubeArray,
        ShaderVariation::Texture3d,
    ];

    /// Variation that can sample a texture of this shape
    pub fn from_texture(dimension: TextureDimension, array_size: u32) -> ShaderVariation {
        let arrayed = array_size > 1;
        VARIATION_TABLE
            .iter()
            .find(|(d, a, _)| *d == dimension && *a == arrayed)
            .map(|(_, _, variation)| *variation)
            .unwrap_or(ShaderVariation::Texture2d)
    }

    /// Position in `ALL`
    pub fn index(&self) -> usize {
        *self as usize
    }

    /// Preprocessor define selecting this variation in the viewer shader
    pub fn define(&self) -> &'static str {
        match self {
            ShaderVariation::Texture1d => "TEXTURE_1D",
            ShaderVariation::Texture1dArray => "TEXTURE_1D_ARRAY",
            ShaderVariation::Texture2d => "TEXTURE_2D",
            ShaderVariation::Texture2dArray => "TEXTURE_2D_ARRAY",
            ShaderVariation::TextureCube => "TEXTURE_CUBE",
            ShaderVariation::TextureCubeArray => "TEXTURE_CUBE_ARRAY",
            ShaderVariation::Texture3d => "TEXTURE_3D",
        }
    }
}

/// Constants pushed before the full-screen draw
///
/// Layout matches the constant block of the viewer shader.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Pod, Zeroable)]
pub struct ShaderConstants {
    pub screen_aspect: f32,
    pub texture_aspect: f32,
    pub array_slice: u32,
    pub face: u32,
    pub mip: u32,
    /// Normalized depth coordinate of the selected volume slice
    pub volume_w: f32,
    pub point_sample: u32,
    pub _pad: u32,
}

#[cfg(test)]
#[path = "shader_variation_tests.rs"]
mod tests;
