/// Texture description produced by the import collaborator

use glam::UVec3;

/// Pixel format of a decoded texture
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[allow(non_camel_case_types)]
pub enum TextureFormat {
    // 8-bit formats
    R8_UNORM,
    R8G8_UNORM,
    R8G8B8A8_UNORM,
    R8G8B8A8_SRGB,
    B8G8R8A8_UNORM,
    B8G8R8A8_SRGB,

    // 16/32-bit formats
    R16G16B16A16_UNORM,
    R16G16B16A16_SFLOAT,
    R32_SFLOAT,
    R32G32B32A32_SFLOAT,
    R11G11B10_UFLOAT,
    R9G9B9E5_UFLOAT,

    // Block compressed formats
    BC1_UNORM,
    BC2_UNORM,
    BC3_UNORM,
    BC4_UNORM,
    BC5_UNORM,
    BC6H_UFLOAT,
    BC7_UNORM,
    ETC2_R8G8B8_UNORM,
    ASTC_4x4_UNORM,
}

impl TextureFormat {
    /// Display name of the format
    pub fn as_str(&self) -> &'static str {
        match self {
            TextureFormat::R8_UNORM => "R8_UNORM",
            TextureFormat::R8G8_UNORM => "R8G8_UNORM",
            TextureFormat::R8G8B8A8_UNORM => "R8G8B8A8_UNORM",
            TextureFormat::R8G8B8A8_SRGB => "R8G8B8A8_SRGB",
            TextureFormat::B8G8R8A8_UNORM => "B8G8R8A8_UNORM",
            TextureFormat::B8G8R8A8_SRGB => "B8G8R8A8_SRGB",
            TextureFormat::R16G16B16A16_UNORM => "R16G16B16A16_UNORM",
            TextureFormat::R16G16B16A16_SFLOAT => "R16G16B16A16_SFLOAT",
            TextureFormat::R32_SFLOAT => "R32_SFLOAT",
            TextureFormat::R32G32B32A32_SFLOAT => "R32G32B32A32_SFLOAT",
            TextureFormat::R11G11B10_UFLOAT => "R11G11B10_UFLOAT",
            TextureFormat::R9G9B9E5_UFLOAT => "R9G9B9E5_UFLOAT",
            TextureFormat::BC1_UNORM => "BC1_UNORM",
            TextureFormat::BC2_UNORM => "BC2_UNORM",
            TextureFormat::BC3_UNORM => "BC3_UNORM",
            TextureFormat::BC4_UNORM => "BC4_UNORM",
            TextureFormat::BC5_UNORM => "BC5_UNORM",
            TextureFormat::BC6H_UFLOAT => "BC6H_UFLOAT",
            TextureFormat::BC7_UNORM => "BC7_UNORM",
            TextureFormat::ETC2_R8G8B8_UNORM => "ETC2_R8G8B8_UNORM",
            TextureFormat::ASTC_4x4_UNORM => "ASTC_4x4_UNORM",
        }
    }
}

/// Dimensionality of a decoded texture
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TextureDimension {
    Texture1D,
    Texture2D,
    Texture3D,
    TextureCube,
}

/// Description of one decoded texture, as reported by the importer
///
/// Holds everything the viewer needs to create GPU objects and to bound
/// subresource selection. Pixel data stays with the importer's allocation
/// and is referenced by the backend during upload.
#[derive(Debug, Clone, PartialEq)]
pub struct TextureDescription {
    /// Pixel format
    pub format: TextureFormat,
    /// Texture dimensionality
    pub dimension: TextureDimension,
    /// Base level extent (width, height, depth)
    pub extent: UVec3,
    /// Number of array elements (1 = not an array)
    pub array_size: u32,
    /// Number of faces (6 for cubemaps, 1 otherwise)
    pub faces: u32,
    /// Number of mip levels
    pub mips: u32,
}

impl TextureDescription {
    /// Simple single-mip 2D texture
    pub fn texture_2d(format: TextureFormat, width: u32, height: u32) -> Self {
        Self {
            format,
            dimension: TextureDimension::Texture2D,
            extent: UVec3::new(width, height, 1),
            array_size: 1,
            faces: 1,
            mips: 1,
        }
    }

    /// Set the array size
    pub fn with_array_size(mut self, array_size: u32) -> Self {
        self.array_size = array_size;
        self
    }

    /// Set the mip count
    pub fn with_mips(mut self, mips: u32) -> Self {
        self.mips = mips;
        self
    }

    /// Human readable extent ("W x H" or "W x H x D")
    pub fn extent_label(&self) -> String {
        if self.extent.z == 1 {
            format!("{} x {}", self.extent.x, self.extent.y)
        } else {
            format!("{} x {} x {}", self.extent.x, self.extent.y, self.extent.z)
        }
    }
}
