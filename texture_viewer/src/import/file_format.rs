/// File format categories the test catalog is organized by

/// Importable file-format category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FileFormat {
    Bitmap,
    Dds,
    Gif,
    Hdr,
    Jpeg,
    Ktx,
    Ktx2,
    OpenExr,
    Png,
    Psd,
    Tga,
    Tiff,
}

impl FileFormat {
    /// All categories, in display/cycling order
    pub const ALL: [FileFormat; 12] = [
        FileFormat::Bitmap,
        FileFormat::Dds,
        FileFormat::Gif,
        FileFormat::Hdr,
        FileFormat::Jpeg,
        FileFormat::Ktx,
        FileFormat::Ktx2,
        FileFormat::OpenExr,
        FileFormat::Png,
        FileFormat::Psd,
        FileFormat::Tga,
        FileFormat::Tiff,
    ];

    /// Number of categories
    pub const COUNT: usize = Self::ALL.len();

    /// Position of this category in `ALL`
    pub fn index(&self) -> usize {
        *self as usize
    }

    /// Category at `index`, or None if out of range
    pub fn from_index(index: usize) -> Option<FileFormat> {
        Self::ALL.get(index).copied()
    }

    /// Previous category, wrapping from the first to the last
    pub fn prev(&self) -> FileFormat {
        let index = self.index();
        if index > 0 {
            Self::ALL[index - 1]
        } else {
            Self::ALL[Self::COUNT - 1]
        }
    }

    /// Next category, wrapping from the last to the first
    pub fn next(&self) -> FileFormat {
        Self::ALL[(self.index() + 1) % Self::COUNT]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            FileFormat::Bitmap => "Bitmap",
            FileFormat::Dds => "DDS",
            FileFormat::Gif => "GIF",
            FileFormat::Hdr => "HDR",
            FileFormat::Jpeg => "JPEG",
            FileFormat::Ktx => "KTX",
            FileFormat::Ktx2 => "KTX2",
            FileFormat::OpenExr => "OpenEXR",
            FileFormat::Png => "PNG",
            FileFormat::Psd => "PSD",
            FileFormat::Tga => "TGA",
            FileFormat::Tiff => "TIFF",
        }
    }
}

#[cfg(test)]
#[path = "file_format_tests.rs"]
mod tests;
