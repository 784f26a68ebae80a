//! Decoded source image types

/// A decoded 8-bit source image in one of the two supported layouts.
///
/// Every other layout is rejected by the reader with
/// `ConversionError::UnsupportedFormat`.
#[derive(Debug, Clone)]
pub enum SourceImage {
    /// Single channel luminance, one byte per pixel
    Luminance {
        width: usize,
        height: usize,
        data: Vec<u8>,
    },
    /// Interleaved [R, G, B, A, R, G, B, A, ...], four bytes per pixel
    Rgba {
        width: usize,
        height: usize,
        data: Vec<u8>,
    },
}

impl SourceImage {
    pub fn width(&self) -> usize {
        match self {
            SourceImage::Luminance { width, .. } | SourceImage::Rgba { width, .. } => *width,
        }
    }

    pub fn height(&self) -> usize {
        match self {
            SourceImage::Luminance { height, .. } | SourceImage::Rgba { height, .. } => *height,
        }
    }

    /// Short mode tag used in logs ("L" or "RGBA").
    pub fn mode(&self) -> &'static str {
        match self {
            SourceImage::Luminance { .. } => "L",
            SourceImage::Rgba { .. } => "RGBA",
        }
    }
}
