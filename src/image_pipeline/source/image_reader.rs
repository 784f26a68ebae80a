//! Source image reader implementation using the image library.
//!
//! Any container the image library can decode is accepted (PNG, JPEG, TIFF,
//! BMP, TGA, WebP), as long as the decoded pixels are 8-bit luminance or
//! 8-bit RGBA. PNG files are additionally checked against their stored
//! IHDR layout, since the decoder expands palettes and sub-byte depths.

use std::io::Cursor;

use image::{DynamicImage, ImageFormat};
use tracing::{debug, info};

use crate::image_pipeline::common::error::{ConversionError, Result};
use crate::image_pipeline::source::reader::SourceImageReader;
use crate::image_pipeline::source::types::SourceImage;

/// Source reader backed by `image::load_from_memory`.
pub struct ImageCrateReader;

impl SourceImageReader for ImageCrateReader {
    fn read_image(&self, data: &[u8]) -> Result<SourceImage> {
        debug!("Decoding source image, {} bytes", data.len());

        let format = image::guess_format(data)
            .map_err(|e| ConversionError::DecodeError(e.to_string()))?;

        if format == ImageFormat::Png {
            check_png_layout(data)?;
        }

        let decoded = image::load_from_memory_with_format(data, format)
            .map_err(|e| ConversionError::DecodeError(e.to_string()))?;

        let image = into_source_image(decoded)?;

        info!(
            format = format_name(format),
            width = image.width(),
            height = image.height(),
            mode = image.mode(),
            "Decoded source image"
        );

        Ok(image)
    }
}

/// Reject PNG layouts other than 8-bit grayscale and 8-bit RGBA before the
/// decoder expands them (palette, 1/2/4/16-bit, gray+alpha, RGB).
pub(crate) fn check_png_layout(data: &[u8]) -> Result<()> {
    let reader = png::Decoder::new(Cursor::new(data))
        .read_info()
        .map_err(|e| ConversionError::DecodeError(e.to_string()))?;
    let info = reader.info();

    match (info.color_type, info.bit_depth) {
        (png::ColorType::Grayscale, png::BitDepth::Eight)
        | (png::ColorType::Rgba, png::BitDepth::Eight) => Ok(()),
        (color_type, bit_depth) => Err(ConversionError::UnsupportedFormat(format!(
            "PNG {color_type:?} {}-bit",
            bit_depth as u8
        ))),
    }
}

/// Maps a decoded image onto the supported layouts, rejecting the rest.
pub(crate) fn into_source_image(decoded: DynamicImage) -> Result<SourceImage> {
    let width = decoded.width() as usize;
    let height = decoded.height() as usize;

    match decoded {
        DynamicImage::ImageLuma8(buffer) => Ok(SourceImage::Luminance {
            width,
            height,
            data: buffer.into_raw(),
        }),
        DynamicImage::ImageRgba8(buffer) => Ok(SourceImage::Rgba {
            width,
            height,
            data: buffer.into_raw(),
        }),
        other => Err(ConversionError::UnsupportedFormat(format!(
            "{:?}",
            other.color()
        ))),
    }
}

fn format_name(format: ImageFormat) -> &'static str {
    format.extensions_str().first().copied().unwrap_or("unknown")
}
