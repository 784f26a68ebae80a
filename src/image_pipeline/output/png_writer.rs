use std::io::Write;

use image::codecs::png::PngEncoder;
use image::{ExtendedColorType, ImageEncoder};
use tracing::debug;

use crate::image_pipeline::common::error::{ConversionError, Result};
use crate::image_pipeline::normals::NormalMap;
use crate::image_pipeline::output::writer::NormalMapWriter;

/// Writes the normal map as an 8-bit RGB PNG.
pub struct StandardPngWriter;

impl NormalMapWriter for StandardPngWriter {
    fn write_normal_map(&self, map: &NormalMap, output: &mut dyn Write) -> Result<()> {
        debug!("Encoding PNG normal map: {}x{}", map.width, map.height);

        PngEncoder::new(output)
            .write_image(
                &map.data,
                map.width as u32,
                map.height as u32,
                ExtendedColorType::Rgb8,
            )
            .map_err(|e| ConversionError::EncodeError(e.to_string()))?;

        debug!("PNG encoding complete");
        Ok(())
    }
}
