use std::io::{Cursor, Write};

use exr::prelude::{Image, SpecificChannels, Vec2, WritableImage};
use tracing::debug;

use crate::image_pipeline::channels::ChannelPlanes;
use crate::image_pipeline::common::error::{ConversionError, Result};
use crate::image_pipeline::output::writer::HeightmapWriter;

/// Writes the four planes as a single-layer RGBA OpenEXR image with 32-bit
/// float samples.
pub struct StandardExrWriter;

impl HeightmapWriter for StandardExrWriter {
    fn write_heightmap(&self, planes: &ChannelPlanes, output: &mut dyn Write) -> Result<()> {
        let width = planes.width();
        let height = planes.rows();
        debug!("Encoding EXR heightmap: {}x{}", width, height);

        // The encoder needs Seek, so encode into memory first.
        let mut buffer = Vec::new();

        let channels = SpecificChannels::rgba(|Vec2(x, y)| planes.rgba_at(x, y));
        let image = Image::from_channels((width, height), channels);

        image
            .write()
            .non_parallel()
            .to_buffered(Cursor::new(&mut buffer))
            .map_err(|e| ConversionError::EncodeError(e.to_string()))?;

        output.write_all(&buffer)?;

        debug!("EXR encoding complete, {} bytes", buffer.len());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::image_pipeline::channels::ChannelPlane;

    #[test]
    fn test_encodes_exr_magic() {
        let planes = ChannelPlanes {
            height: ChannelPlane::filled(3, 2, 0.5),
            green: ChannelPlane::filled(3, 2, 0.0),
            blue: ChannelPlane::filled(3, 2, 0.0),
            alpha: ChannelPlane::filled(3, 2, 1.0),
        };
        let mut out = Vec::new();
        StandardExrWriter.write_heightmap(&planes, &mut out).unwrap();

        assert_eq!(&out[..4], &[0x76, 0x2f, 0x31, 0x01]);
    }
}
