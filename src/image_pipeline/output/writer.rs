use std::io::Write;

use crate::image_pipeline::channels::ChannelPlanes;
use crate::image_pipeline::common::error::Result;
use crate::image_pipeline::normals::NormalMap;

pub trait HeightmapWriter {
    fn write_heightmap(&self, planes: &ChannelPlanes, output: &mut dyn Write) -> Result<()>;
}

pub trait NormalMapWriter {
    fn write_normal_map(&self, map: &NormalMap, output: &mut dyn Write) -> Result<()>;
}
