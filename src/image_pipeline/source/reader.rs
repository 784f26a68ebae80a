use crate::image_pipeline::common::error::Result;
use crate::image_pipeline::source::types::SourceImage;

pub trait SourceImageReader {
    fn read_image(&self, data: &[u8]) -> Result<SourceImage>;
}
