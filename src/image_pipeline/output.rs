//! Output writing module
//!
//! This module serializes the heightmap planes to OpenEXR and the normal map to PNG.

mod exr_writer;
mod png_writer;
mod writer;

pub use exr_writer::StandardExrWriter;
pub use png_writer::StandardPngWriter;
pub use writer::{HeightmapWriter, NormalMapWriter};
