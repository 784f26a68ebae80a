//! Image processing pipeline module
//!
//! This module turns a grayscale or RGBA image into a float heightmap and an
//! optional normal map, with separate modules for source reading, channel
//! extraction, normal generation, output writing and conversion orchestration.

pub mod channels;
pub mod common;
pub mod config;
pub mod conversions;
pub mod normals;
pub mod output;
pub mod source;

pub use common::{ConversionError, Result};

pub use source::{ImageCrateReader, SourceImage, SourceImageReader};

pub use channels::{ChannelPlane, ChannelPlanes, adjust_channels, extract_channels};

pub use normals::{
    EdgeFilter, KernelSize, NormalMap, NormalMapOptions, ZRange, gain, generate_normal_map,
};

pub use output::{HeightmapWriter, NormalMapWriter, StandardExrWriter, StandardPngWriter};

pub use config::{ConversionConfig, ConversionConfigBuilder};

pub use conversions::{ConversionOutput, HeightmapPipeline, OutputPaths};
