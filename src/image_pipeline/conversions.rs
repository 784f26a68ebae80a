//! Pipeline conversions module
//!
//! This module contains orchestration logic for the image to heightmap conversion.

mod heightmap;


pub use heightmap::{ConversionOutput, HeightmapPipeline, OutputPaths, output_paths};
