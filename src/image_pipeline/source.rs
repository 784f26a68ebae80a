//! Source image reading module
//!
//! This module decodes an input file into one of the supported pixel layouts.

mod image_reader;
mod reader;
pub mod types;

pub use image_reader::ImageCrateReader;
pub use reader::SourceImageReader;
pub use types::SourceImage;
