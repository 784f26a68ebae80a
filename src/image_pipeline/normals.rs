//! Normal map generation module
//!
//! Derives a tangent-space normal map from a height plane: separable
//! Sobel/Scharr gradients, a per-kernel-size gain calibration, unit normals
//! and 8-bit quantization.

mod generator;
mod gradient;
pub mod kernel;
pub mod types;

pub use generator::{encode_normal, generate_normal_map, surface_normal};
pub use gradient::{GradientPair, gradients};
pub use kernel::{EdgeFilter, KernelSize, SeparableKernel, gain};
pub use types::{NormalMap, NormalMapOptions, ZRange};
