//! Channel extraction module
//!
//! Splits a decoded source image into four aligned float planes
//! (height, green, blue, alpha) and applies the optional gamma decode
//! and the floor/scale adjustment.

mod extract;
pub mod types;

pub use extract::{SRGB_GAMMA, adjust_channels, extract_channels, srgb_to_linear};
pub use types::{ChannelPlane, ChannelPlanes};
