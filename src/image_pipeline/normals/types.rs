//! Normal map types

use crate::image_pipeline::normals::kernel::{EdgeFilter, KernelSize};

/// Encoding convention for the Z component.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ZRange {
    /// Z stored like X/Y: [-1, 1] mapped onto [0, 1]
    #[default]
    Half,
    /// Z stored as [-1, 1] directly, X/Y stay half range
    Full,
}

/// Normal map generation settings.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NormalMapOptions {
    pub kernel_size: KernelSize,
    pub filter: EdgeFilter,
    pub z_range: ZRange,
}

/// 8-bit RGB normal map, interleaved [X, Y, Z, X, Y, Z, ...].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NormalMap {
    pub width: usize,
    pub height: usize,
    pub data: Vec<u8>,
}

impl NormalMap {
    #[inline]
    pub fn pixel(&self, x: usize, y: usize) -> [u8; 3] {
        let i = (y * self.width + x) * 3;
        [self.data[i], self.data[i + 1], self.data[i + 2]]
    }
}
