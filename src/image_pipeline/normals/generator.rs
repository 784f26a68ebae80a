use tracing::debug;

use crate::image_pipeline::channels::ChannelPlane;
use crate::image_pipeline::normals::gradient::gradients;
use crate::image_pipeline::normals::kernel::{SeparableKernel, gain};
use crate::image_pipeline::normals::types::{NormalMap, NormalMapOptions, ZRange};

/// Unit surface normal for calibrated gradients `(gx, gy)`.
///
/// The vector is `(-gx, gy, 1)` normalized. Z is always positive.
#[inline]
pub fn surface_normal(gx: f32, gy: f32) -> [f32; 3] {
    let (x, y, z) = (-gx, gy, 1.0f32);
    let norm = (x * x + y * y + z * z).sqrt();
    [x / norm, y / norm, z / norm]
}

/// Remap a unit normal into bytes.
///
/// Components go from [-1, 1] to [0, 1]; with [`ZRange::Full`] Z is then
/// mapped back to [-1, 1]. Each value is scaled by 255 and truncated.
#[inline]
pub fn encode_normal(normal: [f32; 3], z_range: ZRange) -> [u8; 3] {
    let mut v = normal.map(|c| c * 0.5 + 0.5);
    if z_range == ZRange::Full {
        v[2] = (v[2] - 0.5) * 2.0;
    }
    v.map(|c| (c * 255.0) as u8)
}

/// Build the quantized normal map of `heights`.
pub fn generate_normal_map(heights: &ChannelPlane, options: &NormalMapOptions) -> NormalMap {
    let kernel = SeparableKernel::new(options.filter, options.kernel_size);
    let gain = gain(options.kernel_size);

    debug!(
        kernel_size = options.kernel_size.value(),
        filter = ?options.filter,
        z_range = ?options.z_range,
        gain,
        "Generating normal map"
    );

    let grad = gradients(heights, &kernel);

    let data = grad
        .gx
        .data
        .iter()
        .zip(&grad.gy.data)
        .flat_map(|(&gx, &gy)| {
            let normal = surface_normal(gx * gain, gy * gain);
            encode_normal(normal, options.z_range)
        })
        .collect();

    NormalMap {
        width: heights.width,
        height: heights.height,
        data,
    }
}
