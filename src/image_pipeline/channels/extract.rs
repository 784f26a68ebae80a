use tracing::debug;

use crate::image_pipeline::channels::types::{ChannelPlane, ChannelPlanes};
use crate::image_pipeline::source::SourceImage;

/// Exponent of the power-law sRGB approximation.
pub const SRGB_GAMMA: f32 = 2.2;

const BYTE_MAX: f32 = 255.0;

#[inline]
pub fn srgb_to_linear(v: f32) -> f32 {
    v.powf(SRGB_GAMMA)
}

/// Split `image` into normalized height/green/blue/alpha planes.
///
/// With `srgb` set, all four planes (alpha included) go through
/// [`srgb_to_linear`].
pub fn extract_channels(image: &SourceImage, srgb: bool) -> ChannelPlanes {
    let mut planes = match image {
        SourceImage::Luminance {
            width,
            height,
            data,
        } => extract_luminance(*width, *height, data),
        SourceImage::Rgba {
            width,
            height,
            data,
        } => extract_rgba(*width, *height, data),
    };

    log_maxima("Max values before conversion", &planes);

    if srgb {
        for plane in planes.planes_mut() {
            plane.map_in_place(srgb_to_linear);
        }
        log_maxima("Max values after sRGB conversion", &planes);
    }

    planes
}

fn extract_luminance(width: usize, height: usize, data: &[u8]) -> ChannelPlanes {
    let values = data.iter().map(|&v| v as f32 / BYTE_MAX).collect();
    ChannelPlanes {
        height: ChannelPlane::from_vec(width, height, values),
        green: ChannelPlane::filled(width, height, 0.0),
        blue: ChannelPlane::filled(width, height, 0.0),
        alpha: ChannelPlane::filled(width, height, 1.0),
    }
}

fn extract_rgba(width: usize, height: usize, data: &[u8]) -> ChannelPlanes {
    let channel = |offset: usize| {
        let values = data
            .chunks_exact(4)
            .map(|px| px[offset] as f32 / BYTE_MAX)
            .collect();
        ChannelPlane::from_vec(width, height, values)
    };

    ChannelPlanes {
        height: channel(0),
        green: channel(1),
        blue: channel(2),
        alpha: channel(3),
    }
}

/// Replace every sample `v` of every plane with `floor + v * scale`.
pub fn adjust_channels(planes: &mut ChannelPlanes, floor: f32, scale: f32) {
    for plane in planes.planes_mut() {
        plane.map_in_place(|v| floor + v * scale);
    }
}

fn log_maxima(label: &str, planes: &ChannelPlanes) {
    debug!(
        r = planes.height.max(),
        g = planes.green.max(),
        b = planes.blue.max(),
        a = planes.alpha.max(),
        "{label}"
    );
}
