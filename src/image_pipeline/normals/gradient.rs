//! Separable image gradients with reflected borders.
//!
//! Each gradient is a row pass followed by a column pass. Out-of-range taps
//! mirror around the edge sample without repeating it
//! (`gfedcb|abcdefgh|gfedcba`).
//!
//! Complexity: O(W·H·k) per gradient; memory: one scratch plane.
use crate::image_pipeline::channels::ChannelPlane;
use crate::image_pipeline::normals::kernel::SeparableKernel;

/// Horizontal and vertical gradients of a height plane.
#[derive(Debug, Clone)]
pub struct GradientPair {
    /// Rate of change along x
    pub gx: ChannelPlane,
    /// Rate of change along y
    pub gy: ChannelPlane,
}

/// Compute both gradients of `plane`, each halved.
pub fn gradients(plane: &ChannelPlane, kernel: &SeparableKernel) -> GradientPair {
    let mut gx = correlate_separable(plane, &kernel.derivative, &kernel.smoothing);
    let mut gy = correlate_separable(plane, &kernel.smoothing, &kernel.derivative);
    gx.map_in_place(|v| v * 0.5);
    gy.map_in_place(|v| v * 0.5);
    GradientPair { gx, gy }
}

#[inline]
fn reflect_101(pos: isize, len: usize) -> usize {
    if len == 1 {
        return 0;
    }
    let last = len as isize - 1;
    let mut p = pos;
    while p < 0 || p > last {
        p = if p < 0 { -p } else { 2 * last - p };
    }
    p as usize
}

fn correlate_separable(plane: &ChannelPlane, row_taps: &[f32], col_taps: &[f32]) -> ChannelPlane {
    let w = plane.width;
    let h = plane.height;
    let mut scratch = ChannelPlane::filled(w, h, 0.0);
    let mut out = ChannelPlane::filled(w, h, 0.0);

    if w == 0 || h == 0 {
        return out;
    }

    let row_radius = (row_taps.len() / 2) as isize;
    for y in 0..h {
        let src = plane.row(y);
        let dst = &mut scratch.data[y * w..(y + 1) * w];
        for (x, out_px) in dst.iter_mut().enumerate() {
            let mut sum = 0.0;
            for (i, &tap) in row_taps.iter().enumerate() {
                let xx = reflect_101(x as isize + i as isize - row_radius, w);
                sum += tap * src[xx];
            }
            *out_px = sum;
        }
    }

    let col_radius = (col_taps.len() / 2) as isize;
    for y in 0..h {
        let rows: Vec<&[f32]> = (0..col_taps.len())
            .map(|j| scratch.row(reflect_101(y as isize + j as isize - col_radius, h)))
            .collect();
        let dst = &mut out.data[y * w..(y + 1) * w];
        for (x, out_px) in dst.iter_mut().enumerate() {
            *out_px = rows
                .iter()
                .zip(col_taps)
                .map(|(row, &tap)| tap * row[x])
                .sum();
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::image_pipeline::normals::kernel::{EdgeFilter, KernelSize};

    fn ramp_x(w: usize, h: usize, slope: f32) -> ChannelPlane {
        let data = (0..h)
            .flat_map(|_| (0..w).map(move |x| x as f32 * slope))
            .collect();
        ChannelPlane::from_vec(w, h, data)
    }

    #[test]
    fn test_reflect_101_borders() {
        assert_eq!(reflect_101(-1, 5), 1);
        assert_eq!(reflect_101(-2, 5), 2);
        assert_eq!(reflect_101(5, 5), 3);
        assert_eq!(reflect_101(6, 5), 2);
        assert_eq!(reflect_101(3, 5), 3);
        assert_eq!(reflect_101(-4, 1), 0);
        assert_eq!(reflect_101(-4, 2), 0);
        assert_eq!(reflect_101(5, 2), 1);
    }

    #[test]
    fn test_flat_plane_has_zero_gradients() {
        let plane = ChannelPlane::filled(6, 5, 0.7);
        for k in KernelSize::ALL {
            let kernel = SeparableKernel::new(EdgeFilter::Sobel, k);
            let g = gradients(&plane, &kernel);
            assert!(g.gx.data.iter().all(|&v| v.abs() < 1e-3), "k={k}");
            assert!(g.gy.data.iter().all(|&v| v.abs() < 1e-3), "k={k}");
        }
    }

    #[test]
    fn test_sobel_3_on_unit_ramp_interior() {
        let plane = ramp_x(8, 8, 1.0);
        let kernel = SeparableKernel::new(EdgeFilter::Sobel, KernelSize::K3);
        let g = gradients(&plane, &kernel);

        // [-1, 0, 1] * 2 along x, [1, 2, 1] sums to 4 along y, halved.
        assert!((g.gx.get(4, 4) - 4.0).abs() < 1e-5);
        assert!(g.gy.get(4, 4).abs() < 1e-5);
    }

    #[test]
    fn test_reflected_border_cancels_edge_gradient() {
        let plane = ramp_x(8, 4, 1.0);
        let kernel = SeparableKernel::new(EdgeFilter::Sobel, KernelSize::K3);
        let g = gradients(&plane, &kernel);

        assert!(g.gx.get(0, 2).abs() < 1e-5);
        assert!(g.gx.get(7, 2).abs() < 1e-5);
    }

    #[test]
    fn test_vertical_ramp_is_transpose() {
        let data = (0..6)
            .flat_map(|y| (0..6).map(move |_| y as f32))
            .collect();
        let plane = ChannelPlane::from_vec(6, 6, data);
        let kernel = SeparableKernel::new(EdgeFilter::Scharr, KernelSize::K3);
        let g = gradients(&plane, &kernel);

        // [-1, 0, 1] * 2 along y, [3, 10, 3] sums to 16 along x, halved.
        assert!((g.gy.get(3, 3) - 16.0).abs() < 1e-4);
        assert!(g.gx.get(3, 3).abs() < 1e-5);
    }

    #[test]
    fn test_gain_calibrated_slope_is_aperture_independent() {
        use crate::image_pipeline::normals::kernel::gain;

        let plane = ramp_x(24, 24, 0.01);
        let reference = {
            let kernel = SeparableKernel::new(EdgeFilter::Sobel, KernelSize::K3);
            gradients(&plane, &kernel).gx.get(12, 12) * gain(KernelSize::K3)
        };
        for k in [KernelSize::K5, KernelSize::K7, KernelSize::K9] {
            let kernel = SeparableKernel::new(EdgeFilter::Sobel, k);
            let calibrated = gradients(&plane, &kernel).gx.get(12, 12) * gain(k);
            assert!((calibrated - reference).abs() < 1e-3, "k={k}");
        }
    }

    #[test]
    fn test_empty_plane() {
        let plane = ChannelPlane::filled(0, 0, 0.0);
        let kernel = SeparableKernel::new(EdgeFilter::Sobel, KernelSize::K5);
        let g = gradients(&plane, &kernel);
        assert!(g.gx.data.is_empty());
        assert!(g.gy.data.is_empty());
    }
}
