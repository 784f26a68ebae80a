//! Float channel plane types

/// Owned single-channel f32 plane in row-major layout.
#[derive(Debug, Clone, PartialEq)]
pub struct ChannelPlane {
    /// Plane width in pixels
    pub width: usize,
    /// Plane height in pixels
    pub height: usize,
    /// Samples in row-major order, `width * height` long
    pub data: Vec<f32>,
}

impl ChannelPlane {
    /// Plane of `width × height` samples all set to `value`.
    pub fn filled(width: usize, height: usize, value: f32) -> Self {
        Self {
            width,
            height,
            data: vec![value; width * height],
        }
    }

    pub fn from_vec(width: usize, height: usize, data: Vec<f32>) -> Self {
        debug_assert_eq!(data.len(), width * height);
        Self {
            width,
            height,
            data,
        }
    }

    #[inline]
    pub fn get(&self, x: usize, y: usize) -> f32 {
        self.data[y * self.width + x]
    }

    #[inline]
    pub fn row(&self, y: usize) -> &[f32] {
        let start = y * self.width;
        &self.data[start..start + self.width]
    }

    /// Apply `f` to every sample in place.
    pub fn map_in_place(&mut self, f: impl Fn(f32) -> f32) {
        for v in &mut self.data {
            *v = f(*v);
        }
    }

    /// Largest sample, clamped below at zero. Empty planes report zero.
    pub fn max(&self) -> f32 {
        self.data.iter().copied().fold(0.0, f32::max)
    }
}

/// The four planes produced by the extractor, all of identical size.
#[derive(Debug, Clone, PartialEq)]
pub struct ChannelPlanes {
    pub height: ChannelPlane,
    pub green: ChannelPlane,
    pub blue: ChannelPlane,
    pub alpha: ChannelPlane,
}

impl ChannelPlanes {
    pub fn width(&self) -> usize {
        self.height.width
    }

    pub fn rows(&self) -> usize {
        self.height.height
    }

    pub fn planes(&self) -> [&ChannelPlane; 4] {
        [&self.height, &self.green, &self.blue, &self.alpha]
    }

    pub fn planes_mut(&mut self) -> [&mut ChannelPlane; 4] {
        [
            &mut self.height,
            &mut self.green,
            &mut self.blue,
            &mut self.alpha,
        ]
    }

    /// The (R, G, B, A) samples at pixel (x, y).
    #[inline]
    pub fn rgba_at(&self, x: usize, y: usize) -> (f32, f32, f32, f32) {
        (
            self.height.get(x, y),
            self.green.get(x, y),
            self.blue.get(x, y),
            self.alpha.get(x, y),
        )
    }
}
