//! Edge filter kernels and their gain calibration.
//!
//! Sobel kernels of aperture `k` are separable: the derivative taps are
//! binomial(k - 2) convolved with `[-1, 1]`, the smoothing taps are
//! binomial(k - 1). Aperture `-1` (and the Scharr family) uses the 3×3
//! Scharr operator, derivative `[-1, 0, 1]` and smoothing `[3, 10, 3]`.

use std::fmt;
use std::str::FromStr;

use crate::image_pipeline::common::error::ConversionError;

/// Gradient operator family.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum EdgeFilter {
    /// Separable smoothing-derivative filter of the selected aperture
    #[default]
    Sobel,
    /// 3×3 Scharr operator, better rotational symmetry than Sobel
    Scharr,
}

/// Kernel aperture, restricted to the sizes the gain is calibrated for.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum KernelSize {
    /// `-1`: fixed 3×3 Scharr aperture
    Scharr3,
    #[default]
    K3,
    K5,
    K7,
    K9,
}

impl KernelSize {
    pub const ALL: [KernelSize; 5] = [
        KernelSize::Scharr3,
        KernelSize::K3,
        KernelSize::K5,
        KernelSize::K7,
        KernelSize::K9,
    ];

    /// The raw selector value: -1, 3, 5, 7 or 9.
    pub fn value(self) -> i32 {
        match self {
            KernelSize::Scharr3 => -1,
            KernelSize::K3 => 3,
            KernelSize::K5 => 5,
            KernelSize::K7 => 7,
            KernelSize::K9 => 9,
        }
    }

    /// Number of taps per axis.
    pub fn aperture(self) -> usize {
        match self {
            KernelSize::Scharr3 => 3,
            other => other.value() as usize,
        }
    }
}

impl TryFrom<i32> for KernelSize {
    type Error = ConversionError;

    fn try_from(value: i32) -> Result<Self, Self::Error> {
        KernelSize::ALL
            .into_iter()
            .find(|k| k.value() == value)
            .ok_or(ConversionError::InvalidKernelSize(value))
    }
}

impl FromStr for KernelSize {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let value: i32 = s
            .trim()
            .parse()
            .map_err(|e| format!("'{s}' is not an integer: {e}"))?;
        KernelSize::try_from(value).map_err(|e| e.to_string())
    }
}

impl fmt::Display for KernelSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value())
    }
}

/// Gain applied to both gradients so slopes read the same for every aperture.
///
/// Fitted, not derived from the taps: `512 * 0.25^k`, and `1.0` for `-1`.
pub fn gain(kernel_size: KernelSize) -> f32 {
    match kernel_size {
        KernelSize::Scharr3 => 1.0,
        k => 512.0 * 0.25f32.powi(k.value()),
    }
}

/// A pair of 1D tap vectors; the 2D kernel is their outer product.
#[derive(Debug, Clone, PartialEq)]
pub struct SeparableKernel {
    /// Taps applied along the derivative axis
    pub derivative: Vec<f32>,
    /// Taps applied along the other axis
    pub smoothing: Vec<f32>,
}

impl SeparableKernel {
    pub fn new(filter: EdgeFilter, kernel_size: KernelSize) -> Self {
        match (filter, kernel_size) {
            (EdgeFilter::Scharr, _) | (_, KernelSize::Scharr3) => Self::scharr(),
            (EdgeFilter::Sobel, k) => Self::sobel(k.aperture()),
        }
    }

    fn scharr() -> Self {
        Self {
            derivative: vec![-1.0, 0.0, 1.0],
            smoothing: vec![3.0, 10.0, 3.0],
        }
    }

    fn sobel(aperture: usize) -> Self {
        let derivative = difference(&binomial(aperture - 2));
        let smoothing = binomial(aperture - 1);
        Self {
            derivative: derivative.into_iter().map(|v| v as f32).collect(),
            smoothing: smoothing.into_iter().map(|v| v as f32).collect(),
        }
    }

    pub fn radius(&self) -> usize {
        self.derivative.len() / 2
    }
}

/// Row `n` of Pascal's triangle.
fn binomial(n: usize) -> Vec<i64> {
    let mut row = vec![1i64];
    for _ in 0..n {
        let mut next = vec![1i64; row.len() + 1];
        for i in 1..row.len() {
            next[i] = row[i - 1] + row[i];
        }
        row = next;
    }
    row
}

/// Convolve with `[-1, 1]`: `out[i] = taps[i - 1] - taps[i]`, zero padded.
fn difference(taps: &[i64]) -> Vec<i64> {
    (0..=taps.len())
        .map(|i| {
            let prev = if i == 0 { 0 } else { taps[i - 1] };
            let cur = taps.get(i).copied().unwrap_or(0);
            prev - cur
        })
        .collect()
}
