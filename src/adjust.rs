//! Linear pixel-intensity transforms and their randomized parameters.

use image::RgbImage;
use rand::Rng;
use rayon::prelude::*;

/// Adjustment parameters for one session iteration.
///
/// The two values are sampled independently and never composed: the contrast
/// factor drives only the contrast-adjusted variant, the brightness offset
/// only the brightness-adjusted variant.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Adjustments {
    /// Multiplicative factor in `[0.5, 2.0)`.
    pub contrast: f32,
    /// Additive offset in `[-100, 100]`.
    pub brightness: i32,
}

impl Adjustments {
    /// Samples a fresh parameter pair from `rng`.
    ///
    /// The RNG is caller-supplied so tests can drive the transforms with
    /// deterministic values.
    pub fn sample<R: Rng>(rng: &mut R) -> Self {
        Self {
            contrast: rng.random_range(0.5..2.0),
            brightness: rng.random_range(-100..=100),
        }
    }
}

/// Contrast adjustment: `clamp(round(v * factor), 0, 255)` applied to every
/// channel byte of every pixel. The source image is left untouched.
pub fn adjust_contrast(image: &RgbImage, factor: f32) -> RgbImage {
    map_bytes(image, |v| (v as f32 * factor).round().clamp(0.0, 255.0) as u8)
}

/// Brightness adjustment: `clamp(v + offset, 0, 255)` applied to every
/// channel byte of every pixel. The source image is left untouched.
pub fn adjust_brightness(image: &RgbImage, offset: i32) -> RgbImage {
    map_bytes(image, |v| (v as i32 + offset).clamp(0, 255) as u8)
}

// Both transforms act on each channel byte independently, so they reduce to
// one parallel map over the raw buffer.
fn map_bytes<F>(image: &RgbImage, f: F) -> RgbImage
where
    F: Fn(u8) -> u8 + Send + Sync,
{
    let (width, height) = image.dimensions();
    let mut buffer = image.as_raw().clone();
    buffer.par_iter_mut().for_each(|v| *v = f(*v));
    RgbImage::from_raw(width, height, buffer)
        .expect("byte-wise map preserves the buffer length")
}
