//! Float <-> 16-bit sample quantization
//!
//! Samples are clamped to `[-1.0, 1.0]` before scaling by 32767, so
//! quantization never produces `i16::MIN`. `NaN` maps to `0`.

use crate::constants::QUANTIZE_SCALE;

/// Largest round-trip error of `dequantize(quantize(s))` for `s` in `[-1, 1]`
pub const QUANTIZE_TOLERANCE: f32 = 1.0 / QUANTIZE_SCALE;

/// Quantize one normalized sample
#[inline]
pub fn quantize(sample: f32) -> i16 {
    // `as` saturates and maps NaN to 0
    (sample.clamp(-1.0, 1.0) * QUANTIZE_SCALE).round() as i16
}

/// Back to a normalized sample
#[inline]
pub fn dequantize(quantized: i16) -> f32 {
    quantized as f32 / QUANTIZE_SCALE
}

/// Quantize a whole sample slice
pub fn quantize_frame(samples: &[f32]) -> Vec<i16> {
    samples.iter().map(|&s| quantize(s)).collect()
}

/// Dequantize a whole sample slice
pub fn dequantize_frame(quantized: &[i16]) -> Vec<f32> {
    quantized.iter().map(|&q| dequantize(q)).collect()
}
