//! Silence detection over quantized frames

use serde::{Deserialize, Serialize};

use crate::constants::QUANTIZE_SCALE;

/// Rule deciding when a quantized frame is sent as a silent packet
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
#[serde(tag = "mode", rename_all = "snake_case")]
pub enum SilencePolicy {
    /// Every quantized sample is exactly zero
    #[default]
    DigitalZero,
    /// RMS level strictly below `threshold` dBFS
    BelowDbfs { threshold: f32 },
}

impl SilencePolicy {
    pub fn is_silent(&self, quantized: &[i16]) -> bool {
        match *self {
            SilencePolicy::DigitalZero => is_silent(quantized),
            SilencePolicy::BelowDbfs { threshold } => {
                is_silent(quantized) || dbfs(quantized) < threshold
            }
        }
    }
}

/// True iff every sample is exactly zero
pub fn is_silent(quantized: &[i16]) -> bool {
    quantized.iter().all(|&q| q == 0)
}

/// RMS level in dBFS relative to full scale (32767)
///
/// Returns negative infinity for an all-zero or empty frame.
pub fn dbfs(quantized: &[i16]) -> f32 {
    if quantized.is_empty() {
        return f32::NEG_INFINITY;
    }
    let sum_sq: f64 = quantized.iter().map(|&q| (q as f64) * (q as f64)).sum();
    let rms = (sum_sq / quantized.len() as f64).sqrt();
    (20.0 * (rms / QUANTIZE_SCALE as f64).log10()) as f32
}
