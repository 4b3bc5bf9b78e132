//! Time-domain equalizer: per-band filter cascades overlaid on the original
//!
//! For each band the original signal is band-limited by a low-pass biquad
//! at the band's upper edge followed by a high-pass biquad at its lower
//! edge, then scaled and added onto an accumulator that starts as the
//! unmodified signal. The broadband original is always present at full
//! level; gains only add or subtract band-limited copies on top.
//!
//! The slider value is read directly as a dB offset and the overlay
//! contribution is scaled by `10^(g/20) - 1`: zero gain contributes exactly
//! nothing (an all-zero gain vector returns the input unchanged), positive
//! gain pushes the band toward the dB target, negative gain subtracts band
//! energy.

use super::{merge_channels, split_channels};
use std::f64::consts::{FRAC_1_SQRT_2, PI};
use tenband_core::{AudioBuffer, Equalizer, GainVector, Result, BANDS};
use tracing::debug;

/// Keep cutoffs comfortably below Nyquist to avoid coefficient blow-up
const MAX_CUTOFF_RATIO: f64 = 0.45;

/// Direct-form-I biquad for one channel
///
/// RBJ cookbook coefficients, Butterworth Q. Second order is enough for the
/// overlay model: attenuation is monotonic outside the pass window, which
/// is all the band split requires.
#[derive(Debug, Clone)]
struct Biquad {
    b0: f64,
    b1: f64,
    b2: f64,
    a1: f64,
    a2: f64,
    x1: f64,
    x2: f64,
    y1: f64,
    y2: f64,
}

impl Biquad {
    fn from_normalized(b0: f64, b1: f64, b2: f64, a0: f64, a1: f64, a2: f64) -> Self {
        Self {
            b0: b0 / a0,
            b1: b1 / a0,
            b2: b2 / a0,
            a1: a1 / a0,
            a2: a2 / a0,
            x1: 0.0,
            x2: 0.0,
            y1: 0.0,
            y2: 0.0,
        }
    }

    fn low_pass(sample_rate: f64, cutoff_hz: f64) -> Self {
        let omega = 2.0 * PI * cutoff_hz.min(sample_rate * MAX_CUTOFF_RATIO) / sample_rate;
        let (sin_omega, cos_omega) = omega.sin_cos();
        let alpha = sin_omega / (2.0 * FRAC_1_SQRT_2);

        let b1 = 1.0 - cos_omega;
        let b0 = b1 / 2.0;
        Self::from_normalized(b0, b1, b0, 1.0 + alpha, -2.0 * cos_omega, 1.0 - alpha)
    }

    fn high_pass(sample_rate: f64, cutoff_hz: f64) -> Self {
        let omega = 2.0 * PI * cutoff_hz.min(sample_rate * MAX_CUTOFF_RATIO) / sample_rate;
        let (sin_omega, cos_omega) = omega.sin_cos();
        let alpha = sin_omega / (2.0 * FRAC_1_SQRT_2);

        let b1 = -(1.0 + cos_omega);
        let b0 = -b1 / 2.0;
        Self::from_normalized(b0, b1, b0, 1.0 + alpha, -2.0 * cos_omega, 1.0 - alpha)
    }

    #[inline]
    fn process(&mut self, x: f64) -> f64 {
        let y = self.b0 * x + self.b1 * self.x1 + self.b2 * self.x2
            - self.a1 * self.y1
            - self.a2 * self.y2;
        self.x2 = self.x1;
        self.x1 = x;
        self.y2 = self.y1;
        self.y1 = y;
        y
    }

    fn run(&mut self, signal: &[f64]) -> Vec<f64> {
        signal.iter().map(|&x| self.process(x)).collect()
    }
}

/// 10-band time-domain equalizer (additive overlay model)
pub struct CascadeEqualizer;

impl CascadeEqualizer {
    /// Create a cascade equalizer
    pub fn new() -> Self {
        Self
    }

    /// Overlay scale for a slider value read as a dB offset
    fn overlay_scale(slider_db: f64) -> f64 {
        10f64.powf(slider_db / 20.0) - 1.0
    }
}

impl Default for CascadeEqualizer {
    fn default() -> Self {
        Self::new()
    }
}

impl Equalizer for CascadeEqualizer {
    fn process(&mut self, buffer: &AudioBuffer, gains: &GainVector) -> Result<AudioBuffer> {
        let sample_rate = f64::from(buffer.format.sample_rate);
        let originals = split_channels(buffer);
        let mut accumulators = originals.clone();

        for (band_index, band) in BANDS.iter().enumerate() {
            let slider = gains.get(band_index).unwrap_or(0.0);
            if slider == 0.0 {
                continue;
            }
            let scale = Self::overlay_scale(slider);
            debug!(band = band_index, slider, scale, "overlaying band");

            for (original, accumulator) in originals.iter().zip(accumulators.iter_mut()) {
                // Fresh filter state per band and channel: every band copy
                // derives from the original signal, not from a previous
                // band's output
                let low_passed = Biquad::low_pass(sample_rate, band.high_hz).run(original);
                let band_copy = Biquad::high_pass(sample_rate, band.low_hz).run(&low_passed);
                for (acc, sample) in accumulator.iter_mut().zip(band_copy) {
                    *acc += sample * scale;
                }
            }
        }

        let samples = merge_channels(&accumulators, buffer.format.width);
        AudioBuffer::new(samples, buffer.format)
    }

    fn name(&self) -> &str {
        "10-Band Cascade EQ"
    }
}
