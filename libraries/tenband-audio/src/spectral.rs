//! Forward/inverse discrete Fourier transform over one channel
//!
//! Thin wrapper around rustfft that fixes the engine's conventions: real
//! input, complex coefficients, inverse normalized by 1/N with the
//! floating-point imaginary residue discarded, and a frequency axis in
//! fftfreq bin order (non-negative bins first, mirrored negative bins in
//! the upper half). Works for any N; rustfft plans non-power-of-two sizes
//! too.

use rustfft::{num_complex::Complex, FftPlanner};
use tracing::debug;

/// Spectral transform with a cached FFT planner
///
/// One channel at a time: multi-channel callers de-interleave, transform
/// each channel, and re-interleave. The planner re-uses plans across calls
/// of the same length, so repeated passes over one buffer are cheap.
pub struct SpectralTransform {
    planner: FftPlanner<f64>,
}

impl SpectralTransform {
    /// Create a transform with an empty plan cache
    pub fn new() -> Self {
        Self {
            planner: FftPlanner::new(),
        }
    }

    /// Forward DFT: N real samples to N complex coefficients
    pub fn forward(&mut self, samples: &[f64]) -> Vec<Complex<f64>> {
        let n = samples.len();
        let mut bins: Vec<Complex<f64>> =
            samples.iter().map(|&s| Complex::new(s, 0.0)).collect();
        if n > 1 {
            debug!(n, "forward transform");
            self.planner.plan_fft_forward(n).process(&mut bins);
        }
        bins
    }

    /// Inverse DFT: N complex coefficients back to N real samples
    ///
    /// rustfft leaves the inverse unnormalized, so the result is scaled by
    /// 1/N here. The imaginary residue of the round trip is dropped, never
    /// surfaced.
    pub fn inverse(&mut self, bins: &[Complex<f64>]) -> Vec<f64> {
        let n = bins.len();
        let mut work = bins.to_vec();
        if n > 1 {
            self.planner.plan_fft_inverse(n).process(&mut work);
        }
        let scale = if n > 0 { 1.0 / n as f64 } else { 1.0 };
        work.into_iter().map(|c| c.re * scale).collect()
    }

    /// Frequency in Hz for each of the N transform bins
    ///
    /// fftfreq convention: bins below `ceil(N/2)` ascend from 0 to just
    /// under the Nyquist frequency; the remaining bins carry the mirrored
    /// negative frequencies. For even N the Nyquist bin itself sits on the
    /// negative side, so at low sample rates it picks up the mirror factor
    /// of whichever band it lands in.
    pub fn frequency_axis(n: usize, sample_rate: u32) -> Vec<f64> {
        let step = f64::from(sample_rate) / n as f64;
        (0..n)
            .map(|k| {
                if k < n.div_ceil(2) {
                    k as f64 * step
                } else {
                    (k as f64 - n as f64) * step
                }
            })
            .collect()
    }
}

impl Default for SpectralTransform {
    fn default() -> Self {
        Self::new()
    }
}
