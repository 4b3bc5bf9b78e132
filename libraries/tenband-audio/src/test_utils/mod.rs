//! Test signal generation and analysis helpers
//!
//! Deterministic signals and simple level metrics used across the engine's
//! test suites. Public so downstream callers can reuse them in their own
//! verification.

use std::f64::consts::PI;
use tenband_core::{AudioBuffer, AudioFormat, SampleWidth};

/// Generate a 16-bit sine-tone buffer
///
/// # Arguments
/// * `frequency` - Tone frequency in Hz
/// * `sample_rate` - Sample rate in Hz
/// * `duration` - Duration in seconds
/// * `channels` - Channel count; the tone is identical on every channel
/// * `amplitude` - Peak amplitude as a fraction of full scale (0.0 to 1.0)
pub fn sine_buffer(
    frequency: f64,
    sample_rate: u32,
    duration: f64,
    channels: u16,
    amplitude: f64,
) -> AudioBuffer {
    let width = SampleWidth::Two;
    let frames = (f64::from(sample_rate) * duration) as usize;
    let peak = amplitude * (width.full_scale() - 1.0);

    let mut samples = Vec::with_capacity(frames * channels as usize);
    for i in 0..frames {
        let t = i as f64 / f64::from(sample_rate);
        let sample = width.clamp((2.0 * PI * frequency * t).sin() * peak);
        for _ in 0..channels {
            samples.push(sample);
        }
    }

    AudioBuffer::new(samples, AudioFormat::new(sample_rate, channels, width))
        .expect("whole frames by construction")
}

/// RMS level of integer samples (mono or interleaved)
pub fn rms(samples: &[i32]) -> f64 {
    if samples.is_empty() {
        return 0.0;
    }
    let sum_squares: f64 = samples.iter().map(|&s| f64::from(s) * f64::from(s)).sum();
    (sum_squares / samples.len() as f64).sqrt()
}

/// Peak absolute level of integer samples
pub fn peak(samples: &[i32]) -> i32 {
    samples.iter().map(|&s| s.abs()).max().unwrap_or(0)
}
