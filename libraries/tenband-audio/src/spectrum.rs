//! Magnitude spectrum diagnostic
//!
//! A read-only reporting surface for callers that want to display what the
//! signal looks like in the frequency domain. Derived purely from the
//! forward transform plus complex magnitude; never written back into the
//! processing pipeline.

use crate::spectral::SpectralTransform;
use tenband_core::AudioBuffer;

/// Frequencies and magnitudes for one transform of a buffer
#[derive(Debug, Clone)]
pub struct Spectrum {
    /// Bin frequencies in Hz (fftfreq order, negative bins in the upper half)
    pub frequencies: Vec<f64>,
    /// Complex magnitude per bin
    pub magnitudes: Vec<f64>,
}

/// Compute the magnitude spectrum of a buffer's channel-averaged mono view
pub fn magnitude_spectrum(buffer: &AudioBuffer) -> Spectrum {
    let channels = buffer.format.channels as usize;
    let frames = buffer.frames();

    let mut mono = vec![0.0f64; frames];
    for (i, &sample) in buffer.samples.iter().enumerate() {
        mono[i / channels] += f64::from(sample) / channels as f64;
    }

    let mut transform = SpectralTransform::new();
    let bins = transform.forward(&mono);
    Spectrum {
        frequencies: SpectralTransform::frequency_axis(frames, buffer.format.sample_rate),
        magnitudes: bins.iter().map(|c| c.norm()).collect(),
    }
}
