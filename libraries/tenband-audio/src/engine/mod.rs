//! The two equalization strategies
//!
//! `CascadeEqualizer` band-limits the signal with filter cascades and
//! overlays gain-scaled band copies onto the original (additive model).
//! `SpectralEqualizer` multiplies transform bins by per-band factors
//! (masking model). They are independently specified algorithms with
//! different numerics, not interchangeable implementations; both preserve
//! frame count, channel count, sample rate, and sample width, and both clip
//! their output to the buffer's integer width.

mod cascade;
mod masking;

pub use cascade::CascadeEqualizer;
pub use masking::SpectralEqualizer;

use tenband_core::{AudioBuffer, SampleWidth};

/// De-interleave a buffer into one f64 signal per channel
///
/// Sample values stay in integer units; the engines' linear operators do
/// not care about normalization and skipping it keeps the zero-gain paths
/// bit-exact.
pub(crate) fn split_channels(buffer: &AudioBuffer) -> Vec<Vec<f64>> {
    let channels = buffer.format.channels as usize;
    let frames = buffer.frames();
    let mut split = vec![Vec::with_capacity(frames); channels];
    for (i, &sample) in buffer.samples.iter().enumerate() {
        split[i % channels].push(f64::from(sample));
    }
    split
}

/// Re-interleave per-channel signals, clipping each sample to the width
pub(crate) fn merge_channels(channels: &[Vec<f64>], width: SampleWidth) -> Vec<i32> {
    let frames = channels.first().map_or(0, Vec::len);
    let mut samples = Vec::with_capacity(frames * channels.len());
    for frame in 0..frames {
        for channel in channels {
            samples.push(width.clamp(channel[frame]));
        }
    }
    samples
}

#[cfg(test)]
mod tests {
    use super::*;
    use tenband_core::AudioFormat;

    #[test]
    fn split_and_merge_round_trip() {
        let format = AudioFormat::new(44100, 2, SampleWidth::Two);
        let buffer = AudioBuffer::new(vec![1, -1, 2, -2, 3, -3], format).unwrap();

        let split = split_channels(&buffer);
        assert_eq!(split.len(), 2);
        assert_eq!(split[0], vec![1.0, 2.0, 3.0]);
        assert_eq!(split[1], vec![-1.0, -2.0, -3.0]);

        let merged = merge_channels(&split, SampleWidth::Two);
        assert_eq!(merged, buffer.samples);
    }

    #[test]
    fn merge_clips_to_width() {
        let merged = merge_channels(&[vec![1e9, -1e9]], SampleWidth::Two);
        assert_eq!(merged, vec![32767, -32768]);
    }
}
