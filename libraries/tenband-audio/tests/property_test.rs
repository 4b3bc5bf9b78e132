//! Property-based tests for the engine's core guarantees

use proptest::prelude::*;
use tenband_audio::bands::{band_mask, gain_to_factor};
use tenband_audio::{CascadeEqualizer, SpectralEqualizer, SpectralTransform};
use tenband_core::{AudioBuffer, AudioFormat, Equalizer, GainVector, SampleWidth, BANDS};

fn buffer_from(samples: Vec<i16>, channels: u16) -> AudioBuffer {
    let mut padded: Vec<i32> = samples.into_iter().map(i32::from).collect();
    // Trim to whole frames
    padded.truncate(padded.len() - padded.len() % channels as usize);
    AudioBuffer::new(padded, AudioFormat::new(44100, channels, SampleWidth::Two)).unwrap()
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]

    #[test]
    fn flat_gains_leave_cascade_output_unchanged(
        samples in prop::collection::vec(any::<i16>(), 2..2048),
        channels in 1u16..4,
    ) {
        let buffer = buffer_from(samples, channels);
        let out = CascadeEqualizer::new()
            .process(&buffer, &GainVector::flat())
            .unwrap();
        prop_assert_eq!(out, buffer);
    }

    #[test]
    fn flat_gains_keep_spectral_output_within_one_step(
        samples in prop::collection::vec(any::<i16>(), 2..2048),
        channels in 1u16..4,
    ) {
        let buffer = buffer_from(samples, channels);
        let out = SpectralEqualizer::new()
            .process(&buffer, &GainVector::flat())
            .unwrap();
        prop_assert_eq!(out.format, buffer.format);
        for (a, b) in out.samples.iter().zip(buffer.samples.iter()) {
            prop_assert!((a - b).abs() <= 1, "{} vs {}", a, b);
        }
    }

    #[test]
    fn factors_are_finite_and_positive(slider in -10.0f64..=10.0) {
        let factor = gain_to_factor(slider * 10.0);
        prop_assert!(factor.is_finite());
        prop_assert!(factor > 0.0);
    }

    #[test]
    fn factor_is_monotonic_in_the_boost_range(a in 0.0f64..=100.0, b in 0.0f64..=100.0) {
        let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
        prop_assert!(gain_to_factor(lo) <= gain_to_factor(hi));
    }

    #[test]
    fn every_audible_frequency_lands_in_some_band(n in 64usize..4096) {
        let axis = SpectralTransform::frequency_axis(n, 44100);
        let masks: Vec<Vec<bool>> = BANDS.iter().map(|b| band_mask(&axis, b)).collect();
        for (k, &f) in axis.iter().enumerate() {
            if (20.0..=20000.0).contains(&f) {
                prop_assert!(masks.iter().any(|m| m[k]), "bin {} at {} Hz uncovered", k, f);
            }
        }
    }
}
