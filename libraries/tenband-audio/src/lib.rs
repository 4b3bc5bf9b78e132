//! Tenband Audio
//!
//! The 10-band equalizer engine: codec adapters, spectral transform, band
//! gain model, both equalization strategies, and the processing session.
//!
//! This crate provides:
//! - Audio decoding via Symphonia (MP3, FLAC, OGG, WAV) into interleaved
//!   signed-integer buffers that preserve rate, channels, and sample width
//! - A frequency-domain equalizer (FFT masking) and a time-domain equalizer
//!   (filter-cascade overlay), both behind the `Equalizer` trait
//! - WAV export via hound and mp3/flac/ogg export via an injected FFmpeg
//!   boundary
//! - A `Session` state machine tying decode → process → export together
//!
//! # Example: one full pass
//!
//! ```rust,no_run
//! use tenband_audio::{Session, SpectralEqualizer, SymphoniaDecoder, WavEncoder};
//! use tenband_core::{ExportFormat, GainVector};
//! use std::path::Path;
//!
//! # fn example() -> tenband_core::Result<()> {
//! let mut session = Session::new();
//! let mut decoder = SymphoniaDecoder::new();
//! session.load(&mut decoder, Path::new("/music/song.mp3"))?;
//!
//! // Cut the 1-2 kHz band by 4 notches
//! let gains = GainVector::new([0.0, 0.0, 0.0, 0.0, 0.0, -4.0, 0.0, 0.0, 0.0, 0.0])?;
//! let mut eq = SpectralEqualizer::new();
//! session.process(&mut eq, &gains)?;
//!
//! let bytes = session.export(&WavEncoder::new(), ExportFormat::Wav)?;
//! # let _ = bytes;
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]

pub mod bands;
pub mod codec;
pub mod engine;
pub mod session;
pub mod spectral;
pub mod spectrum;
pub mod test_utils;

pub use codec::{FfmpegEncoder, SymphoniaDecoder, WavEncoder};
pub use engine::{CascadeEqualizer, SpectralEqualizer};
pub use session::{Session, SessionState};
pub use spectral::SpectralTransform;
pub use spectrum::{magnitude_spectrum, Spectrum};
