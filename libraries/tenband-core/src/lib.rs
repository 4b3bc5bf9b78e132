//! Tenband Core
//!
//! Platform-agnostic core types, traits, and error handling for the Tenband
//! 10-band equalizer engine.
//!
//! This crate provides the foundational building blocks shared by the engine
//! and any caller embedding it:
//! - **Domain Types**: `AudioBuffer`, `AudioFormat`, `SampleWidth`,
//!   `GainVector`, `Band`, `ExportFormat`
//! - **Capability Traits**: `AudioDecoder`, `AudioEncoder`, `Equalizer`
//! - **Error Handling**: Unified `TenbandError` and `Result` types
//!
//! # Example
//!
//! ```rust
//! use tenband_core::{AudioBuffer, AudioFormat, GainVector, SampleWidth, BANDS};
//!
//! // A tenth of a second of 16-bit mono silence
//! let format = AudioFormat::new(44100, 1, SampleWidth::Two);
//! let buffer = AudioBuffer::new(vec![0; 4410], format).unwrap();
//! assert_eq!(buffer.frames(), 4410);
//!
//! // One gain control per fixed band
//! let gains = GainVector::flat();
//! assert_eq!(gains.len(), BANDS.len());
//! ```

#![forbid(unsafe_code)]

pub mod error;
pub mod traits;
pub mod types;

// Re-export commonly used types
pub use error::{Result, TenbandError};
pub use traits::{AudioDecoder, AudioEncoder, DecodedMetadata, Equalizer};
pub use types::{AudioBuffer, AudioFormat, Band, ExportFormat, GainVector, SampleWidth, BANDS};
