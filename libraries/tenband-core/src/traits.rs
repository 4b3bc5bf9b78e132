/// Capability traits for Tenband
///
/// The engine never talks to codecs or external tools directly; decode and
/// encode are injected capabilities so the numeric core stays testable with
/// no codec toolchain installed. Both equalizer strategies sit behind the
/// `Equalizer` trait and the caller picks the variant.
use crate::error::Result;
use crate::types::{AudioBuffer, ExportFormat, GainVector};
use std::path::Path;

/// Audio decoder capability
///
/// Implementers turn an encoded asset into an interleaved signed-integer
/// `AudioBuffer`, preserving sample rate, channel count, and sample width.
pub trait AudioDecoder: Send {
    /// Decode an audio file from the given path (loads the entire asset)
    ///
    /// # Errors
    /// `UnsupportedFormat` if the container cannot be recognized, `Corrupt`
    /// if it parses but the sample data is invalid.
    fn decode(&mut self, path: &Path) -> Result<AudioBuffer>;

    /// Decode an in-memory asset, with a container/extension hint
    ///
    /// # Errors
    /// Same taxonomy as [`AudioDecoder::decode`].
    fn decode_bytes(&mut self, data: &[u8], container_hint: &str) -> Result<AudioBuffer>;

    /// Check if the decoder supports the given file format
    fn supports_format(&self, path: &Path) -> bool;
}

/// Metadata describing a decoded asset
#[derive(Debug, Clone)]
pub struct DecodedMetadata {
    /// Sample rate in Hz
    pub sample_rate: u32,
    /// Number of channels
    pub channels: u16,
    /// Bits per sample (if the container declares it)
    pub bits_per_sample: Option<u16>,
}

/// Audio encoder capability
///
/// Implementers serialize an `AudioBuffer` into one of the supported export
/// containers. Encoders backed by an external tool surface that tool's
/// failures verbatim as `ExternalTool` errors.
pub trait AudioEncoder: Send {
    /// Encode a buffer into the target container, returning the bytes
    ///
    /// # Errors
    /// `UnsupportedFormat` if the target is outside {mp3, wav, flac, ogg},
    /// `RangeOverflow` if the buffer holds samples that do not fit its
    /// declared width, `ExternalTool` if a backing codec process fails.
    fn encode(&self, buffer: &AudioBuffer, format: ExportFormat) -> Result<Vec<u8>>;

    /// Encode straight to a file, deriving the format from the extension
    fn encode_to_file(&self, buffer: &AudioBuffer, path: &Path) -> Result<()> {
        let format = ExportFormat::from_path(path)?;
        let bytes = self.encode(buffer, format)?;
        std::fs::write(path, bytes)?;
        Ok(())
    }
}

/// A 10-band equalization strategy
///
/// The two shipped strategies (time-domain filter cascade and
/// frequency-domain spectral masking) are independently specified
/// algorithms, not two implementations of one; callers choose by behavior,
/// not by performance.
pub trait Equalizer: Send {
    /// Run one equalization pass
    ///
    /// The input is untouched; the returned buffer has the same frame
    /// count, channel count, sample rate, and sample width.
    fn process(&mut self, buffer: &AudioBuffer, gains: &GainVector) -> Result<AudioBuffer>;

    /// Human-readable strategy name
    fn name(&self) -> &str;
}
