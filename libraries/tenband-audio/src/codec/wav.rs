/// Native WAV encoder using hound
use std::io::Cursor;
use tenband_core::{AudioBuffer, AudioEncoder, ExportFormat, Result, TenbandError};
use tracing::debug;

/// Lossless WAV encoder
///
/// Writes integer PCM at the buffer's exact rate, channel count, and sample
/// width, so `decode(encode(b, wav))` reproduces the samples bit for bit.
/// Only handles the WAV container; the other export targets go through
/// [`super::FfmpegEncoder`].
pub struct WavEncoder;

impl WavEncoder {
    /// Create a new WAV encoder
    pub fn new() -> Self {
        Self
    }

    pub(crate) fn encode_wav(buffer: &AudioBuffer) -> Result<Vec<u8>> {
        // Encode validates rather than clips: a caller-built buffer with
        // samples beyond the declared width is a RangeOverflow, not data to
        // quietly mangle
        buffer.check_range()?;

        let spec = hound::WavSpec {
            channels: buffer.format.channels,
            sample_rate: buffer.format.sample_rate,
            bits_per_sample: buffer.format.width.bits(),
            sample_format: hound::SampleFormat::Int,
        };

        let mut bytes = Vec::new();
        {
            let cursor = Cursor::new(&mut bytes);
            let mut writer = hound::WavWriter::new(cursor, spec)
                .map_err(|e| TenbandError::invalid_buffer(format!("wav header: {e}")))?;
            for &sample in &buffer.samples {
                writer
                    .write_sample(sample)
                    .map_err(|e| TenbandError::invalid_buffer(format!("wav write: {e}")))?;
            }
            writer
                .finalize()
                .map_err(|e| TenbandError::invalid_buffer(format!("wav finalize: {e}")))?;
        }

        debug!(
            bytes = bytes.len(),
            frames = buffer.frames(),
            "encoded wav"
        );
        Ok(bytes)
    }
}

impl Default for WavEncoder {
    fn default() -> Self {
        Self::new()
    }
}

impl AudioEncoder for WavEncoder {
    fn encode(&self, buffer: &AudioBuffer, format: ExportFormat) -> Result<Vec<u8>> {
        match format {
            ExportFormat::Wav => Self::encode_wav(buffer),
            other => Err(TenbandError::unsupported(format!(
                "{other} requires an external encoder; WavEncoder only writes wav"
            ))),
        }
    }
}
