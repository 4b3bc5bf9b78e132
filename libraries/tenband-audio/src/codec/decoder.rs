/// Audio decoder implementation using Symphonia
use std::io::Cursor;
use std::path::Path;
use symphonia::core::audio::{AudioBufferRef, Signal};
use symphonia::core::codecs::DecoderOptions;
use symphonia::core::formats::FormatOptions;
use symphonia::core::io::{MediaSource, MediaSourceStream};
use symphonia::core::meta::MetadataOptions;
use symphonia::core::probe::Hint;
use tenband_core::{
    AudioBuffer, AudioDecoder, AudioFormat, DecodedMetadata, Result, SampleWidth, TenbandError,
};
use tracing::debug;

/// Audio decoder using Symphonia
///
/// Supports MP3, FLAC, OGG, and WAV. Unlike a playback decoder, this one
/// preserves the asset exactly as stored: channel count and layout are kept
/// (no downmix) and samples come out as signed integers at the container's
/// declared width, so downstream numeric code can clip and cast correctly.
pub struct SymphoniaDecoder {
    /// Fallback width when the container does not declare bits per sample
    /// (lossy codecs such as MP3 and Vorbis never do)
    default_width: SampleWidth,
}

impl SymphoniaDecoder {
    /// Create a new decoder with a 16-bit fallback width
    pub fn new() -> Self {
        Self {
            default_width: SampleWidth::Two,
        }
    }

    /// Probe an asset's stream parameters without decoding it
    pub fn probe(&self, path: &Path) -> Result<DecodedMetadata> {
        let file = std::fs::File::open(path)?;
        let mss = MediaSourceStream::new(Box::new(file), Default::default());
        let hint = hint_for(path.extension().and_then(|e| e.to_str()));

        let probed = probe_source(mss, &hint, &path.display().to_string())?;
        let track = probed
            .format
            .default_track()
            .ok_or_else(|| TenbandError::corrupt("no audio tracks found"))?;

        Ok(DecodedMetadata {
            sample_rate: track.codec_params.sample_rate.unwrap_or(44100),
            channels: track
                .codec_params
                .channels
                .map(|c| c.count() as u16)
                .unwrap_or(2),
            bits_per_sample: track.codec_params.bits_per_sample.map(|b| b as u16),
        })
    }

    fn decode_source(
        &mut self,
        mss: MediaSourceStream,
        hint: &Hint,
        context: &str,
    ) -> Result<AudioBuffer> {
        let probed = probe_source(mss, hint, context)?;
        let mut format = probed.format;

        let track = format
            .default_track()
            .ok_or_else(|| TenbandError::corrupt(format!("{context}: no audio tracks found")))?;

        let sample_rate = track.codec_params.sample_rate.unwrap_or(44100);
        let width = track
            .codec_params
            .bits_per_sample
            .and_then(|bits| SampleWidth::from_bits(bits).ok())
            .unwrap_or(self.default_width);
        let track_id = track.id;

        let mut decoder = symphonia::default::get_codecs()
            .make(&track.codec_params, &DecoderOptions::default())
            .map_err(|e| {
                TenbandError::corrupt(format!("{context}: failed to create decoder: {e}"))
            })?;

        let mut all_samples: Vec<i32> = Vec::new();
        let mut channels: Option<u16> = None;

        loop {
            let packet = match format.next_packet() {
                Ok(packet) => packet,
                Err(symphonia::core::errors::Error::IoError(e))
                    if e.kind() == std::io::ErrorKind::UnexpectedEof =>
                {
                    break;
                }
                Err(e) => {
                    return Err(TenbandError::corrupt(format!(
                        "{context}: error reading packet: {e}"
                    )));
                }
            };

            if packet.track_id() != track_id {
                continue;
            }

            let decoded = decoder
                .decode(&packet)
                .map_err(|e| TenbandError::corrupt(format!("{context}: decode error: {e}")))?;

            let packet_channels = decoded.spec().channels.count() as u16;
            let expected = *channels.get_or_insert(packet_channels);
            if packet_channels != expected {
                return Err(TenbandError::corrupt(format!(
                    "{context}: channel count changed mid-stream ({expected} -> {packet_channels})"
                )));
            }

            convert_packet(&decoded, width, &mut all_samples);
        }

        let channels = channels.unwrap_or(2);
        debug!(
            samples = all_samples.len(),
            sample_rate,
            channels,
            width_bits = width.bits(),
            "decoded asset"
        );

        AudioBuffer::new(all_samples, AudioFormat::new(sample_rate, channels, width))
    }
}

impl Default for SymphoniaDecoder {
    fn default() -> Self {
        Self::new()
    }
}

impl AudioDecoder for SymphoniaDecoder {
    fn decode(&mut self, path: &Path) -> Result<AudioBuffer> {
        let file = std::fs::File::open(path)?;
        let mss = MediaSourceStream::new(Box::new(file), Default::default());
        let hint = hint_for(path.extension().and_then(|e| e.to_str()));
        self.decode_source(mss, &hint, &path.display().to_string())
    }

    fn decode_bytes(&mut self, data: &[u8], container_hint: &str) -> Result<AudioBuffer> {
        let cursor: Box<dyn MediaSource> = Box::new(Cursor::new(data.to_vec()));
        let mss = MediaSourceStream::new(cursor, Default::default());
        let hint = hint_for(Some(container_hint));
        self.decode_source(mss, &hint, &format!("<{container_hint} bytes>"))
    }

    fn supports_format(&self, path: &Path) -> bool {
        if let Some(ext) = path.extension().and_then(|e| e.to_str()) {
            matches!(ext.to_lowercase().as_str(), "mp3" | "flac" | "ogg" | "wav")
        } else {
            false
        }
    }
}

fn hint_for(extension: Option<&str>) -> Hint {
    let mut hint = Hint::new();
    if let Some(ext) = extension {
        hint.with_extension(ext.trim_start_matches('.'));
    }
    hint
}

fn probe_source(
    mss: MediaSourceStream,
    hint: &Hint,
    context: &str,
) -> Result<symphonia::core::probe::ProbeResult> {
    // A failed probe means the container itself is not recognized, which is
    // the unsupported-format case, not corruption
    symphonia::default::get_probe()
        .format(
            hint,
            mss,
            &FormatOptions::default(),
            &MetadataOptions::default(),
        )
        .map_err(|e| TenbandError::unsupported(format!("{context}: {e}")))
}

/// Append one decoded packet as interleaved integers at the target width
///
/// Symphonia hands packets over in planar form; interleaving here is
/// frame-major: all channels of frame 0, then frame 1, and so on. Each
/// source sample type is normalized to [-1.0, 1.0) with symmetric scaling
/// and re-quantized to the target width.
fn convert_packet(decoded: &AudioBufferRef, width: SampleWidth, out: &mut Vec<i32>) {
    match decoded {
        AudioBufferRef::F32(buf) => interleave(buf, width, out, |s| f64::from(s)),
        AudioBufferRef::F64(buf) => interleave(buf, width, out, |s| s),
        AudioBufferRef::S32(buf) => interleave(buf, width, out, |s| f64::from(s) / 2147483648.0),
        AudioBufferRef::S24(buf) => {
            interleave(buf, width, out, |s| f64::from(s.inner()) / 8388608.0);
        }
        AudioBufferRef::S16(buf) => interleave(buf, width, out, |s| f64::from(s) / 32768.0),
        AudioBufferRef::S8(buf) => interleave(buf, width, out, |s| f64::from(s) / 128.0),
        AudioBufferRef::U32(buf) => interleave(buf, width, out, |s| {
            (f64::from(s) - 2147483648.0) / 2147483648.0
        }),
        AudioBufferRef::U24(buf) => interleave(buf, width, out, |s| {
            (f64::from(s.inner()) - 8388608.0) / 8388608.0
        }),
        AudioBufferRef::U16(buf) => {
            interleave(buf, width, out, |s| (f64::from(s) - 32768.0) / 32768.0);
        }
        AudioBufferRef::U8(buf) => interleave(buf, width, out, |s| (f64::from(s) - 128.0) / 128.0),
    }
}

fn interleave<T, F>(
    buf: &symphonia::core::audio::AudioBuffer<T>,
    width: SampleWidth,
    out: &mut Vec<i32>,
    normalize: F,
) where
    T: symphonia::core::sample::Sample + Copy,
    F: Fn(T) -> f64,
{
    let channels = buf.spec().channels.count();
    let frames = buf.frames();
    let scale = width.full_scale();
    out.reserve(frames * channels);

    for frame in 0..frames {
        for ch in 0..channels {
            let normalized = normalize(buf.chan(ch)[frame]);
            out.push(width.clamp(normalized * scale));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn supports_the_closed_format_set() {
        let decoder = SymphoniaDecoder::new();
        assert!(decoder.supports_format(Path::new("test.mp3")));
        assert!(decoder.supports_format(Path::new("test.FLAC")));
        assert!(decoder.supports_format(Path::new("test.ogg")));
        assert!(decoder.supports_format(Path::new("test.wav")));
        assert!(!decoder.supports_format(Path::new("test.txt")));
        assert!(!decoder.supports_format(Path::new("test")));
    }

    #[test]
    fn decode_nonexistent_file_returns_error() {
        let mut decoder = SymphoniaDecoder::new();
        assert!(decoder.decode(Path::new("/nonexistent/file.mp3")).is_err());
    }

    #[test]
    fn probe_names_the_offending_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("noise.mp3");
        std::fs::write(&path, [0u8; 64]).unwrap();

        let decoder = SymphoniaDecoder::new();
        let err = decoder.probe(&path).unwrap_err();
        assert!(matches!(err, TenbandError::UnsupportedFormat(_)));
        assert!(err.to_string().contains("noise.mp3"));
    }

    #[test]
    fn garbage_bytes_are_unsupported() {
        let mut decoder = SymphoniaDecoder::new();
        let err = decoder.decode_bytes(&[0u8; 64], "mp3").unwrap_err();
        assert!(matches!(err, TenbandError::UnsupportedFormat(_)));
    }
}
