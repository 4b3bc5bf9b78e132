/// External encoder - FFmpeg wrapper for mp3/flac/ogg export
use super::wav::WavEncoder;
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};
use tenband_core::{AudioBuffer, AudioEncoder, ExportFormat, Result, TenbandError};
use tracing::{debug, warn};

/// Encoder backed by an external FFmpeg binary
///
/// The binary's location is caller-supplied configuration, injected at
/// construction; nothing here probes the environment. The buffer is staged
/// as a temporary lossless WAV and FFmpeg converts it to the target
/// container. WAV targets skip the external tool entirely, so a session
/// with no FFmpeg installed can still export losslessly.
///
/// The call blocks until FFmpeg exits; deadlines, if the host needs them,
/// wrap this boundary from outside.
#[derive(Debug, Clone)]
pub struct FfmpegEncoder {
    ffmpeg_path: PathBuf,
}

impl FfmpegEncoder {
    /// Create an encoder that shells out to the given FFmpeg binary
    pub fn new(ffmpeg_path: impl Into<PathBuf>) -> Self {
        Self {
            ffmpeg_path: ffmpeg_path.into(),
        }
    }

    /// The configured binary path
    pub fn ffmpeg_path(&self) -> &Path {
        &self.ffmpeg_path
    }

    /// Format-specific FFmpeg arguments (single deterministic quality tier)
    fn format_args(format: ExportFormat) -> &'static [&'static str] {
        match format {
            ExportFormat::Mp3 => &["-b:a", "320k", "-f", "mp3"],
            ExportFormat::Flac => &["-compression_level", "5", "-f", "flac"],
            ExportFormat::Ogg => &["-q:a", "8", "-c:a", "libvorbis", "-f", "ogg"],
            ExportFormat::Wav => &["-c:a", "pcm_s16le", "-f", "wav"],
        }
    }

    fn transcode(&self, wav_bytes: &[u8], format: ExportFormat) -> Result<Vec<u8>> {
        let dir = tempfile::tempdir()?;
        let input = dir.path().join("staged.wav");
        let output = dir.path().join(format!("out.{}", format.extension()));
        std::fs::write(&input, wav_bytes)?;

        debug!(
            tool = %self.ffmpeg_path.display(),
            target = %format,
            "invoking external encoder"
        );

        let result = Command::new(&self.ffmpeg_path)
            .arg("-i")
            .arg(&input)
            .arg("-y")
            .args(Self::format_args(format))
            .arg(&output)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .output()
            .map_err(|e| {
                TenbandError::external_tool(self.ffmpeg_path.display().to_string(), e.to_string())
            })?;

        if !result.status.success() {
            let stderr = String::from_utf8_lossy(&result.stderr);
            warn!(status = ?result.status, "external encoder failed");
            return Err(TenbandError::external_tool(
                self.ffmpeg_path.display().to_string(),
                stderr.into_owned(),
            ));
        }

        Ok(std::fs::read(&output)?)
    }
}

impl AudioEncoder for FfmpegEncoder {
    fn encode(&self, buffer: &AudioBuffer, format: ExportFormat) -> Result<Vec<u8>> {
        let wav_bytes = WavEncoder::encode_wav(buffer)?;
        match format {
            // Already lossless PCM; no reason to round-trip through ffmpeg
            ExportFormat::Wav => Ok(wav_bytes),
            other => self.transcode(&wav_bytes, other),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tenband_core::{AudioFormat, SampleWidth};

    #[test]
    fn encoder_keeps_the_injected_path() {
        let encoder = FfmpegEncoder::new("/usr/bin/ffmpeg");
        assert_eq!(encoder.ffmpeg_path(), Path::new("/usr/bin/ffmpeg"));
    }

    #[test]
    fn wav_export_needs_no_external_tool() {
        // Deliberately bogus binary path: the wav path must still succeed
        let encoder = FfmpegEncoder::new("/nonexistent/ffmpeg");
        let format = AudioFormat::new(8000, 1, SampleWidth::Two);
        let buffer = AudioBuffer::new(vec![0, 100, -100, 0], format).unwrap();
        let bytes = encoder.encode(&buffer, ExportFormat::Wav).unwrap();
        assert_eq!(&bytes[0..4], b"RIFF");
    }

    #[test]
    fn missing_binary_surfaces_as_external_tool_failure() {
        let encoder = FfmpegEncoder::new("/nonexistent/ffmpeg");
        let format = AudioFormat::new(8000, 1, SampleWidth::Two);
        let buffer = AudioBuffer::new(vec![0, 100, -100, 0], format).unwrap();
        let err = encoder.encode(&buffer, ExportFormat::Mp3).unwrap_err();
        assert!(matches!(err, TenbandError::ExternalTool { .. }));
    }

    #[test]
    fn every_format_has_argument_coverage() {
        for format in [
            ExportFormat::Mp3,
            ExportFormat::Flac,
            ExportFormat::Ogg,
            ExportFormat::Wav,
        ] {
            assert!(!FfmpegEncoder::format_args(format).is_empty());
        }
    }
}
