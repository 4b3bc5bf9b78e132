//! Export container formats
//!
//! The export surface is a fixed closed set. Anything else is rejected with
//! a typed error rather than silently falling back to a default container.

use crate::error::{Result, TenbandError};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;

/// Supported export containers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExportFormat {
    /// MPEG Layer III (lossy)
    Mp3,
    /// RIFF WAVE PCM (lossless)
    Wav,
    /// Free Lossless Audio Codec
    Flac,
    /// Ogg Vorbis (lossy)
    Ogg,
}

impl ExportFormat {
    /// Parse a format token or file extension
    ///
    /// # Errors
    /// `UnsupportedFormat` for anything outside {mp3, wav, flac, ogg}.
    pub fn from_extension(token: &str) -> Result<Self> {
        match token.trim_start_matches('.').to_lowercase().as_str() {
            "mp3" => Ok(Self::Mp3),
            "wav" => Ok(Self::Wav),
            "flac" => Ok(Self::Flac),
            "ogg" => Ok(Self::Ogg),
            other => Err(TenbandError::unsupported(other.to_string())),
        }
    }

    /// Derive the format from an output path's extension
    pub fn from_path(path: &Path) -> Result<Self> {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .ok_or_else(|| TenbandError::unsupported(path.display().to_string()))?;
        Self::from_extension(ext)
    }

    /// Canonical file extension
    pub fn extension(self) -> &'static str {
        match self {
            Self::Mp3 => "mp3",
            Self::Wav => "wav",
            Self::Flac => "flac",
            Self::Ogg => "ogg",
        }
    }

    /// Whether encode/decode round trips preserve samples bit-exactly
    pub fn is_lossless(self) -> bool {
        matches!(self, Self::Wav | Self::Flac)
    }
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.extension())
    }
}
