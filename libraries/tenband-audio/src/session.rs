//! Processing session: decode → process → export
//!
//! A `Session` is a caller-owned value object; there is no ambient global
//! state. It moves through `Empty → Loaded → Processed → Exported`, may
//! re-process from `Loaded`/`Processed` with new gains without re-decoding,
//! and falls back to `Empty` on reset. The engine is synchronous and keeps
//! no locks: exclusive ownership (`&mut self`) is the concurrency model,
//! one in-flight operation at a time.

use std::path::Path;
use tenband_core::{
    AudioBuffer, AudioDecoder, AudioEncoder, Equalizer, ExportFormat, GainVector, Result,
    TenbandError,
};
use tracing::info;

/// Session lifecycle state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    /// Nothing loaded yet (or reset)
    Empty,
    /// An asset decoded successfully
    Loaded,
    /// An equalizer pass succeeded
    Processed,
    /// The processed buffer was encoded at least once
    Exported,
}

/// One equalization session over a single loaded asset
#[derive(Default)]
pub struct Session {
    original: Option<AudioBuffer>,
    processed: Option<AudioBuffer>,
    exported: bool,
}

impl Session {
    /// Create an empty session
    pub fn new() -> Self {
        Self::default()
    }

    /// Current lifecycle state
    pub fn state(&self) -> SessionState {
        if self.exported {
            SessionState::Exported
        } else if self.processed.is_some() {
            SessionState::Processed
        } else if self.original.is_some() {
            SessionState::Loaded
        } else {
            SessionState::Empty
        }
    }

    /// Decode an asset from disk into the session
    ///
    /// Replaces any previously loaded or processed buffer.
    pub fn load(&mut self, decoder: &mut dyn AudioDecoder, path: &Path) -> Result<&AudioBuffer> {
        let buffer = decoder.decode(path)?;
        info!(
            path = %path.display(),
            frames = buffer.frames(),
            channels = buffer.format.channels,
            "session loaded"
        );
        Ok(self.install(buffer))
    }

    /// Decode an in-memory asset into the session
    pub fn load_bytes(
        &mut self,
        decoder: &mut dyn AudioDecoder,
        data: &[u8],
        container_hint: &str,
    ) -> Result<&AudioBuffer> {
        let buffer = decoder.decode_bytes(data, container_hint)?;
        info!(
            hint = container_hint,
            frames = buffer.frames(),
            "session loaded from bytes"
        );
        Ok(self.install(buffer))
    }

    fn install(&mut self, buffer: AudioBuffer) -> &AudioBuffer {
        self.processed = None;
        self.exported = false;
        self.original.insert(buffer)
    }

    /// Run one equalization pass with the chosen strategy
    ///
    /// Always starts from the originally loaded buffer, so repeated calls
    /// with different gains do not compound.
    pub fn process(
        &mut self,
        equalizer: &mut dyn Equalizer,
        gains: &GainVector,
    ) -> Result<&AudioBuffer> {
        let original = self.original.as_ref().ok_or(TenbandError::NothingLoaded)?;
        let shaped = equalizer.process(original, gains)?;
        info!(strategy = equalizer.name(), "session processed");
        self.exported = false;
        Ok(self.processed.insert(shaped))
    }

    /// Encode the processed buffer into the target container
    ///
    /// Requires a successful processing pass first; a loaded-but-unprocessed
    /// session has nothing to export and its state does not change.
    pub fn export(&mut self, encoder: &dyn AudioEncoder, format: ExportFormat) -> Result<Vec<u8>> {
        let processed = self.processed.as_ref().ok_or(TenbandError::NothingToExport)?;
        let bytes = encoder.encode(processed, format)?;
        info!(format = %format, bytes = bytes.len(), "session exported");
        self.exported = true;
        Ok(bytes)
    }

    /// Encode the processed buffer straight to a file
    pub fn export_to_file(&mut self, encoder: &dyn AudioEncoder, path: &Path) -> Result<()> {
        let format = ExportFormat::from_path(path)?;
        let bytes = self.export(encoder, format)?;
        std::fs::write(path, bytes)?;
        Ok(())
    }

    /// The originally loaded buffer, if any
    pub fn original(&self) -> Option<&AudioBuffer> {
        self.original.as_ref()
    }

    /// The most recent processing result, if any
    pub fn processed(&self) -> Option<&AudioBuffer> {
        self.processed.as_ref()
    }

    /// Drop all buffers and return to `Empty`
    pub fn reset(&mut self) {
        self.original = None;
        self.processed = None;
        self.exported = false;
    }
}
