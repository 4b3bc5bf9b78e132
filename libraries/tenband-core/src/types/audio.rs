//! Audio buffer and format types
//!
//! `AudioBuffer` is the sole signal carrier through the engine: interleaved
//! signed-integer samples at a fixed width, plus the format metadata needed
//! to interpret them. Buffers are immutable once built; every engine pass
//! returns a fresh buffer rather than mutating its input.

use crate::error::{Result, TenbandError};
use serde::{Deserialize, Serialize};

/// Sample width in bytes for signed-integer PCM
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SampleWidth {
    /// 8-bit samples
    One,
    /// 16-bit samples (CD audio)
    Two,
    /// 24-bit samples
    Three,
    /// 32-bit samples
    Four,
}

impl SampleWidth {
    /// Construct from a byte count
    pub fn from_bytes(bytes: u16) -> Result<Self> {
        match bytes {
            1 => Ok(Self::One),
            2 => Ok(Self::Two),
            3 => Ok(Self::Three),
            4 => Ok(Self::Four),
            other => Err(TenbandError::invalid_buffer(format!(
                "unsupported sample width: {other} bytes"
            ))),
        }
    }

    /// Construct from a bit count, rounding up to whole bytes
    pub fn from_bits(bits: u32) -> Result<Self> {
        Self::from_bytes(bits.div_ceil(8) as u16)
    }

    /// Width in bytes
    pub fn bytes(self) -> u16 {
        match self {
            Self::One => 1,
            Self::Two => 2,
            Self::Three => 3,
            Self::Four => 4,
        }
    }

    /// Width in bits
    pub fn bits(self) -> u16 {
        self.bytes() * 8
    }

    /// Smallest representable sample value
    pub fn min_value(self) -> i64 {
        -(1i64 << (self.bits() - 1))
    }

    /// Largest representable sample value
    pub fn max_value(self) -> i64 {
        (1i64 << (self.bits() - 1)) - 1
    }

    /// Whether a value fits this width
    pub fn contains(self, value: i64) -> bool {
        value >= self.min_value() && value <= self.max_value()
    }

    /// Normalization scale: `2^(bits-1)`, so full-scale maps to [-1.0, 1.0)
    pub fn full_scale(self) -> f64 {
        (1i64 << (self.bits() - 1)) as f64
    }

    /// Round a float sample to the nearest representable integer, clipping
    /// at the width's limits
    ///
    /// Clipping (rather than erroring) is the engine's documented policy for
    /// post-transform overflow; encode-time validation of caller-built
    /// buffers still reports `RangeOverflow`.
    pub fn clamp(self, value: f64) -> i32 {
        value.round().clamp(self.min_value() as f64, self.max_value() as f64) as i32
    }
}

/// Audio format descriptor
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AudioFormat {
    /// Sample rate in Hz
    pub sample_rate: u32,
    /// Number of channels (interleaved)
    pub channels: u16,
    /// Signed-integer sample width
    pub width: SampleWidth,
}

impl AudioFormat {
    /// Create a new audio format
    pub fn new(sample_rate: u32, channels: u16, width: SampleWidth) -> Self {
        Self {
            sample_rate,
            channels,
            width,
        }
    }
}

/// Decoded audio, interleaved signed-integer samples
///
/// Invariant: `samples.len()` is a multiple of `format.channels`, so the
/// buffer always holds whole frames.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AudioBuffer {
    /// Audio samples (signed integers at `format.width`, interleaved)
    pub samples: Vec<i32>,
    /// Audio format information
    pub format: AudioFormat,
}

impl AudioBuffer {
    /// Create a new audio buffer, validating the interleaving invariant
    pub fn new(samples: Vec<i32>, format: AudioFormat) -> Result<Self> {
        if format.channels == 0 {
            return Err(TenbandError::invalid_buffer("channel count must be >= 1"));
        }
        if samples.len() % format.channels as usize != 0 {
            return Err(TenbandError::invalid_buffer(format!(
                "{} samples do not divide into {} channels",
                samples.len(),
                format.channels
            )));
        }
        Ok(Self { samples, format })
    }

    /// Number of frames (sample instants across all channels)
    pub fn frames(&self) -> usize {
        self.samples.len() / self.format.channels as usize
    }

    /// Duration in seconds
    pub fn duration_secs(&self) -> f64 {
        self.frames() as f64 / f64::from(self.format.sample_rate)
    }

    /// Total sample count across channels
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    /// Whether the buffer holds no samples
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Verify that every sample fits the declared width
    ///
    /// Decoded and engine-produced buffers always satisfy this; the check
    /// guards encode paths against caller-constructed out-of-range data.
    pub fn check_range(&self) -> Result<()> {
        let width = self.format.width;
        for &sample in &self.samples {
            if !width.contains(i64::from(sample)) {
                return Err(TenbandError::RangeOverflow {
                    value: i64::from(sample),
                    width_bits: width.bits(),
                });
            }
        }
        Ok(())
    }
}
