//! The fixed 10-band frequency layout
//!
//! Band edges follow the classic graphic-equalizer octave split from 20 Hz
//! to 20 kHz. Adjacent bands share their edge frequency; a transform bin
//! landing exactly on a shared edge belongs to both bands and receives both
//! gain factors.

use serde::{Deserialize, Serialize};

/// A contiguous frequency interval assigned one gain control
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Band {
    /// Lower edge in Hz (inclusive)
    pub low_hz: f64,
    /// Upper edge in Hz (inclusive)
    pub high_hz: f64,
}

impl Band {
    /// Whether a frequency falls inside this band (edges inclusive)
    pub fn contains(&self, freq_hz: f64) -> bool {
        freq_hz >= self.low_hz && freq_hz <= self.high_hz
    }

    /// Geometric center frequency, useful for labeling
    pub fn center_hz(&self) -> f64 {
        (self.low_hz * self.high_hz).sqrt()
    }
}

/// The 10 fixed equalizer bands, low to high
pub const BANDS: [Band; 10] = [
    Band { low_hz: 20.0, high_hz: 60.0 },
    Band { low_hz: 60.0, high_hz: 125.0 },
    Band { low_hz: 125.0, high_hz: 250.0 },
    Band { low_hz: 250.0, high_hz: 500.0 },
    Band { low_hz: 500.0, high_hz: 1000.0 },
    Band { low_hz: 1000.0, high_hz: 2000.0 },
    Band { low_hz: 2000.0, high_hz: 4000.0 },
    Band { low_hz: 4000.0, high_hz: 8000.0 },
    Band { low_hz: 8000.0, high_hz: 16000.0 },
    Band { low_hz: 16000.0, high_hz: 20000.0 },
];
