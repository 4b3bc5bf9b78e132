//! Per-band gain controls
//!
//! A `GainVector` carries one value per fixed band in "slider notches",
//! the raw UI unit: -10 (full cut) to +10 (full boost). The conversion to
//! a spectral factor or a dB offset is the engine's concern, not this
//! type's.

use crate::error::{Result, TenbandError};
use crate::types::band::BANDS;
use serde::{Deserialize, Serialize};

/// Lowest legal notch value
pub const NOTCH_MIN: f64 = -10.0;

/// Highest legal notch value
pub const NOTCH_MAX: f64 = 10.0;

/// Ordered per-band gain controls, index-aligned with [`BANDS`]
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GainVector([f64; 10]);

impl GainVector {
    /// Create a gain vector, validating every control against the notch range
    pub fn new(notches: [f64; 10]) -> Result<Self> {
        for (band, &value) in notches.iter().enumerate() {
            if !(NOTCH_MIN..=NOTCH_MAX).contains(&value) || value.is_nan() {
                return Err(TenbandError::InvalidGain { band, value });
            }
        }
        Ok(Self(notches))
    }

    /// All-zero gains: every band passes through unchanged
    pub fn flat() -> Self {
        Self([0.0; 10])
    }

    /// Number of controls (always matches the band count)
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Always false; present for API symmetry with slices
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Notch value for one band
    pub fn get(&self, band: usize) -> Option<f64> {
        self.0.get(band).copied()
    }

    /// Whether every control sits at zero
    pub fn is_flat(&self) -> bool {
        self.0.iter().all(|&v| v == 0.0)
    }

    /// Iterate `(band index, notch value)` pairs
    pub fn iter(&self) -> impl Iterator<Item = (usize, f64)> + '_ {
        self.0.iter().copied().enumerate()
    }

    /// The raw notch array
    pub fn as_array(&self) -> &[f64; 10] {
        &self.0
    }
}

impl Default for GainVector {
    fn default() -> Self {
        Self::flat()
    }
}

impl TryFrom<[f64; 10]> for GainVector {
    type Error = TenbandError;

    fn try_from(notches: [f64; 10]) -> Result<Self> {
        Self::new(notches)
    }
}

// Compile-time guard that the control count tracks the band table
const _: () = assert!(BANDS.len() == 10);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_full_notch_range() {
        let gains = GainVector::new([-10.0, 10.0, 0.0, 5.5, -3.25, 0.0, 0.0, 0.0, 0.0, 0.0]);
        assert!(gains.is_ok());
    }

    #[test]
    fn rejects_out_of_range_notches() {
        let err = GainVector::new([0.0, 0.0, 10.5, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0]).unwrap_err();
        assert!(matches!(
            err,
            TenbandError::InvalidGain { band: 2, value } if value == 10.5
        ));

        assert!(GainVector::new([-10.1, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0]).is_err());
        assert!(GainVector::new([f64::NAN, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0]).is_err());
    }

    #[test]
    fn flat_is_all_zero() {
        let gains = GainVector::flat();
        assert!(gains.is_flat());
        assert_eq!(gains.get(0), Some(0.0));
        assert_eq!(gains.get(10), None);
    }

    #[test]
    fn serde_round_trip() {
        let gains = GainVector::new([1.0, -2.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 3.0, 0.0]).unwrap();
        let json = serde_json::to_string(&gains).unwrap();
        let back: GainVector = serde_json::from_str(&json).unwrap();
        assert_eq!(back, gains);
    }
}
