//! Band gain model: slider notches to spectral factors and bin masks
//!
//! Two quirks are part of the audible contract and pinned by tests rather
//! than corrected:
//!
//! - `gain_to_factor` is asymmetric: negative notches divide the
//!   `10^(notches/100)` factor by a further 1000, so cuts attenuate far more
//!   steeply than the mirror-image boost.
//! - mirrored negative-frequency bins are scaled by `factor * -10`, not by
//!   `factor` (see [`MIRROR_SCALE`]).
//!
//! Neither is a bug to fix silently; a divergence here would change the
//! audible contract.

use tenband_core::Band;

/// Notches per slider step: the ±10 slider range maps onto the 100-point
/// factor formula 1:1 at ×10
pub const NOTCHES_PER_SLIDER_STEP: f64 = 10.0;

/// Scale applied to mirrored negative-frequency bins, on top of the band
/// factor
pub const MIRROR_SCALE: f64 = -10.0;

/// Convert a slider value in [-10, +10] to the 100-point notch scale
pub fn slider_to_notches(slider: f64) -> f64 {
    slider * NOTCHES_PER_SLIDER_STEP
}

/// Convert a notch value to a multiplicative spectral factor
///
/// `factor = 10^(notches / 100)`, divided by a further 1000 when the notch
/// value is negative. Pinned values: `f(0) = 1`, `f(100) = 10`,
/// `f(-100) = 10^-1 / 1000`.
pub fn gain_to_factor(notches: f64) -> f64 {
    let factor = 10f64.powf(notches / 100.0);
    if notches < 0.0 {
        factor / 1000.0
    } else {
        factor
    }
}

/// Mask of bins on the positive side of a band: `low <= f <= high`
///
/// Edges are inclusive, so a bin sitting exactly on a shared band edge is
/// selected by both neighboring bands and receives both factors.
pub fn band_mask(axis: &[f64], band: &Band) -> Vec<bool> {
    axis.iter()
        .map(|&f| f >= band.low_hz && f <= band.high_hz)
        .collect()
}

/// Mask of mirrored negative-frequency bins: `-high <= f <= -low`
pub fn mirror_mask(axis: &[f64], band: &Band) -> Vec<bool> {
    axis.iter()
        .map(|&f| f >= -band.high_hz && f <= -band.low_hz)
        .collect()
}
