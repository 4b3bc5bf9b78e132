/// Core domain types for Tenband
pub mod audio;
pub mod band;
pub mod format;
pub mod gain;

pub use audio::{AudioBuffer, AudioFormat, SampleWidth};
pub use band::{Band, BANDS};
pub use format::ExportFormat;
pub use gain::{GainVector, NOTCH_MAX, NOTCH_MIN};
