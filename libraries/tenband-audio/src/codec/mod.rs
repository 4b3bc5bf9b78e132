//! Codec boundary: decode and encode adapters
//!
//! Decoding goes through Symphonia and stays fully in-process. Encoding is
//! split: WAV is written natively with hound (lossless, no external tools),
//! while mp3/flac/ogg shell out to a caller-configured FFmpeg binary behind
//! the `AudioEncoder` seam so the numeric engine never depends on an
//! installed codec toolchain.

mod decoder;
mod ffmpeg;
mod wav;

pub use decoder::SymphoniaDecoder;
pub use ffmpeg::FfmpegEncoder;
pub use wav::WavEncoder;
