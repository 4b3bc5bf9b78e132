/// Core error types for Tenband
use thiserror::Error;

/// Result type alias using `TenbandError`
pub type Result<T> = std::result::Result<T, TenbandError>;

/// Core error type for the equalizer engine
///
/// Every failure names the operation that produced it and carries the
/// underlying cause; nothing is swallowed and no operation retries
/// internally.
#[derive(Error, Debug)]
pub enum TenbandError {
    /// Container or codec is not part of the supported set
    #[error("Unsupported format: {0}")]
    UnsupportedFormat(String),

    /// The container parsed but its audio data is truncated or invalid
    #[error("Corrupt audio data: {0}")]
    Corrupt(String),

    /// A sample value does not fit the declared sample width
    #[error("Sample {value} exceeds {width_bits}-bit range")]
    RangeOverflow {
        /// Offending sample value
        value: i64,
        /// Declared width in bits
        width_bits: u16,
    },

    /// Processing attempted before a successful decode
    #[error("No audio loaded: decode an asset before processing")]
    NothingLoaded,

    /// Export attempted before a successful processing pass
    #[error("Nothing to export: run an equalizer pass before exporting")]
    NothingToExport,

    /// An external codec tool failed; its output is surfaced verbatim
    #[error("External tool '{tool}' failed: {message}")]
    ExternalTool {
        /// Name or path of the tool that failed
        tool: String,
        /// The tool's own error output
        message: String,
    },

    /// A gain control is outside the [-10, +10] notch range
    #[error("Gain {value} for band {band} is outside [-10, +10]")]
    InvalidGain {
        /// Band index of the offending control
        band: usize,
        /// Out-of-range value
        value: f64,
    },

    /// Buffer shape violates the interleaving invariants
    #[error("Invalid audio buffer: {0}")]
    InvalidBuffer(String),

    /// I/O errors
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl TenbandError {
    /// Create an `UnsupportedFormat` error from any displayable token
    pub fn unsupported(format: impl Into<String>) -> Self {
        Self::UnsupportedFormat(format.into())
    }

    /// Create a `Corrupt` error with context
    pub fn corrupt(message: impl Into<String>) -> Self {
        Self::Corrupt(message.into())
    }

    /// Create an `ExternalTool` error with the tool name and its output
    pub fn external_tool(tool: impl Into<String>, message: impl Into<String>) -> Self {
        Self::ExternalTool {
            tool: tool.into(),
            message: message.into(),
        }
    }

    /// Create an `InvalidBuffer` error with context
    pub fn invalid_buffer(message: impl Into<String>) -> Self {
        Self::InvalidBuffer(message.into())
    }
}
