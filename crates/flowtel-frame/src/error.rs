/// Errors that can occur during frame decoding and stream framing.
#[derive(Debug, thiserror::Error)]
pub enum FrameError {
    /// The buffer is shorter than the fixed 69-byte frame header.
    #[error("truncated frame header ({len} of 69 bytes)")]
    TruncatedHeader { len: usize },

    /// A stream chunk header contains an invalid magic number.
    #[error("invalid chunk magic (expected 0x4654 \"FT\")")]
    InvalidMagic,

    /// A stream chunk exceeds the configured maximum size.
    #[error("chunk too large ({size} bytes, max {max})")]
    ChunkTooLarge { size: usize, max: usize },

    /// An I/O error occurred while reading or writing a capture stream.
    #[error("stream I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The stream ended before a complete chunk was received.
    #[error("stream closed (incomplete chunk)")]
    StreamClosed,
}

pub type Result<T> = std::result::Result<T, FrameError>;
