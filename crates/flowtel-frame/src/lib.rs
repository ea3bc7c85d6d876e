//! Wire codec for ultrasonic flow-meter telemetry frames.
//!
//! A frame is a fixed 69-byte little-endian header (transit times,
//! amplitudes, power levels, fluid properties, flow rate, status word,
//! temperature, accumulated volume, and a declared sample count) followed by
//! a variable-length tail of signed 16-bit waveform samples.
//!
//! The declared sample count is unreliable on affected firmware revisions;
//! decoding always derives the real count from the bytes present.

pub mod codec;
pub mod error;
pub mod record;
pub mod stream;

pub use codec::{decode_record, encode_record, HEADER_SIZE};
pub use error::{FrameError, Result};
pub use record::FlowRecord;
pub use stream::{
    decode_chunk, encode_chunk, StreamReader, StreamWriter, CHUNK_HEADER_SIZE, DEFAULT_MAX_CHUNK,
    MAGIC,
};
