//! Container framing for captures: many device frames in one byte stream.
//!
//! The device hands frames over one buffer at a time; to carry a whole
//! capture through a file or a pipe, each frame is wrapped in a chunk:
//! a 2-byte magic number ("FT") for stream synchronization followed by a
//! 4-byte little-endian payload length.

use std::io::{ErrorKind, Read, Write};

use bytes::{Buf, BufMut, Bytes, BytesMut};

use crate::error::{FrameError, Result};

/// Chunk header: magic (2) + length (4) = 6 bytes.
pub const CHUNK_HEADER_SIZE: usize = 6;

/// Magic bytes: "FT" (0x46 0x54).
pub const MAGIC: [u8; 2] = [0x46, 0x54];

/// Default maximum chunk payload: 1 MiB, far above any real frame.
pub const DEFAULT_MAX_CHUNK: usize = 1024 * 1024;

const READ_CHUNK_SIZE: usize = 8 * 1024;

/// Encode one frame buffer as a stream chunk.
pub fn encode_chunk(payload: &[u8], dst: &mut BytesMut) -> Result<()> {
    if payload.len() > u32::MAX as usize {
        return Err(FrameError::ChunkTooLarge {
            size: payload.len(),
            max: u32::MAX as usize,
        });
    }
    dst.reserve(CHUNK_HEADER_SIZE + payload.len());
    dst.put_slice(&MAGIC);
    dst.put_u32_le(payload.len() as u32);
    dst.put_slice(payload);
    Ok(())
}

/// Decode a chunk from a buffer.
///
/// Returns `Ok(None)` if the buffer doesn't contain a complete chunk yet.
/// On success, consumes the chunk bytes from the buffer and returns the
/// payload — one raw device frame.
pub fn decode_chunk(src: &mut BytesMut, max_chunk: usize) -> Result<Option<Bytes>> {
    if src.len() < CHUNK_HEADER_SIZE {
        return Ok(None); // Need more data
    }

    if src[0..2] != MAGIC {
        return Err(FrameError::InvalidMagic);
    }

    let payload_len = u32::from_le_bytes([src[2], src[3], src[4], src[5]]) as usize;
    if payload_len > max_chunk {
        return Err(FrameError::ChunkTooLarge {
            size: payload_len,
            max: max_chunk,
        });
    }

    let total = CHUNK_HEADER_SIZE + payload_len;
    if src.len() < total {
        return Ok(None); // Need more data
    }

    src.advance(CHUNK_HEADER_SIZE);
    Ok(Some(src.split_to(payload_len).freeze()))
}

/// Reads complete frame buffers from any `Read` stream.
///
/// Handles partial reads internally — callers always get whole frames.
pub struct StreamReader<T> {
    inner: T,
    buf: BytesMut,
    max_chunk: usize,
}

impl<T: Read> StreamReader<T> {
    /// Create a reader with the default chunk size limit.
    pub fn new(inner: T) -> Self {
        Self::with_max_chunk(inner, DEFAULT_MAX_CHUNK)
    }

    /// Create a reader with an explicit chunk size limit.
    pub fn with_max_chunk(inner: T, max_chunk: usize) -> Self {
        Self {
            inner,
            buf: BytesMut::with_capacity(READ_CHUNK_SIZE),
            max_chunk,
        }
    }

    /// Read the next frame buffer (blocking).
    ///
    /// Returns `Err(FrameError::StreamClosed)` at end of stream. EOF on a
    /// chunk boundary and EOF mid-chunk both end the stream; the caller can
    /// tell them apart by whether any buffered bytes remain unconsumed.
    pub fn next_frame(&mut self) -> Result<Bytes> {
        loop {
            if let Some(payload) = decode_chunk(&mut self.buf, self.max_chunk)? {
                return Ok(payload);
            }

            let mut chunk = [0u8; READ_CHUNK_SIZE];
            let read = match self.inner.read(&mut chunk) {
                Ok(n) => n,
                Err(err) if err.kind() == ErrorKind::Interrupted => continue,
                Err(err) => return Err(FrameError::Io(err)),
            };

            if read == 0 {
                return Err(FrameError::StreamClosed);
            }

            self.buf.extend_from_slice(&chunk[..read]);
        }
    }

    /// Bytes buffered but not yet consumed by a complete chunk.
    pub fn buffered(&self) -> usize {
        self.buf.len()
    }

    /// Consume the reader and return the inner stream.
    pub fn into_inner(self) -> T {
        self.inner
    }
}

/// Writes frame buffers to any `Write` stream, one chunk per frame.
pub struct StreamWriter<T> {
    inner: T,
    buf: BytesMut,
}

impl<T: Write> StreamWriter<T> {
    /// Create a writer.
    pub fn new(inner: T) -> Self {
        Self {
            inner,
            buf: BytesMut::with_capacity(READ_CHUNK_SIZE),
        }
    }

    /// Encode and write one frame buffer.
    pub fn write_frame(&mut self, payload: &[u8]) -> Result<()> {
        self.buf.clear();
        encode_chunk(payload, &mut self.buf)?;

        let mut offset = 0usize;
        while offset < self.buf.len() {
            match self.inner.write(&self.buf[offset..]) {
                Ok(0) => return Err(FrameError::StreamClosed),
                Ok(n) => offset += n,
                Err(err) if err.kind() == ErrorKind::Interrupted => continue,
                Err(err) if err.kind() == ErrorKind::WouldBlock => continue,
                Err(err) => return Err(FrameError::Io(err)),
            }
        }

        self.flush()
    }

    /// Flush the underlying stream.
    pub fn flush(&mut self) -> Result<()> {
        loop {
            match self.inner.flush() {
                Ok(()) => return Ok(()),
                Err(err) if err.kind() == ErrorKind::Interrupted => continue,
                Err(err) if err.kind() == ErrorKind::WouldBlock => continue,
                Err(err) => return Err(FrameError::Io(err)),
            }
        }
    }

    /// Consume the writer and return the inner stream.
    pub fn into_inner(self) -> T {
        self.inner
    }
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use super::*;

    #[test]
    fn chunk_roundtrip() {
        let mut buf = BytesMut::new();
        encode_chunk(b"frame-bytes", &mut buf).unwrap();

        assert_eq!(buf.len(), CHUNK_HEADER_SIZE + 11);

        let payload = decode_chunk(&mut buf, DEFAULT_MAX_CHUNK).unwrap().unwrap();
        assert_eq!(payload.as_ref(), b"frame-bytes");
        assert!(buf.is_empty());
    }

    #[test]
    fn incomplete_header_needs_more_data() {
        let mut buf = BytesMut::from(&MAGIC[..]);
        assert!(decode_chunk(&mut buf, DEFAULT_MAX_CHUNK).unwrap().is_none());
    }

    #[test]
    fn incomplete_payload_needs_more_data() {
        let mut buf = BytesMut::new();
        encode_chunk(b"hello", &mut buf).unwrap();
        buf.truncate(CHUNK_HEADER_SIZE + 2);

        assert!(decode_chunk(&mut buf, DEFAULT_MAX_CHUNK).unwrap().is_none());
    }

    #[test]
    fn invalid_magic_rejected() {
        let mut buf = BytesMut::from(&[0xFF, 0xFF, 0, 0, 0, 0][..]);
        let err = decode_chunk(&mut buf, DEFAULT_MAX_CHUNK).unwrap_err();
        assert!(matches!(err, FrameError::InvalidMagic));
    }

    #[test]
    fn oversized_chunk_rejected() {
        let mut buf = BytesMut::new();
        buf.put_slice(&MAGIC);
        buf.put_u32_le(1024 * 1024 * 32);

        let err = decode_chunk(&mut buf, DEFAULT_MAX_CHUNK).unwrap_err();
        assert!(matches!(err, FrameError::ChunkTooLarge { .. }));
    }

    #[test]
    fn reader_yields_frames_in_order() {
        let mut wire = BytesMut::new();
        encode_chunk(b"one", &mut wire).unwrap();
        encode_chunk(b"two", &mut wire).unwrap();
        encode_chunk(b"three", &mut wire).unwrap();

        let mut reader = StreamReader::new(Cursor::new(wire.to_vec()));
        assert_eq!(reader.next_frame().unwrap().as_ref(), b"one");
        assert_eq!(reader.next_frame().unwrap().as_ref(), b"two");
        assert_eq!(reader.next_frame().unwrap().as_ref(), b"three");
        assert!(matches!(
            reader.next_frame().unwrap_err(),
            FrameError::StreamClosed
        ));
        assert_eq!(reader.buffered(), 0);
    }

    #[test]
    fn reader_handles_byte_by_byte_input() {
        let mut wire = BytesMut::new();
        encode_chunk(b"slow", &mut wire).unwrap();

        let mut reader = StreamReader::new(ByteByByteReader {
            bytes: wire.to_vec(),
            pos: 0,
        });
        assert_eq!(reader.next_frame().unwrap().as_ref(), b"slow");
    }

    #[test]
    fn eof_mid_chunk_leaves_bytes_buffered() {
        let mut partial = BytesMut::new();
        partial.put_slice(&MAGIC);
        partial.put_u32_le(16);
        partial.put_slice(b"only-part");

        let mut reader = StreamReader::new(Cursor::new(partial.to_vec()));
        assert!(matches!(
            reader.next_frame().unwrap_err(),
            FrameError::StreamClosed
        ));
        assert!(reader.buffered() > 0);
    }

    #[test]
    fn interrupted_read_retries() {
        let mut wire = BytesMut::new();
        encode_chunk(b"ok", &mut wire).unwrap();

        let mut reader = StreamReader::new(InterruptedThenData {
            interrupted: false,
            bytes: wire.to_vec(),
            pos: 0,
        });
        assert_eq!(reader.next_frame().unwrap().as_ref(), b"ok");
    }

    #[test]
    fn writer_output_reads_back() {
        let mut writer = StreamWriter::new(Cursor::new(Vec::<u8>::new()));
        writer.write_frame(b"alpha").unwrap();
        writer.write_frame(b"beta").unwrap();

        let wire = writer.into_inner().into_inner();
        let mut reader = StreamReader::new(Cursor::new(wire));
        assert_eq!(reader.next_frame().unwrap().as_ref(), b"alpha");
        assert_eq!(reader.next_frame().unwrap().as_ref(), b"beta");
    }

    #[test]
    fn writer_rejects_zero_length_write_target() {
        let mut writer = StreamWriter::new(ZeroWriter);
        let err = writer.write_frame(b"x").unwrap_err();
        assert!(matches!(err, FrameError::StreamClosed));
    }

    #[derive(Debug)]
    struct ByteByByteReader {
        bytes: Vec<u8>,
        pos: usize,
    }

    impl Read for ByteByByteReader {
        fn read(&mut self, buf: &mut [u8]) -> std::io::Result<usize> {
            if self.pos >= self.bytes.len() || buf.is_empty() {
                return Ok(0);
            }
            buf[0] = self.bytes[self.pos];
            self.pos += 1;
            Ok(1)
        }
    }

    struct InterruptedThenData {
        interrupted: bool,
        bytes: Vec<u8>,
        pos: usize,
    }

    impl Read for InterruptedThenData {
        fn read(&mut self, buf: &mut [u8]) -> std::io::Result<usize> {
            if !self.interrupted {
                self.interrupted = true;
                return Err(std::io::Error::from(ErrorKind::Interrupted));
            }
            if self.pos >= self.bytes.len() {
                return Ok(0);
            }
            let n = (self.bytes.len() - self.pos).min(buf.len());
            buf[..n].copy_from_slice(&self.bytes[self.pos..self.pos + n]);
            self.pos += n;
            Ok(n)
        }
    }

    struct ZeroWriter;

    impl Write for ZeroWriter {
        fn write(&mut self, _buf: &[u8]) -> std::io::Result<usize> {
            Ok(0)
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }
}
