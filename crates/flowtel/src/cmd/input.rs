use std::fs::File;
use std::path::{Path, PathBuf};

use flowtel_frame::{FrameError, StreamReader};

use crate::exit::{frame_error, io_error, CliResult};

/// Load raw frame buffers from input files.
///
/// Without `stream`, each file is one raw frame — the way the device
/// emulator delivers captures. With `stream`, each file is a capture
/// container holding any number of chunked frames.
pub fn read_frames(files: &[PathBuf], stream: bool) -> CliResult<Vec<Vec<u8>>> {
    let mut frames = Vec::new();
    for path in files {
        if stream {
            read_capture(path, &mut frames)?;
        } else {
            let raw = std::fs::read(path)
                .map_err(|err| io_error(&format!("failed reading {}", path.display()), err))?;
            frames.push(raw);
        }
    }
    Ok(frames)
}

fn read_capture(path: &Path, frames: &mut Vec<Vec<u8>>) -> CliResult<()> {
    let file = File::open(path)
        .map_err(|err| io_error(&format!("failed opening {}", path.display()), err))?;
    let mut reader = StreamReader::new(file);
    loop {
        match reader.next_frame() {
            Ok(frame) => frames.push(frame.to_vec()),
            Err(FrameError::StreamClosed) => return Ok(()),
            Err(err) => {
                return Err(frame_error(
                    &format!("corrupt capture {}", path.display()),
                    err,
                ))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use bytes::BytesMut;
    use flowtel_frame::encode_chunk;

    use super::*;

    fn unique_temp_dir(tag: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!(
            "flowtel-input-{tag}-{}-{}",
            std::process::id(),
            std::time::SystemTime::now()
                .duration_since(std::time::UNIX_EPOCH)
                .expect("time should be after epoch")
                .as_nanos()
        ));
        std::fs::create_dir_all(&dir).expect("temp dir should be creatable");
        dir
    }

    #[test]
    fn raw_mode_reads_one_frame_per_file() {
        let dir = unique_temp_dir("raw");
        let a = dir.join("a.bin");
        let b = dir.join("b.bin");
        std::fs::write(&a, [1u8, 2, 3]).unwrap();
        std::fs::write(&b, [4u8, 5]).unwrap();

        let frames = read_frames(&[a, b], false).unwrap();
        assert_eq!(frames, vec![vec![1, 2, 3], vec![4, 5]]);

        let _ = std::fs::remove_dir_all(&dir);
    }

    #[test]
    fn stream_mode_reads_all_chunks() {
        let dir = unique_temp_dir("stream");
        let capture = dir.join("capture.ftc");

        let mut wire = BytesMut::new();
        encode_chunk(b"one", &mut wire).unwrap();
        encode_chunk(b"two", &mut wire).unwrap();
        let mut file = File::create(&capture).unwrap();
        file.write_all(&wire).unwrap();
        drop(file);

        let frames = read_frames(&[capture], true).unwrap();
        assert_eq!(frames, vec![b"one".to_vec(), b"two".to_vec()]);

        let _ = std::fs::remove_dir_all(&dir);
    }

    #[test]
    fn missing_file_is_an_error() {
        let dir = unique_temp_dir("missing");
        let err = read_frames(&[dir.join("nope.bin")], false).unwrap_err();
        assert!(err.message.contains("failed reading"));

        let _ = std::fs::remove_dir_all(&dir);
    }
}
