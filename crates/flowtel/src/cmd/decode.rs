use flowtel_frame::decode_record;

use crate::cmd::{input, DecodeArgs};
use crate::exit::{frame_error, CliResult, SUCCESS};
use crate::output::{print_records, OutputFormat};

pub fn run(args: DecodeArgs, format: OutputFormat) -> CliResult<i32> {
    let buffers = input::read_frames(&args.files, args.stream)?;

    let mut records = Vec::with_capacity(buffers.len());
    for buf in &buffers {
        let record = decode_record(buf).map_err(|err| frame_error("decode failed", err))?;
        records.push(record);
    }

    print_records(&records, format);
    Ok(SUCCESS)
}
