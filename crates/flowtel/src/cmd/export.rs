use flowtel_analytics::{reconstruct_signal, save_signal_csv};
use flowtel_ingest::FrameSink;

use crate::cmd::{input, ExportArgs};
use crate::exit::{export_error, CliResult, SUCCESS};
use crate::output::{print_export_summary, ExportSummary, OutputFormat};

pub fn run(args: ExportArgs, format: OutputFormat) -> CliResult<i32> {
    let buffers = input::read_frames(&args.files, args.stream)?;

    let sink = FrameSink::new();
    for buf in &buffers {
        let _ = sink.on_frame(buf);
    }

    let records = sink.records();
    let signal = reconstruct_signal(&records);
    save_signal_csv(&signal, &args.out).map_err(|err| export_error("export failed", err))?;

    print_export_summary(
        &ExportSummary {
            records: records.len(),
            samples: signal.len(),
            path: args.out.display().to_string(),
        },
        format,
    );
    Ok(SUCCESS)
}
