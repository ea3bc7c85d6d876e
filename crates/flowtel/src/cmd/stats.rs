use flowtel_analytics::{flow_statistics, reconstruct_signal, status_changes, std_dev};
use flowtel_ingest::FrameSink;

use crate::cmd::{input, StatsArgs};
use crate::exit::{CliResult, SUCCESS};
use crate::output::{print_stats_report, OutputFormat, StatsReport};

pub fn run(args: StatsArgs, format: OutputFormat) -> CliResult<i32> {
    let buffers = input::read_frames(&args.files, args.stream)?;

    let sink = FrameSink::new();
    for buf in &buffers {
        // A frame that fails to decode is dropped and counted; the rest of
        // the capture still aggregates.
        let _ = sink.on_frame(buf);
    }

    let records = sink.records();
    let signal = reconstruct_signal(&records);
    let volumes: Vec<f64> = records.iter().map(|r| r.volume).collect();
    let volume_mean = if volumes.is_empty() {
        0.0
    } else {
        volumes.iter().sum::<f64>() / volumes.len() as f64
    };

    let report = StatsReport {
        records: records.len(),
        accepted: sink.stats().accepted,
        rejected: sink.stats().rejected,
        flow: flow_statistics(&records),
        status_changes: status_changes(&records),
        total_samples: signal.len(),
        volume_mean,
        volume_std_dev: std_dev(&volumes),
    };

    print_stats_report(&report, format);
    Ok(SUCCESS)
}
