use std::f64::consts::TAU;
use std::fs::File;

use bytes::BytesMut;
use flowtel_frame::{encode_record, FlowRecord, StreamWriter};

use crate::cmd::{GenArgs, Pattern};
use crate::exit::{frame_error, io_error, CliError, CliResult, SUCCESS, USAGE};
use crate::output::OutputFormat;

const SIGNAL_AMPLITUDE: f64 = 12_000.0;
const SIGNAL_PERIOD: f64 = 256.0;
const FRAME_INTERVAL_S: f64 = 0.5;

pub fn run(args: GenArgs, _format: OutputFormat) -> CliResult<i32> {
    if args.frames == 0 {
        return Err(CliError::new(USAGE, "frames must be greater than zero"));
    }

    let file = File::create(&args.out)
        .map_err(|err| io_error(&format!("failed creating {}", args.out.display()), err))?;
    let mut writer = StreamWriter::new(file);

    let mut volume = 0.0f64;
    let mut total_samples = 0usize;
    let mut wire = BytesMut::new();
    for index in 0..args.frames {
        let record = synth_record(&args, index, &mut volume);
        total_samples += record.samples.len();
        wire.clear();
        encode_record(&record, &mut wire);
        writer
            .write_frame(&wire)
            .map_err(|err| frame_error("write failed", err))?;
    }

    println!(
        "wrote {} frames ({} samples) to {}",
        args.frames,
        total_samples,
        args.out.display()
    );
    Ok(SUCCESS)
}

/// Flow rate and status word for one frame of a pattern.
///
/// Pulsing alternates blocks of four frames between full and throttled
/// flow, flipping the status word with them, so generated captures
/// exercise status-change detection.
fn flow_for(pattern: Pattern, index: u32) -> (i32, u32) {
    match pattern {
        Pattern::Constant => (1_500_000, 0x40),
        Pattern::Pulsing => {
            if (index / 4) % 2 == 0 {
                (2_400_000, 0x40)
            } else {
                (300_000, 0x44)
            }
        }
        Pattern::Zero => (0, 0x00),
    }
}

fn synth_record(args: &GenArgs, index: u32, volume: &mut f64) -> FlowRecord {
    let (flow_e6, status_wm) = flow_for(args.pattern, index);
    *volume += f64::from(flow_e6) / 1e6 * FRAME_INTERVAL_S;

    // One continuous sine wave chunked across frames: the sample clock
    // carries over from frame to frame.
    let count = usize::from(args.samples_per_frame);
    let base = u64::from(index) * u64::from(args.samples_per_frame);
    let mut samples = Vec::with_capacity(count);
    for k in 0..count {
        let value = if matches!(args.pattern, Pattern::Zero) {
            0.0
        } else {
            let t = (base + k as u64) as f64;
            SIGNAL_AMPLITUDE * (TAU * t / SIGNAL_PERIOD).sin()
        };
        samples.push(value as i16);
    }

    let declared = if args.lie {
        args.samples_per_frame.wrapping_add(7)
    } else {
        args.samples_per_frame
    };

    let tof_base = 12_500_000u32;
    let tof_skew = (flow_e6 / 1_000) as u32;

    FlowRecord {
        tof_up_e12: tof_base + tof_skew,
        tof_dn_e12: tof_base - tof_skew,
        amp_up: 117,
        amp_dn: 119,
        pwr_up: 3,
        pwr_dn: 3,
        pwr_min: 1,
        pwr_max: 9,
        vis_e14: 100_400_000_000_000,
        reyn_e6: 23_000_000_000,
        kf_e6: 1_000_250,
        ucv_e6: flow_e6 / 2,
        sos_e6: 1_482_000_000,
        flow_e6,
        flow_calculated: flow_e6 as f32 / 1e6,
        status_wm,
        temperature_e1: 215,
        fhl: 0,
        volume: *volume,
        array_length: declared,
        samples,
    }
}
