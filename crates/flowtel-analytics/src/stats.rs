use flowtel_frame::FlowRecord;
use serde::Serialize;

/// Min, max, and mean of the scaled flow field across a snapshot.
///
/// `flow_e6` is integer-valued on the wire; statistics are reported as real
/// numbers. An empty snapshot yields all zeroes rather than an error.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct FlowStats {
    pub min: f64,
    pub max: f64,
    pub avg: f64,
}

impl FlowStats {
    pub const ZERO: FlowStats = FlowStats {
        min: 0.0,
        max: 0.0,
        avg: 0.0,
    };
}

/// Flow statistics over a snapshot.
pub fn flow_statistics(records: &[FlowRecord]) -> FlowStats {
    if records.is_empty() {
        return FlowStats::ZERO;
    }

    let mut min = f64::INFINITY;
    let mut max = f64::NEG_INFINITY;
    let mut sum = 0.0;
    for record in records {
        let flow = f64::from(record.flow_e6);
        min = min.min(flow);
        max = max.max(flow);
        sum += flow;
    }

    FlowStats {
        min,
        max,
        avg: sum / records.len() as f64,
    }
}

/// Population standard deviation (divide by N, not N − 1).
///
/// Defined as 0.0 for an empty sequence rather than failing.
pub fn std_dev(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    let n = values.len() as f64;
    let mean = values.iter().sum::<f64>() / n;
    let variance = values.iter().map(|v| (v - mean) * (v - mean)).sum::<f64>() / n;
    variance.sqrt()
}
