use flowtel_frame::FlowRecord;

/// Concatenate every record's trailing samples, in arrival order, into one
/// flat sequence.
///
/// The device streams a long waveform in chunks; as long as records are in
/// arrival order the concatenation reassembles it with no reordering, no
/// gaps, and no duplication.
pub fn reconstruct_signal(records: &[FlowRecord]) -> Vec<i16> {
    let total: usize = records.iter().map(|r| r.samples.len()).sum();
    let mut signal = Vec::with_capacity(total);
    for record in records {
        signal.extend_from_slice(&record.samples);
    }
    signal
}

/// Indices where the status word changed from the previous record.
///
/// Returned indices are successor positions: `i` means record `i` differs
/// from record `i − 1`. Empty for fewer than two records.
pub fn status_changes(records: &[FlowRecord]) -> Vec<usize> {
    records
        .windows(2)
        .enumerate()
        .filter(|(_, pair)| pair[0].status_wm != pair[1].status_wm)
        .map(|(i, _)| i + 1)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record_with_samples(samples: Vec<i16>) -> FlowRecord {
        FlowRecord {
            samples,
            ..FlowRecord::default()
        }
    }

    fn record_with_status(status_wm: u32) -> FlowRecord {
        FlowRecord {
            status_wm,
            ..FlowRecord::default()
        }
    }

    #[test]
    fn reconstruction_concatenates_in_order() {
        let records = vec![
            record_with_samples(vec![1, 2]),
            record_with_samples(vec![3]),
            record_with_samples(vec![]),
            record_with_samples(vec![4, 5, 6]),
        ];
        assert_eq!(reconstruct_signal(&records), vec![1, 2, 3, 4, 5, 6]);
    }

    #[test]
    fn reconstruction_of_nothing_is_empty() {
        assert!(reconstruct_signal(&[]).is_empty());
        assert!(reconstruct_signal(&[record_with_samples(vec![])]).is_empty());
    }

    #[test]
    fn reconstruction_length_is_sum_of_counts() {
        let records = vec![
            record_with_samples(vec![0; 13]),
            record_with_samples(vec![0; 7]),
        ];
        assert_eq!(reconstruct_signal(&records).len(), 20);
    }

    #[test]
    fn status_changes_report_successor_indices() {
        let records: Vec<FlowRecord> = [0u32, 0, 5, 5, 0]
            .into_iter()
            .map(record_with_status)
            .collect();
        assert_eq!(status_changes(&records), vec![2, 4]);
    }

    #[test]
    fn stable_status_has_no_changes() {
        let records: Vec<FlowRecord> = [3u32, 3, 3].into_iter().map(record_with_status).collect();
        assert!(status_changes(&records).is_empty());
    }

    #[test]
    fn short_snapshots_have_no_changes() {
        assert!(status_changes(&[]).is_empty());
        assert!(status_changes(&[record_with_status(9)]).is_empty());
    }
}
