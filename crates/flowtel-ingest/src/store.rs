use std::sync::{Mutex, MutexGuard, PoisonError};

use flowtel_frame::FlowRecord;

/// Ordered accumulator of decoded records.
///
/// Insertion order is arrival order; there is no deduplication and no
/// identity beyond position. Appends and snapshots may come from different
/// threads (the producer delivers frames from its own timer context), so a
/// single lock serializes both. Readers always get an independent copy —
/// the live vector is never exposed.
#[derive(Debug, Default)]
pub struct RecordStore {
    records: Mutex<Vec<FlowRecord>>,
}

impl RecordStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a record at the tail.
    pub fn append(&self, record: FlowRecord) {
        self.lock().push(record);
    }

    /// Remove every record. Idempotent; used to reset state between
    /// logical sessions.
    pub fn clear(&self) {
        self.lock().clear();
    }

    /// A point-in-time copy of the store's contents, in arrival order.
    ///
    /// Reflects all appends completed before the call and does not block
    /// future appends once the copy is made.
    pub fn snapshot(&self) -> Vec<FlowRecord> {
        self.lock().clone()
    }

    /// Number of records currently held.
    pub fn len(&self) -> usize {
        self.lock().len()
    }

    /// Whether the store holds no records.
    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    fn lock(&self) -> MutexGuard<'_, Vec<FlowRecord>> {
        // A poisoned guard still holds a valid vector; recover it.
        self.records.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use std::thread;

    use super::*;

    fn record_with_flow(flow_e6: i32) -> FlowRecord {
        FlowRecord {
            flow_e6,
            ..FlowRecord::default()
        }
    }

    #[test]
    fn append_preserves_arrival_order() {
        let store = RecordStore::new();
        for flow in [10, 20, 30] {
            store.append(record_with_flow(flow));
        }

        let snapshot = store.snapshot();
        assert_eq!(snapshot.len(), 3);
        let flows: Vec<i32> = snapshot.iter().map(|r| r.flow_e6).collect();
        assert_eq!(flows, vec![10, 20, 30]);
    }

    #[test]
    fn clear_empties_and_is_idempotent() {
        let store = RecordStore::new();
        store.append(record_with_flow(1));
        store.append(record_with_flow(2));

        store.clear();
        assert!(store.snapshot().is_empty());

        store.clear();
        assert!(store.is_empty());
    }

    #[test]
    fn snapshot_is_a_defensive_copy() {
        let store = RecordStore::new();
        store.append(record_with_flow(5));

        let mut snapshot = store.snapshot();
        snapshot.push(record_with_flow(99));
        snapshot[0].flow_e6 = -1;

        assert_eq!(store.len(), 1);
        assert_eq!(store.snapshot()[0].flow_e6, 5);
    }

    #[test]
    fn concurrent_appends_and_snapshots() {
        let store = Arc::new(RecordStore::new());

        let producer = {
            let store = Arc::clone(&store);
            thread::spawn(move || {
                for flow in 0..256 {
                    store.append(record_with_flow(flow));
                }
            })
        };

        // Snapshots taken mid-ingest must always be a prefix in order.
        for _ in 0..32 {
            let snapshot = store.snapshot();
            for (i, record) in snapshot.iter().enumerate() {
                assert_eq!(record.flow_e6, i as i32);
            }
        }

        producer.join().expect("producer thread should finish");
        assert_eq!(store.len(), 256);
    }
}
