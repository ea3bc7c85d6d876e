use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use flowtel_frame::{decode_record, FlowRecord};

use crate::error::{IngestError, Result};
use crate::store::RecordStore;

/// Running totals for one sink.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SinkStats {
    /// Frames decoded and appended.
    pub accepted: u64,
    /// Frames dropped because they failed to decode.
    pub rejected: u64,
}

/// Ingestion entry point between a frame producer and the record store.
///
/// The producer pushes raw buffers, one call per frame; the sink decodes
/// and, on success, appends. A buffer that fails to decode is dropped and
/// counted — the error is returned to the caller but must never tear down
/// the producer's delivery loop, so `on_frame` does not panic and the
/// store is left untouched by the failure.
#[derive(Debug, Default)]
pub struct FrameSink {
    store: Arc<RecordStore>,
    accepted: AtomicU64,
    rejected: AtomicU64,
}

impl FrameSink {
    /// Create a sink with its own empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a sink feeding a shared store.
    pub fn with_store(store: Arc<RecordStore>) -> Self {
        Self {
            store,
            accepted: AtomicU64::new(0),
            rejected: AtomicU64::new(0),
        }
    }

    /// Decode one raw frame and append it on success.
    ///
    /// Safe to call concurrently with [`FrameSink::records`]; decode itself
    /// touches no shared state.
    pub fn on_frame(&self, buf: &[u8]) -> Result<FlowRecord> {
        match decode_record(buf) {
            Ok(record) => {
                self.store.append(record.clone());
                self.accepted.fetch_add(1, Ordering::Relaxed);
                tracing::trace!(len = buf.len(), samples = record.samples.len(), "frame accepted");
                Ok(record)
            }
            Err(err) => {
                self.rejected.fetch_add(1, Ordering::Relaxed);
                tracing::warn!(len = buf.len(), error = %err, "dropping undecodable frame");
                Err(IngestError::Decode(err))
            }
        }
    }

    /// A point-in-time copy of all accepted records, in arrival order.
    pub fn records(&self) -> Vec<FlowRecord> {
        self.store.snapshot()
    }

    /// Reset the store. Counters keep running; they describe the sink's
    /// lifetime, not the current session.
    pub fn clear(&self) {
        self.store.clear();
    }

    /// Accept/reject totals since the sink was created.
    pub fn stats(&self) -> SinkStats {
        SinkStats {
            accepted: self.accepted.load(Ordering::Relaxed),
            rejected: self.rejected.load(Ordering::Relaxed),
        }
    }

    /// The store this sink feeds.
    pub fn store(&self) -> &Arc<RecordStore> {
        &self.store
    }
}
