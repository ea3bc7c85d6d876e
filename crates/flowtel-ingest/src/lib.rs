//! Record accumulation and the ingestion boundary.
//!
//! The producer (device or emulator) pushes raw frame buffers into a
//! [`FrameSink`], which decodes them and appends the survivors to a
//! [`RecordStore`]. Appends and snapshot reads may come from different
//! threads; a single lock keeps them consistent. There is no retry — a
//! frame that fails to decode is dropped and only counted.

pub mod error;
pub mod sink;
pub mod store;

pub use error::{IngestError, Result};
pub use sink::{FrameSink, SinkStats};
pub use store::RecordStore;
