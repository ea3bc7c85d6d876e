//! Derived analytics over decoded telemetry records.
//!
//! Every function here takes a snapshot slice, never the live store — one
//! computation sees one consistent view regardless of concurrent ingest.

pub mod error;
pub mod export;
pub mod signal;
pub mod stats;

pub use error::{ExportError, Result};
pub use export::{save_signal_csv, write_signal_csv};
pub use signal::{reconstruct_signal, status_changes};
pub use stats::{flow_statistics, std_dev, FlowStats};
