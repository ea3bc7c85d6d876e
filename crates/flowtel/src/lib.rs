//! Flow-meter telemetry toolkit.
//!
//! flowtel decodes the binary frames emitted by a transit-time ultrasonic
//! flow meter, accumulates them in arrival order, and derives the summary
//! analytics used to validate device behavior — tolerating the known
//! firmware defect in the declared trailing-array length along the way.
//!
//! # Crate Structure
//!
//! - [`frame`] — Wire codec: record layout, decode/encode, capture streams
//! - [`ingest`] — Record store and ingestion sink (behind `ingest` feature)
//! - [`analytics`] — Signal reconstruction, statistics, CSV export (behind
//!   `analytics` feature)

/// Re-export wire codec types.
pub mod frame {
    pub use flowtel_frame::*;
}

/// Re-export ingestion types (requires `ingest` feature).
#[cfg(feature = "ingest")]
pub mod ingest {
    pub use flowtel_ingest::*;
}

/// Re-export analytics types (requires `analytics` feature).
#[cfg(feature = "analytics")]
pub mod analytics {
    pub use flowtel_analytics::*;
}
