/// Errors surfaced at the ingestion boundary.
#[derive(Debug, thiserror::Error)]
pub enum IngestError {
    /// A frame failed to decode and was dropped. Local to that one frame;
    /// the store and the rest of the stream are unaffected.
    #[error("frame rejected: {0}")]
    Decode(#[from] flowtel_frame::FrameError),
}

pub type Result<T> = std::result::Result<T, IngestError>;
