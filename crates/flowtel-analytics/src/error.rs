/// Errors that can occur while exporting derived data.
#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    /// CSV serialization failed.
    #[error("csv write error: {0}")]
    Csv(#[from] csv::Error),

    /// An I/O error occurred while creating or writing the output file.
    #[error("export I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, ExportError>;
