use std::path::PathBuf;

use clap::{Args, Subcommand, ValueEnum};

use crate::exit::CliResult;
use crate::output::OutputFormat;

pub mod decode;
pub mod export;
pub mod gen;
pub mod input;
pub mod stats;
pub mod version;

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Decode frame files and print the records.
    Decode(DecodeArgs),
    /// Ingest frames and print aggregate statistics.
    Stats(StatsArgs),
    /// Reconstruct the waveform and write it as CSV.
    Export(ExportArgs),
    /// Generate a synthetic capture.
    Gen(GenArgs),
    /// Show version information.
    Version(VersionArgs),
}

pub fn run(command: Command, format: OutputFormat) -> CliResult<i32> {
    match command {
        Command::Decode(args) => decode::run(args, format),
        Command::Stats(args) => stats::run(args, format),
        Command::Export(args) => export::run(args, format),
        Command::Gen(args) => gen::run(args, format),
        Command::Version(args) => version::run(args),
    }
}

#[derive(Args, Debug)]
pub struct DecodeArgs {
    /// Input files (one raw frame per file).
    #[arg(required = true)]
    pub files: Vec<PathBuf>,
    /// Treat inputs as capture streams instead of single raw frames.
    #[arg(long)]
    pub stream: bool,
}

#[derive(Args, Debug)]
pub struct StatsArgs {
    /// Input files (one raw frame per file).
    #[arg(required = true)]
    pub files: Vec<PathBuf>,
    /// Treat inputs as capture streams instead of single raw frames.
    #[arg(long)]
    pub stream: bool,
}

#[derive(Args, Debug)]
pub struct ExportArgs {
    /// Input files (one raw frame per file).
    #[arg(required = true)]
    pub files: Vec<PathBuf>,
    /// Treat inputs as capture streams instead of single raw frames.
    #[arg(long)]
    pub stream: bool,
    /// Output CSV path.
    #[arg(long, short = 'o')]
    pub out: PathBuf,
}

#[derive(Args, Debug)]
pub struct GenArgs {
    /// Output capture file.
    #[arg(long, short = 'o')]
    pub out: PathBuf,
    /// Flow pattern to synthesize.
    #[arg(long, value_enum, default_value = "constant")]
    pub pattern: Pattern,
    /// Number of frames.
    #[arg(long, default_value_t = 16)]
    pub frames: u32,
    /// Waveform samples per frame.
    #[arg(long, default_value_t = 32)]
    pub samples_per_frame: u16,
    /// Declare a wrong sample count in each header, like affected firmware.
    #[arg(long)]
    pub lie: bool,
}

/// Synthetic flow patterns, matching the captures used to validate device
/// behavior.
#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum Pattern {
    Constant,
    Pulsing,
    Zero,
}

#[derive(Args, Debug, Default)]
pub struct VersionArgs {
    /// Show extended build provenance.
    #[arg(long)]
    pub extended: bool,
}
