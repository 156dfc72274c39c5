use std::io;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CleanError {
    #[error("failed to read DNC list directory {path}: {source}")]
    ListDirectory {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to read DNC list file {path}: {source}")]
    ListFile {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to read source directory {path}: {source}")]
    SourceDirectory {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to prepare destination directory {path}: {source}")]
    DestinationDirectory {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("invalid layout (destination matches source): {0}")]
    InvalidLayout(PathBuf),
    #[error("failed to read input file {path}: {source}")]
    ReadInput {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to write output file {path}: {source}")]
    WriteOutput {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

pub type Result<T> = std::result::Result<T, CleanError>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CleanErrorKind {
    ListDirectory,
    ListFile,
    SourceDirectory,
    DestinationDirectory,
    InvalidLayout,
    ReadInput,
    WriteOutput,
}

impl CleanError {
    pub fn kind(&self) -> CleanErrorKind {
        match self {
            CleanError::ListDirectory { .. } => CleanErrorKind::ListDirectory,
            CleanError::ListFile { .. } => CleanErrorKind::ListFile,
            CleanError::SourceDirectory { .. } => CleanErrorKind::SourceDirectory,
            CleanError::DestinationDirectory { .. } => CleanErrorKind::DestinationDirectory,
            CleanError::InvalidLayout(_) => CleanErrorKind::InvalidLayout,
            CleanError::ReadInput { .. } => CleanErrorKind::ReadInput,
            CleanError::WriteOutput { .. } => CleanErrorKind::WriteOutput,
        }
    }
}
