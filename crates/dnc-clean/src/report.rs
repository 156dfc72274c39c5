use crate::cleaner::{CleanStats, FileJob};
use crate::error::CleanError;
use serde::Serialize;
use std::path::PathBuf;

#[derive(Debug, Clone, Serialize)]
pub struct FileOutcome {
    pub input: PathBuf,
    pub output: PathBuf,
    #[serde(flatten)]
    pub stats: CleanStats,
}

#[derive(Debug, Clone, Serialize)]
pub struct FileFailure {
    pub input: PathBuf,
    pub error: String,
}

/// Summary of one cleaning run, ordered by input path.
#[derive(Debug, Clone, Default, Serialize)]
pub struct CleanReport {
    pub workers: usize,
    pub cleaned: Vec<FileOutcome>,
    pub failed: Vec<FileFailure>,
}

impl CleanReport {
    pub(crate) fn record(&mut self, job: FileJob, result: Result<CleanStats, CleanError>) {
        match result {
            Ok(stats) => self.cleaned.push(FileOutcome {
                input: job.input,
                output: job.output,
                stats,
            }),
            Err(err) => self.failed.push(FileFailure {
                input: job.input,
                error: err.to_string(),
            }),
        }
    }

    pub fn is_complete(&self) -> bool {
        self.failed.is_empty()
    }

    pub fn rows_written(&self) -> usize {
        self.cleaned.iter().map(|file| file.stats.rows_written).sum()
    }

    pub fn rows_excluded(&self) -> usize {
        self.cleaned.iter().map(|file| file.stats.rows_excluded).sum()
    }
}
