use crate::cleaner::{clean_file, CleanStats, FileJob};
use crate::error::{CleanError, Result};
use crate::layout::list_files;
use crate::report::CleanReport;
use crossbeam_channel::unbounded;
use dnc_core::ExclusionSet;
use std::fs;
use std::num::NonZeroUsize;
use std::path::Path;
use std::thread;
use tracing::{debug, info, warn};

#[derive(Debug, Clone, Copy, Default)]
pub struct CleanOptions {
    /// Upper bound on concurrent file jobs. Defaults to the host's available
    /// parallelism.
    pub max_workers: Option<NonZeroUsize>,
}

pub fn default_parallelism() -> usize {
    thread::available_parallelism()
        .map(NonZeroUsize::get)
        .unwrap_or(1)
}

/// Cleans every file directly under `source_dir` into `dest_dir`.
///
/// Directory problems are fatal and reported before any file is touched.
/// Failures of individual files are collected in the report and do not stop
/// the remaining jobs.
pub fn run(
    source_dir: &Path,
    dest_dir: &Path,
    exclusions: &ExclusionSet,
    options: CleanOptions,
) -> Result<CleanReport> {
    let jobs = plan_jobs(source_dir, dest_dir)?;
    let workers = worker_count(options, jobs.len());
    info!(files = jobs.len(), workers, "cleaning files");

    let mut report = CleanReport {
        workers,
        ..CleanReport::default()
    };
    for (job, result) in run_jobs(jobs, exclusions, workers) {
        report.record(job, result);
    }

    info!(
        cleaned = report.cleaned.len(),
        failed = report.failed.len(),
        "cleaning finished"
    );
    Ok(report)
}

/// Prepares `dest_dir` and pairs each source file with its destination.
pub fn plan_jobs(source_dir: &Path, dest_dir: &Path) -> Result<Vec<FileJob>> {
    let source_err = |source| CleanError::SourceDirectory {
        path: source_dir.to_path_buf(),
        source,
    };
    let dest_err = |source| CleanError::DestinationDirectory {
        path: dest_dir.to_path_buf(),
        source,
    };

    let source_real = fs::canonicalize(source_dir).map_err(source_err)?;
    fs::create_dir_all(dest_dir).map_err(dest_err)?;
    let dest_real = fs::canonicalize(dest_dir).map_err(dest_err)?;
    if source_real == dest_real {
        return Err(CleanError::InvalidLayout(dest_dir.to_path_buf()));
    }

    let files = list_files(source_dir).map_err(source_err)?;
    Ok(files
        .into_iter()
        .filter_map(|input| {
            let name = input.file_name()?.to_owned();
            Some(FileJob {
                output: dest_dir.join(name),
                input,
            })
        })
        .collect())
}

fn worker_count(options: CleanOptions, jobs: usize) -> usize {
    let limit = options
        .max_workers
        .map(NonZeroUsize::get)
        .unwrap_or_else(default_parallelism);
    limit.min(jobs).max(1)
}

fn run_jobs(
    jobs: Vec<FileJob>,
    exclusions: &ExclusionSet,
    workers: usize,
) -> Vec<(FileJob, Result<CleanStats>)> {
    let (job_tx, job_rx) = unbounded();
    for (index, job) in jobs.iter().enumerate() {
        // The receiver is alive until the workers below finish.
        let _ = job_tx.send((index, job));
    }
    drop(job_tx);

    let (result_tx, result_rx) = unbounded();
    thread::scope(|scope| {
        for _ in 0..workers {
            let job_rx = job_rx.clone();
            let result_tx = result_tx.clone();
            scope.spawn(move || {
                for (index, job) in job_rx.iter() {
                    if result_tx.send((index, clean_job(job, exclusions))).is_err() {
                        break;
                    }
                }
            });
        }
    });
    drop(job_rx);
    drop(result_tx);

    let mut slots: Vec<Option<Result<CleanStats>>> = jobs.iter().map(|_| None).collect();
    for (index, result) in result_rx.iter() {
        slots[index] = Some(result);
    }
    jobs.into_iter()
        .zip(slots)
        .filter_map(|(job, slot)| slot.map(|result| (job, result)))
        .collect()
}

fn clean_job(job: &FileJob, exclusions: &ExclusionSet) -> Result<CleanStats> {
    debug!(
        input = %job.input.display(),
        output = %job.output.display(),
        "cleaning file"
    );
    let result = clean_file(job, exclusions);
    match &result {
        Ok(stats) => debug!(
            input = %job.input.display(),
            written = stats.rows_written,
            excluded = stats.rows_excluded,
            header = stats.header,
            "file cleaned"
        ),
        Err(err) => warn!(input = %job.input.display(), error = %err, "file failed"),
    }
    result
}
