use crate::error::{CleanError, Result};
use crate::lines::{read_line, strip_bom, strip_line_ending};
use dnc_core::{is_header_row, row_is_excluded, ExclusionSet};
use serde::Serialize;
use std::fs::File;
use std::io::{self, BufRead, BufReader, BufWriter, Write};
use std::path::PathBuf;
use thiserror::Error;

/// One input file and the path its cleaned copy is written to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FileJob {
    pub input: PathBuf,
    pub output: PathBuf,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct CleanStats {
    pub rows_read: usize,
    pub rows_written: usize,
    pub rows_excluded: usize,
    pub header: bool,
}

#[derive(Debug, Error)]
pub enum StreamError {
    #[error("read error: {0}")]
    Read(#[source] io::Error),
    #[error("write error: {0}")]
    Write(#[source] io::Error),
}

impl StreamError {
    fn into_clean_error(self, job: &FileJob) -> CleanError {
        match self {
            StreamError::Read(source) => CleanError::ReadInput {
                path: job.input.clone(),
                source,
            },
            StreamError::Write(source) => CleanError::WriteOutput {
                path: job.output.clone(),
                source,
            },
        }
    }
}

pub fn clean_file(job: &FileJob, exclusions: &ExclusionSet) -> Result<CleanStats> {
    let input = File::open(&job.input).map_err(|source| CleanError::ReadInput {
        path: job.input.clone(),
        source,
    })?;
    let output = File::create(&job.output).map_err(|source| CleanError::WriteOutput {
        path: job.output.clone(),
        source,
    })?;

    let mut reader = BufReader::new(input);
    let mut writer = BufWriter::new(output);
    let stats = clean_stream(&mut reader, &mut writer, exclusions)
        .map_err(|err| err.into_clean_error(job))?;
    writer.flush().map_err(|source| CleanError::WriteOutput {
        path: job.output.clone(),
        source,
    })?;
    Ok(stats)
}

/// Copies `reader` to `writer`, dropping every row that carries a listed
/// number. Only the first line may be a header. Lines end at `\n`, `\r\n` or
/// a bare `\r`; kept lines are written back byte for byte, line endings
/// included.
pub fn clean_stream<R, W>(
    reader: &mut R,
    writer: &mut W,
    exclusions: &ExclusionSet,
) -> std::result::Result<CleanStats, StreamError>
where
    R: BufRead,
    W: Write,
{
    let mut stats = CleanStats::default();
    let mut buf = Vec::new();
    let mut first = true;

    loop {
        buf.clear();
        let read = read_line(reader, &mut buf).map_err(StreamError::Read)?;
        if read == 0 {
            break;
        }
        stats.rows_read += 1;

        let line = String::from_utf8_lossy(strip_line_ending(&buf));
        let text = if first { strip_bom(&line) } else { &*line };
        if std::mem::take(&mut first) && is_header_row(text) {
            stats.header = true;
        } else if row_is_excluded(text, exclusions) {
            stats.rows_excluded += 1;
            continue;
        }

        writer.write_all(&buf).map_err(StreamError::Write)?;
        stats.rows_written += 1;
    }

    Ok(stats)
}

#[cfg(test)]
mod tests {
    use super::{clean_stream, CleanStats, StreamError};
    use dnc_core::ExclusionSet;
    use std::error::Error as _;
    use std::io::{self, Write};

    struct FullDisk;

    impl Write for FullDisk {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::Other, "disk full"))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    fn clean(input: &str, listed: &[&str]) -> (String, CleanStats) {
        let exclusions: ExclusionSet = listed.iter().copied().collect();
        let mut reader = input.as_bytes();
        let mut out = Vec::new();
        let stats = clean_stream(&mut reader, &mut out, &exclusions).expect("clean");
        (String::from_utf8(out).expect("utf8"), stats)
    }

    #[test]
    fn header_is_kept_and_listed_rows_are_dropped() {
        let input = "Name,Phone,State\nJohn,5551234567,NY\nJane,5559876543,CA\n";
        let (out, stats) = clean(input, &["5551234567"]);
        assert_eq!(out, "Name,Phone,State\nJane,5559876543,CA\n");
        assert_eq!(
            stats,
            CleanStats {
                rows_read: 3,
                rows_written: 2,
                rows_excluded: 1,
                header: true,
            }
        );
    }

    #[test]
    fn numeric_first_line_is_filtered_as_data() {
        let input = "5551234567,5559876543\n5550000000,5550000001\n";
        let (out, stats) = clean(input, &["5559876543"]);
        assert_eq!(out, "5550000000,5550000001\n");
        assert!(!stats.header);
        assert_eq!(stats.rows_excluded, 1);
    }

    #[test]
    fn header_shaped_later_lines_are_still_data() {
        let input = "Name,Phone\nPhone,5551234567\nName,Phone\n";
        let (out, _) = clean(input, &["5551234567"]);
        assert_eq!(out, "Name,Phone\nName,Phone\n");
    }

    #[test]
    fn listed_header_cell_is_not_filtered() {
        let input = "Name,5551234567\nJohn,5551234567\n";
        let (out, stats) = clean(input, &["5551234567"]);
        assert_eq!(out, "Name,5551234567\n");
        assert!(stats.header);
    }

    #[test]
    fn empty_exclusions_copy_input_verbatim() {
        let input = "Name,Phone\r\nJohn,5551234567\r\n\r\nlast,line";
        let (out, stats) = clean(input, &[]);
        assert_eq!(out, input);
        assert_eq!(stats.rows_read, 4);
        assert_eq!(stats.rows_excluded, 0);
    }

    #[test]
    fn crlf_rows_are_matched() {
        let input = "Name,Phone\r\nJohn,5551234567\r\nJane,5559876543\r\n";
        let (out, _) = clean(input, &["5551234567"]);
        assert_eq!(out, "Name,Phone\r\nJane,5559876543\r\n");
    }

    #[test]
    fn bare_carriage_return_rows_are_filtered() {
        let input = "Name,Phone\rJohn,5551234567\rJane,5559876543\r";
        let (out, stats) = clean(input, &["5551234567"]);
        assert_eq!(out, "Name,Phone\rJane,5559876543\r");
        assert_eq!(
            stats,
            CleanStats {
                rows_read: 3,
                rows_written: 2,
                rows_excluded: 1,
                header: true,
            }
        );
    }

    #[test]
    fn mixed_line_endings_are_preserved() {
        let input = "Name,Phone\r\nJohn,5551234567\rJane,5559876543\nAda,5550001111";
        let (out, _) = clean(input, &["5551234567"]);
        assert_eq!(out, "Name,Phone\r\nJane,5559876543\nAda,5550001111");
    }

    #[test]
    fn final_line_without_newline_is_matched() {
        let input = "Name,Phone\nJohn,5551234567";
        let (out, stats) = clean(input, &["5551234567"]);
        assert_eq!(out, "Name,Phone\n");
        assert_eq!(stats.rows_excluded, 1);
    }

    #[test]
    fn byte_order_mark_does_not_hide_numeric_first_line() {
        let input = "\u{feff}5551234567\n5559876543\n";
        let (out, stats) = clean(input, &["5559876543"]);
        assert!(!stats.header);
        assert_eq!(out, "\u{feff}5551234567\n");
    }

    #[test]
    fn byte_order_mark_does_not_hide_listed_first_row() {
        let input = "\u{feff}5551234567\n5559876543\n";
        let (out, stats) = clean(input, &["5551234567"]);
        assert_eq!(out, "5559876543\n");
        assert_eq!(stats.rows_excluded, 1);
    }

    #[test]
    fn cleaning_twice_is_stable() {
        let input = "Name,Phone\nJohn,5551234567\nJane,5559876543\n";
        let (once, _) = clean(input, &["5551234567"]);
        let (twice, stats) = clean(&once, &["5551234567"]);
        assert_eq!(once, twice);
        assert_eq!(stats.rows_excluded, 0);
    }

    #[test]
    fn empty_input_writes_nothing() {
        let (out, stats) = clean("", &["5551234567"]);
        assert!(out.is_empty());
        assert_eq!(stats, CleanStats::default());
    }

    #[test]
    fn write_failure_surfaces_as_stream_error() {
        let exclusions = ExclusionSet::new();
        let mut reader = "Name,Phone\n".as_bytes();
        let err = clean_stream(&mut reader, &mut FullDisk, &exclusions).unwrap_err();
        assert!(matches!(err, StreamError::Write(_)));
        assert_eq!(err.to_string(), "write error: disk full");
        assert!(err.source().is_some());
    }
}
