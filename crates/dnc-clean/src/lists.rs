use crate::error::{CleanError, Result};
use crate::layout::list_files;
use crate::lines::strip_bom;
use dnc_core::ExclusionSet;
use std::collections::HashSet;
use std::fs;
use std::path::Path;
use tracing::{debug, info, warn};

/// Loads every file directly under `list_dir` into an [`ExclusionSet`], one
/// trimmed entry per line. Lines end at `\n`, `\r\n` or a bare `\r`, and a
/// leading byte order mark is dropped. Entries are otherwise taken verbatim;
/// blank lines are skipped.
pub fn load_exclusion_set(list_dir: &Path) -> Result<ExclusionSet> {
    let files = list_files(list_dir).map_err(|source| CleanError::ListDirectory {
        path: list_dir.to_path_buf(),
        source,
    })?;
    if files.is_empty() {
        warn!(path = %list_dir.display(), "no DNC list files found");
    }

    let mut numbers = HashSet::new();
    for file in files {
        let data = fs::read(&file).map_err(|source| CleanError::ListFile {
            path: file.clone(),
            source,
        })?;
        let before = numbers.len();
        let text = String::from_utf8_lossy(&data);
        for line in strip_bom(&text).split(['\r', '\n']) {
            let entry = line.trim();
            if entry.is_empty() {
                continue;
            }
            numbers.insert(entry.to_string());
        }
        debug!(
            path = %file.display(),
            added = numbers.len() - before,
            "loaded DNC list"
        );
    }

    info!(entries = numbers.len(), "exclusion set ready");
    Ok(ExclusionSet::from(numbers))
}
