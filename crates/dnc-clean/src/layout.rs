use std::fs;
use std::io;
use std::path::{Path, PathBuf};

pub const DNC_LISTS_DIR: &str = "DNC-Lists";
pub const TO_BE_CLEANED_DIR: &str = "TOBECLEANED";
pub const CLEANED_DIR: &str = "CLEANEDDATA";

/// Directory layout under a data root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DataLayout {
    root: PathBuf,
}

impl DataLayout {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn dnc_lists(&self) -> PathBuf {
        self.root.join(DNC_LISTS_DIR)
    }

    pub fn to_be_cleaned(&self) -> PathBuf {
        self.root.join(TO_BE_CLEANED_DIR)
    }

    pub fn cleaned(&self) -> PathBuf {
        self.root.join(CLEANED_DIR)
    }

    pub fn scaffold(&self) -> io::Result<()> {
        for dir in [self.dnc_lists(), self.to_be_cleaned(), self.cleaned()] {
            fs::create_dir_all(dir)?;
        }
        Ok(())
    }
}

/// Regular files directly under `dir`, sorted by path. Subdirectories are
/// skipped; symlinks are followed.
pub fn list_files(dir: &Path) -> io::Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    for entry in fs::read_dir(dir)? {
        let path = entry?.path();
        if path.is_file() {
            files.push(path);
        }
    }
    files.sort();
    Ok(files)
}
