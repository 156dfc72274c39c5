use anyhow::Result;
use serde::Serialize;
use std::io::{self, Write};
use std::num::NonZeroUsize;
use std::path::Path;

pub mod clean;

pub struct Context<'a> {
    pub data_root: &'a Path,
    /// The data root was just defaulted and persisted to the config file.
    pub defaulted: bool,
    pub json: bool,
    pub jobs: Option<NonZeroUsize>,
}

pub fn print_json<T: Serialize>(value: &T) -> Result<()> {
    let mut stdout = io::stdout().lock();
    serde_json::to_writer_pretty(&mut stdout, value)?;
    writeln!(stdout)?;
    Ok(())
}
