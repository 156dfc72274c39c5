pub mod cleaner;
pub mod error;
pub mod layout;
pub mod lines;
pub mod lists;
pub mod orchestrator;
pub mod report;

pub use cleaner::{clean_file, clean_stream, CleanStats, FileJob};
pub use error::{CleanError, CleanErrorKind, Result};
pub use layout::DataLayout;
pub use lists::load_exclusion_set;
pub use orchestrator::{default_parallelism, run, CleanOptions};
pub use report::{CleanReport, FileFailure, FileOutcome};

/// Loads the DNC lists under `layout` and cleans every pending file.
pub fn clean_data_root(layout: &DataLayout, options: CleanOptions) -> Result<CleanReport> {
    let exclusions = load_exclusion_set(&layout.dnc_lists())?;
    run(
        &layout.to_be_cleaned(),
        &layout.cleaned(),
        &exclusions,
        options,
    )
}
