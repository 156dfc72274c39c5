use crate::commands::{print_json, Context};
use crate::error::partial_failure;
use anyhow::{Context as _, Result};
use dnc_clean::{clean_data_root, CleanOptions, DataLayout};
use tracing::{debug, warn};

pub fn clean(ctx: &Context<'_>) -> Result<()> {
    let layout = DataLayout::new(ctx.data_root);
    if ctx.defaulted {
        warn!(
            path = %layout.root().display(),
            "data storage path not configured, using default"
        );
        layout
            .scaffold()
            .with_context(|| format!("create data directories under {}", layout.root().display()))?;
    }
    debug!(
        lists = %layout.dnc_lists().display(),
        source = %layout.to_be_cleaned().display(),
        dest = %layout.cleaned().display(),
        "data layout resolved"
    );

    let options = CleanOptions {
        max_workers: ctx.jobs,
    };
    let report = clean_data_root(&layout, options)
        .with_context(|| format!("clean data under {}", layout.root().display()))?;

    if ctx.json {
        print_json(&report)?;
    } else {
        println!(
            "Cleaned {} file(s): {} rows kept, {} rows excluded",
            report.cleaned.len(),
            report.rows_written(),
            report.rows_excluded()
        );
        if !report.failed.is_empty() {
            println!("Failed:");
            for failure in &report.failed {
                println!("- {}: {}", failure.input.display(), failure.error);
            }
        }
    }

    if !report.is_complete() {
        let total = report.cleaned.len() + report.failed.len();
        return Err(partial_failure(report.failed.len(), total));
    }
    Ok(())
}
