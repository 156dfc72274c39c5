mod commands;
mod error;

use anyhow::{Context as _, Result};
use clap::Parser;
use std::num::NonZeroUsize;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::debug;

use crate::commands::{clean, Context};
use crate::error::{exit_code_for, invalid_input, report_error};
use dnc_config as config;

#[derive(Debug, Parser)]
#[command(
    name = "dnc-cleaner",
    version,
    about = "Remove Do Not Contact numbers from delimited data files"
)]
struct Cli {
    /// Config file holding the data storage path
    #[arg(long)]
    config: Option<PathBuf>,
    /// Use this data root instead of the configured one (not persisted)
    #[arg(long)]
    data_root: Option<PathBuf>,
    /// Maximum number of files cleaned at once
    #[arg(long)]
    jobs: Option<NonZeroUsize>,
    #[arg(long)]
    json: bool,
    #[arg(long, short)]
    verbose: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    let verbose = cli.verbose;
    init_logging(verbose);
    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            report_error(&err, verbose);
            exit_code_for(&err)
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    let Cli {
        config: config_path,
        data_root,
        jobs,
        json,
        verbose: _,
    } = cli;

    let (data_root, defaulted) = match data_root {
        Some(root) => {
            if root.as_os_str().is_empty() {
                return Err(invalid_input("data root cannot be empty"));
            }
            debug!(path = %root.display(), "data root given on command line");
            (root, false)
        }
        None => {
            let app_config = config::load(config_path).with_context(|| "load config")?;
            debug!(
                config = %app_config.config_path.display(),
                data_root = %app_config.data_root.display(),
                defaulted = app_config.defaulted,
                "config resolved"
            );
            (app_config.data_root, app_config.defaulted)
        }
    };

    let ctx = Context {
        data_root: &data_root,
        defaulted,
        json,
        jobs,
    };
    clean::clean(&ctx)
}

fn init_logging(verbose: bool) {
    use tracing_subscriber::{fmt, EnvFilter};
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    let _ = fmt()
        .with_env_filter(filter)
        .with_target(false)
        .without_time()
        .with_writer(std::io::stderr)
        .try_init();
}
