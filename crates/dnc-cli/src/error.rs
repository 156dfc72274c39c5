use anyhow::Error;
use dnc_clean::error::{CleanError, CleanErrorKind};
use dnc_config::ConfigError;
use std::process::ExitCode;
use thiserror::Error as ThisError;

pub const EXIT_FAILURE: u8 = 1;
pub const EXIT_PARTIAL: u8 = 2;
pub const EXIT_INVALID_INPUT: u8 = 3;

#[derive(Debug, ThisError)]
pub enum CliError {
    #[error("invalid input: {0}")]
    InvalidInput(String),
    #[error("{failed} of {total} file(s) failed to clean")]
    PartialFailure { failed: usize, total: usize },
}

pub fn invalid_input(message: impl Into<String>) -> Error {
    CliError::InvalidInput(message.into()).into()
}

pub fn partial_failure(failed: usize, total: usize) -> Error {
    CliError::PartialFailure { failed, total }.into()
}

pub fn report_error(err: &Error, verbose: bool) {
    if verbose {
        eprintln!("error: {:#}", err);
    } else {
        eprintln!("error: {}", err);
    }
}

pub fn exit_code_for(err: &Error) -> ExitCode {
    ExitCode::from(exit_status_for(err))
}

fn exit_status_for(err: &Error) -> u8 {
    for cause in err.chain() {
        if let Some(cli_err) = cause.downcast_ref::<CliError>() {
            return match cli_err {
                CliError::InvalidInput(_) => EXIT_INVALID_INPUT,
                CliError::PartialFailure { .. } => EXIT_PARTIAL,
            };
        }
        if let Some(clean_err) = cause.downcast_ref::<CleanError>() {
            return clean_exit_code(clean_err);
        }
        if let Some(config_err) = cause.downcast_ref::<ConfigError>() {
            return config_exit_code(config_err);
        }
    }
    EXIT_FAILURE
}

fn clean_exit_code(err: &CleanError) -> u8 {
    match err.kind() {
        CleanErrorKind::InvalidLayout => EXIT_INVALID_INPUT,
        CleanErrorKind::ListDirectory
        | CleanErrorKind::ListFile
        | CleanErrorKind::SourceDirectory
        | CleanErrorKind::DestinationDirectory
        | CleanErrorKind::ReadInput
        | CleanErrorKind::WriteOutput => EXIT_FAILURE,
    }
}

fn config_exit_code(err: &ConfigError) -> u8 {
    match err {
        ConfigError::MissingHomeDir | ConfigError::Write { .. } => EXIT_FAILURE,
        ConfigError::InvalidConfigPath(_)
        | ConfigError::InvalidDataPath(_)
        | ConfigError::Read { .. } => EXIT_INVALID_INPUT,
    }
}
