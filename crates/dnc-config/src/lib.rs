use std::env;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

const APP_DIR: &str = "dnc-cleaner";
const CONFIG_FILENAME: &str = "config.ini";
const DATA_DIRNAME: &str = "Data";

/// Resolved configuration for a cleaning run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub config_path: PathBuf,
    pub data_root: PathBuf,
    /// Set when the config file was absent or blank and the default data root
    /// was written back to it.
    pub defaulted: bool,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing home directory")]
    MissingHomeDir,
    #[error("invalid config path: {0}")]
    InvalidConfigPath(PathBuf),
    #[error("invalid data path: {0}")]
    InvalidDataPath(PathBuf),
    #[error("failed to read config file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to write config file {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

pub type Result<T> = std::result::Result<T, ConfigError>;

pub fn load(config_path: Option<PathBuf>) -> Result<AppConfig> {
    let path = resolve_config_path(config_path)?;
    if let Some(data_root) = read_data_root(&path)? {
        return Ok(AppConfig {
            config_path: path,
            data_root,
            defaulted: false,
        });
    }

    let data_root = default_data_root()?;
    write_data_root(&path, &data_root)?;
    Ok(AppConfig {
        config_path: path,
        data_root,
        defaulted: true,
    })
}

pub fn resolve_config_path(custom: Option<PathBuf>) -> Result<PathBuf> {
    match custom {
        Some(path) => {
            if path.as_os_str().is_empty() {
                return Err(ConfigError::InvalidConfigPath(path));
            }
            Ok(path)
        }
        None => {
            let base = if let Some(dir) = env::var_os("XDG_CONFIG_HOME") {
                let path = PathBuf::from(dir);
                if path.as_os_str().is_empty() {
                    return Err(ConfigError::InvalidConfigPath(path));
                }
                path
            } else {
                let home = dirs::home_dir().ok_or(ConfigError::MissingHomeDir)?;
                home.join(".config")
            };
            Ok(base.join(APP_DIR).join(CONFIG_FILENAME))
        }
    }
}

pub fn default_data_root() -> Result<PathBuf> {
    let base = if let Some(dir) = env::var_os("XDG_DATA_HOME") {
        let path = PathBuf::from(dir);
        if path.as_os_str().is_empty() {
            return Err(ConfigError::InvalidDataPath(path));
        }
        path
    } else {
        let home = dirs::home_dir().ok_or(ConfigError::MissingHomeDir)?;
        home.join(".local").join("share")
    };
    Ok(base.join(APP_DIR).join(DATA_DIRNAME))
}

/// Reads the data root stored at `path`. A missing file and a blank file both
/// yield `None`; any other read failure is an error.
pub fn read_data_root(path: &Path) -> Result<Option<PathBuf>> {
    let contents = match fs::read_to_string(path) {
        Ok(contents) => contents,
        Err(err) if err.kind() == io::ErrorKind::NotFound => return Ok(None),
        Err(source) => {
            return Err(ConfigError::Read {
                path: path.to_path_buf(),
                source,
            })
        }
    };
    let trimmed = contents.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }
    Ok(Some(PathBuf::from(trimmed)))
}

pub fn write_data_root(path: &Path, data_root: &Path) -> Result<()> {
    let write_err = |source| ConfigError::Write {
        path: path.to_path_buf(),
        source,
    };
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(write_err)?;
    }
    fs::write(path, data_root.as_os_str().as_encoded_bytes()).map_err(write_err)
}
