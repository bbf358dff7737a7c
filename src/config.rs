//! Blueprint configuration.
//!
//! Loaded from `~/.blueprint/config.toml`, or from an explicit `--config` path.
//! Every key is optional: a key left out (or set to an empty string) falls
//! back to the built-in form default.

use std::path::{Path, PathBuf};
use std::{fs, io};

use log::debug;
use serde::{Deserialize, Serialize};

use crate::model::FormState;

/// Errors that can occur while loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("no config file found at {}", .0.display())]
    NotFound(PathBuf),

    #[error("failed to read {}: {source}", .path.display())]
    Read { path: PathBuf, source: io::Error },

    #[error("invalid config at {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },
}

pub type Result<T> = core::result::Result<T, ConfigError>;

/// Form defaults read from the config file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
pub struct Config {
    /// Audience used when `--audience` is not given.
    pub audience: Option<String>,

    /// Platform used when `--platform` is not given.
    pub platform: Option<String>,

    /// Goal used when `--goal` is not given.
    pub goal: Option<String>,

    /// Vibe used when `--vibe` is not given.
    pub vibe: Option<String>,
}

impl Config {
    /// Load config from `explicit`, or from the default path.
    ///
    /// A missing file at the default path yields the default config.
    /// A missing file at an explicit path is an error.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        match explicit {
            Some(path) => Self::load_from(path),
            None => match Self::path() {
                Some(path) if path.exists() => Self::load_from(&path),
                _ => {
                    debug!("no config file, using built-in defaults");
                    Ok(Self::default())
                }
            },
        }
    }

    /// Load config from a specific file.
    pub fn load_from(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path).map_err(|source| {
            if source.kind() == io::ErrorKind::NotFound {
                ConfigError::NotFound(path.to_path_buf())
            } else {
                ConfigError::Read {
                    path: path.to_path_buf(),
                    source,
                }
            }
        })?;

        let config = toml::from_str(&contents).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;

        debug!("loaded config from {}", path.display());
        Ok(config)
    }

    /// The config file path: `~/.blueprint/config.toml`.
    pub fn path() -> Option<PathBuf> {
        dirs::home_dir().map(|h| h.join(".blueprint").join("config.toml"))
    }

    /// The form defaults this config implies.
    ///
    /// The niche is never configured; it always starts empty.
    pub fn form_defaults(&self) -> FormState {
        let builtin = FormState::default();
        FormState {
            niche: String::new(),
            audience: non_empty(self.audience.as_deref()).unwrap_or(builtin.audience),
            platform: non_empty(self.platform.as_deref()).unwrap_or(builtin.platform),
            goal: non_empty(self.goal.as_deref()).unwrap_or(builtin.goal),
            vibe: non_empty(self.vibe.as_deref()).unwrap_or(builtin.vibe),
        }
    }
}

fn non_empty(value: Option<&str>) -> Option<String> {
    value.filter(|s| !s.trim().is_empty()).map(String::from)
}
