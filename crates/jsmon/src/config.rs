use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::Deserialize;
use thiserror::Error;

use jsdispatch::DEFAULT_DEVICE;

/// Config file looked up in the working directory when `--config` is absent.
pub(crate) const DEFAULT_CONFIG_FILE: &str = "jsmon.yaml";
pub(crate) const DEFAULT_TICK_MS: u64 = 100;

#[derive(Debug, Error)]
pub(crate) enum ConfigError {
    #[error("yaml deserialize error: {0}")]
    YamlDeserializeError(#[from] serde_yaml::Error),
    #[error("unsupported version: {0}")]
    UnsupportedVersion(u8),
    #[error("tick_ms must be greater than zero")]
    ZeroTick,
    #[error("failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Values read from the config file. Everything is optional.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub(crate) struct FileConfig {
    #[allow(dead_code)]
    version: u8,
    pub device: Option<PathBuf>,
    pub tick_ms: Option<u64>,
}

#[derive(Debug, Clone, Deserialize)]
struct VersionedConfig {
    version: u8,
}

/// Parse yaml config.
pub(crate) fn parse_config(input: &str) -> Result<FileConfig, ConfigError> {
    let raw: VersionedConfig = serde_yaml::from_str(input)?;
    match raw.version {
        1 => Ok(serde_yaml::from_str(input)?),
        v => Err(ConfigError::UnsupportedVersion(v)),
    }
}

/// Loads `path`, or the default file if it exists, or nothing.
pub(crate) fn load_config(path: Option<&Path>) -> Result<FileConfig, ConfigError> {
    let path = match path {
        Some(path) => path.to_path_buf(),
        None => {
            let fallback = PathBuf::from(DEFAULT_CONFIG_FILE);
            if !fallback.is_file() {
                return Ok(FileConfig::default());
            }
            fallback
        }
    };
    let input = fs::read_to_string(&path).map_err(|source| ConfigError::Read {
        path: path.clone(),
        source,
    })?;
    parse_config(&input)
}

/// Effective settings after flags override the file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Settings {
    pub device: PathBuf,
    pub tick: Duration,
}

impl Settings {
    pub(crate) fn resolve(
        file: &FileConfig,
        device: Option<PathBuf>,
        tick_ms: Option<u64>,
    ) -> Result<Self, ConfigError> {
        let device = device
            .or_else(|| file.device.clone())
            .unwrap_or_else(|| PathBuf::from(DEFAULT_DEVICE));
        let tick_ms = tick_ms.or(file.tick_ms).unwrap_or(DEFAULT_TICK_MS);
        if tick_ms == 0 {
            return Err(ConfigError::ZeroTick);
        }
        Ok(Self {
            device,
            tick: Duration::from_millis(tick_ms),
        })
    }
}
