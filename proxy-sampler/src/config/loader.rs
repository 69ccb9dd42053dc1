//! Locating and reading the sampler's TOML config

use super::schema::Config;
use crate::error::{Result, SamplerError};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Environment variable naming an explicit config file
pub const CONFIG_ENV: &str = "PROXY_SAMPLER_CONFIG";

const CONFIG_SUBPATH: &str = "proxy-sampler/config.toml";

pub struct ConfigLoader;

impl ConfigLoader {
    /// Where to look for a config when none is given on the command line
    ///
    /// `$PROXY_SAMPLER_CONFIG` wins, then the XDG config directory, then
    /// `~/.config`. Without any of those, `config.toml` in the working
    /// directory.
    pub fn default_config_path() -> PathBuf {
        if let Some(path) = env::var_os(CONFIG_ENV) {
            return PathBuf::from(path);
        }

        let config_dir = env::var_os("XDG_CONFIG_HOME")
            .map(PathBuf::from)
            .or_else(|| env::var_os("HOME").map(|home| PathBuf::from(home).join(".config")));

        match config_dir {
            Some(dir) => dir.join(CONFIG_SUBPATH),
            None => PathBuf::from("config.toml"),
        }
    }

    /// Read and parse a config file that must exist
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Config> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path).map_err(|source| SamplerError::ConfigLoad {
            path: path.to_path_buf(),
            source,
        })?;

        let config = Self::parse(&contents)?;
        debug!("Loaded config from {:?}", path);
        Ok(config)
    }

    /// Parse config from TOML text; missing keys take their defaults
    pub fn parse(contents: &str) -> Result<Config> {
        Ok(toml::from_str(contents)?)
    }

    /// Config from the discovered location, or built-in defaults if absent
    pub fn load() -> Result<Config> {
        let path = Self::default_config_path();
        if !path.exists() {
            debug!("No config at {:?}, sampling with defaults", path);
            return Ok(Config::default());
        }
        Self::load_from_file(&path)
    }

    /// An explicit path must be readable; otherwise fall back to [`ConfigLoader::load`]
    pub fn load_or_default(path: Option<PathBuf>) -> Result<Config> {
        match path {
            Some(p) => Self::load_from_file(p),
            None => Self::load(),
        }
    }
}
