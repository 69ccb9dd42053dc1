//! Error types for sampler operations

use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, SamplerError>;

/// Exit status for malformed input data (sysexits `EX_DATAERR`)
pub const EXIT_DATA_ERROR: u8 = 65;
/// Exit status for file I/O failures (sysexits `EX_IOERR`)
pub const EXIT_IO_ERROR: u8 = 74;
/// Exit status for configuration problems (sysexits `EX_CONFIG`)
pub const EXIT_CONFIG_ERROR: u8 = 78;

#[derive(Debug, Error)]
pub enum SamplerError {
    #[error("invalid IP address on line {line}: {value}")]
    InvalidAddress { line: usize, value: String },

    #[error("I/O error on {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to load config from {path}: {source}")]
    ConfigLoad {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse config: {0}")]
    ConfigParse(#[from] toml::de::Error),

    #[error("Configuration validation error: {0}")]
    Validation(#[from] ValidationError),
}

impl SamplerError {
    /// Tag an I/O error with the file it happened on
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        SamplerError::Io {
            path: path.into(),
            source,
        }
    }

    /// Process exit status for this error
    pub fn exit_code(&self) -> u8 {
        match self {
            SamplerError::InvalidAddress { .. } => EXIT_DATA_ERROR,
            SamplerError::Io { .. } => EXIT_IO_ERROR,
            SamplerError::ConfigLoad { .. }
            | SamplerError::ConfigParse(_)
            | SamplerError::Validation(_) => EXIT_CONFIG_ERROR,
        }
    }
}

#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("input and output are the same file: {path}")]
    SameInputOutput { path: PathBuf },
}
