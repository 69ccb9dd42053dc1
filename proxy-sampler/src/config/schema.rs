//! Configuration schema types

use crate::sampler::SamplingPolicy;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Complete sampler configuration
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub files: FilesConfig,
    #[serde(default)]
    pub sampling: SamplingConfig,
}

/// Input and output locations
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct FilesConfig {
    /// Newline-delimited IPv4 addresses
    #[serde(default = "default_input")]
    pub input: PathBuf,
    /// Report destination, overwritten on every run
    #[serde(default = "default_output")]
    pub output: PathBuf,
}

fn default_input() -> PathBuf {
    PathBuf::from("proxies.txt")
}

fn default_output() -> PathBuf {
    PathBuf::from("results.txt")
}

impl Default for FilesConfig {
    fn default() -> Self {
        Self {
            input: default_input(),
            output: default_output(),
        }
    }
}

/// Selection counts and randomness
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct SamplingConfig {
    /// Cap per subnet, used when `total` is 0
    #[serde(default = "default_per_subnet")]
    pub per_subnet: usize,
    /// Cap across all subnets; 0 disables total mode
    #[serde(default = "default_total")]
    pub total: usize,
    /// Fixed seed for reproducible selections
    #[serde(default)]
    pub seed: Option<u64>,
}

fn default_per_subnet() -> usize {
    2
}

fn default_total() -> usize {
    100
}

impl Default for SamplingConfig {
    fn default() -> Self {
        Self {
            per_subnet: default_per_subnet(),
            total: default_total(),
            seed: None,
        }
    }
}

impl SamplingConfig {
    /// The policy these counts select
    pub fn policy(&self) -> SamplingPolicy {
        SamplingPolicy::from_counts(self.per_subnet, self.total)
    }
}
