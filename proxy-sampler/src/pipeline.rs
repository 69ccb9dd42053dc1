//! End-to-end run: clear output, load, sample, write

use crate::config::Config;
use crate::error::Result;
use crate::loader::AddressLoader;
use crate::report::ReportWriter;
use crate::sampler::Sampler;
use std::path::PathBuf;
use tracing::info;

/// Outcome of a successful run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Summary {
    pub output: PathBuf,
    pub loaded: usize,
    pub selected: usize,
    pub subnets: usize,
}

pub struct Pipeline;

impl Pipeline {
    /// Run the whole sampling job described by `config`
    ///
    /// The output file is emptied first, so a run that fails later
    /// leaves it empty rather than holding a stale report.
    pub fn run(config: &Config) -> Result<Summary> {
        let files = &config.files;
        ReportWriter::clear(&files.output)?;

        let groups = AddressLoader::load(&files.input)?;
        info!(
            "Loaded {} addresses in {} subnets",
            groups.address_count(),
            groups.len()
        );

        let policy = config.sampling.policy();
        let selected = match config.sampling.seed {
            Some(seed) => Sampler::seeded(seed).sample(&groups, policy),
            None => Sampler::from_entropy().sample(&groups, policy),
        };
        info!(
            "Selected {} addresses in {} subnets ({})",
            selected.address_count(),
            selected.len(),
            policy
        );

        ReportWriter::write(&files.output, &selected)?;

        Ok(Summary {
            output: files.output.clone(),
            loaded: groups.address_count(),
            selected: selected.address_count(),
            subnets: selected.len(),
        })
    }
}
