//! Configuration validation

use super::schema::Config;
use crate::error::{Result, ValidationError};

pub struct ConfigValidator;

impl ConfigValidator {
    /// Validate entire configuration
    pub fn validate(config: &Config) -> Result<()> {
        Self::validate_paths(config)?;
        Ok(())
    }

    /// The output is truncated before the input is read, so they must differ
    fn validate_paths(config: &Config) -> Result<()> {
        let files = &config.files;
        let same = match (files.input.canonicalize(), files.output.canonicalize()) {
            (Ok(input), Ok(output)) => input == output,
            _ => files.input == files.output,
        };

        if same {
            return Err(ValidationError::SameInputOutput {
                path: files.output.clone(),
            }
            .into());
        }
        Ok(())
    }
}
