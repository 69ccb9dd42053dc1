//! Random sampling of IPv4 proxy lists grouped by /24 subnet
//!
//! Addresses are read from a newline-delimited file, grouped by subnet,
//! sampled either per subnet or across the whole list, and written back
//! out as a plain-text report.

pub mod config;
pub mod error;
pub mod loader;
pub mod pipeline;
pub mod report;
pub mod sampler;
pub mod subnet;

// Re-export commonly used types
pub use config::{Config, ConfigLoader, ConfigValidator};
pub use error::{Result, SamplerError, ValidationError};
pub use loader::AddressLoader;
pub use pipeline::{Pipeline, Summary};
pub use report::ReportWriter;
pub use sampler::{Sampler, SamplingPolicy};
pub use subnet::{SubnetGroups, SubnetKey};
