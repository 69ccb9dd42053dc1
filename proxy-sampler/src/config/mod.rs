//! Configuration management for the sampler

pub mod loader;
pub mod schema;
pub mod validator;

pub use loader::ConfigLoader;
pub use schema::{Config, FilesConfig, SamplingConfig};
pub use validator::ConfigValidator;
