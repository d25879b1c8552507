//! Configuration module for driftnet
//!
//! The engine takes all remote-service specifics (host, request paths, CSS
//! selectors, HTTP client settings) as a read-only configuration value, so
//! tests can point a scraper at fixture-served endpoints. The defaults target
//! the real service; a TOML file can override any section.

mod parser;
mod types;
mod validation;

pub use parser::{compute_config_hash, load_config, load_config_with_hash};
pub use types::{ClientConfig, Config, EndpointConfig, SelectorConfig};
pub use validation::validate;
