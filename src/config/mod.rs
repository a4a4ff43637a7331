//! Application configuration loaded from a TOML file.

mod loader;
mod types;

pub use loader::ConfigError;
pub use types::{ApiConfig, ClientBackend, ClientConfig, Config};
