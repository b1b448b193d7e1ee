//! Configuration management
//!
//! [`AppConfig`] is assembled by [`ConfigLoader`] from defaults, an optional
//! TOML file and `REPOCHAT_*` environment variables.

pub mod loader;
pub mod types;

pub use loader::ConfigLoader;
pub use types::*;
