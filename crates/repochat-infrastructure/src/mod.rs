//! # Infrastructure Layer
//!
//! Cross-cutting technical concerns that support the application and domain layers.
//!
//! All adapters live in the `repochat-providers` crate; this layer only loads
//! configuration, sets up logging and wires providers together.
//!
//! ## Module Categories
//!
//! ### Configuration & Wiring
//! | Module | Description |
//! |--------|-------------|
//! | [`config`] | Layered TOML + environment configuration |
//! | [`credentials`] | `.env` loading and secret lookup |
//! | [`di`] | Provider factory and component bootstrap |
//! | [`constants`] | Centralized configuration constants |
//!
//! ### Observability
//! | Module | Description |
//! |--------|-------------|
//! | [`logging`] | Structured logging with tracing |

pub mod config;
pub mod constants;
pub mod credentials;
pub mod di;
pub mod error_ext;
pub mod logging;

// Re-export commonly used types
pub use config::{AppConfig, ConfigLoader};
pub use di::{DefaultProviderFactory, RepochatComponents};
pub use error_ext::ErrorContext;
