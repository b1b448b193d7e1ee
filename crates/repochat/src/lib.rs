//! # repochat
//!
//! Ask natural-language questions about a GitHub repository.
//!
//! The first run fetches the repository's source files, splits and embeds
//! them (OpenAI or a local FastEmbed model) and persists a vector index.
//! Later runs reload that index. Questions are answered by retrieving the
//! closest chunks and asking a local Ollama model.
//!
//! ## Architecture
//!
//! - `domain` - entities, value objects, port traits and the error type
//! - `application` - orchestrator, index handle, query engine and loop
//! - `infrastructure` - configuration, logging, credentials and wiring
//! - [`cli`] - command line arguments
//! - [`session`] - one interactive run, from the token check to the last answer

pub mod cli;
pub mod session;

/// Domain layer - core business logic and types
///
/// Re-exports from the domain crate for convenience
pub mod domain {
    pub use repochat_domain::*;
}

/// Application layer - use cases
///
/// Re-exports from the application crate for convenience
pub mod application {
    pub use repochat_application::*;
}

/// Infrastructure layer - config, logging and wiring
///
/// Re-exports from the infrastructure crate for convenience
pub mod infrastructure {
    pub use repochat_infrastructure::*;
}

pub use cli::Cli;
pub use session::{SessionReport, fatal_message, run_session};
