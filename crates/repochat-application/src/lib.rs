//! Application Layer - repochat
//!
//! Use cases and orchestration for the repository question-answering flow:
//! persistence check, fresh build or reload of the index, and the
//! interactive query loop.
//!
//! ## Use Cases
//!
//! - [`use_cases::IndexingOrchestrator`]: chooses between the build and reload branches
//! - [`use_cases::VectorIndex`]: the index handle (chunk, embed, persist, retrieve)
//! - [`use_cases::QueryEngine`]: one retrieval plus one completion per query
//! - [`use_cases::run_query_loop`]: prompt/answer loop with explicit termination
//!
//! ## Ports (Interfaces)
//!
//! - `ports::ProviderFactory`: builds embedding providers and vector stores
//! - `ports::UserInteraction`: asks for repository coordinates and shows status lines
//!
//! ## Dependencies
//!
//! This crate depends only on `repochat-domain` and pure Rust libraries.

pub mod domain_services;
pub mod ports;
pub mod use_cases;

pub use domain_services::*;
pub use ports::*;
pub use use_cases::*;
