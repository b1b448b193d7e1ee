//! Provider wiring
//!
//! All provider implementations come from `repochat-providers`; this module
//! only turns configuration into configured instances.

pub mod bootstrap;
pub mod factory;

pub use bootstrap::{RepochatComponents, index_settings};
pub use factory::DefaultProviderFactory;
