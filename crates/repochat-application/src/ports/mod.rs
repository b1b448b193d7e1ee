//! Application Ports
//!
//! | Port | Description |
//! |------|-------------|
//! | [`ProviderFactory`] | Builds embedding providers and opens vector stores |
//! | [`UserInteraction`] | Asks for repository coordinates and shows status lines |

pub mod factory;
pub mod interaction;

pub use factory::ProviderFactory;
pub use interaction::UserInteraction;
