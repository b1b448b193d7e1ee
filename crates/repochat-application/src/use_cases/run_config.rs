//! Per-run configuration

use std::path::PathBuf;

use repochat_domain::error::{Error, Result};
use repochat_domain::value_objects::BackendChoice;

/// Configuration resolved once at startup and immutable afterwards
///
/// The repository coordinates are not part of it: they are asked for only
/// when a fresh index has to be built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunConfig {
    /// GitHub credential
    pub github_token: String,
    /// Embedding backend picked at the prompt
    pub backend: BackendChoice,
    /// Directory holding the persisted index
    pub persist_dir: PathBuf,
}

impl RunConfig {
    /// Assemble a run configuration
    ///
    /// A blank token is treated as absent.
    pub fn new(
        github_token: Option<String>,
        token_variable: &str,
        backend: BackendChoice,
        persist_dir: impl Into<PathBuf>,
    ) -> Result<Self> {
        let github_token = github_token
            .map(|t| t.trim().to_string())
            .filter(|t| !t.is_empty())
            .ok_or_else(|| Error::missing_credential(token_variable))?;

        Ok(Self {
            github_token,
            backend,
            persist_dir: persist_dir.into(),
        })
    }
}
