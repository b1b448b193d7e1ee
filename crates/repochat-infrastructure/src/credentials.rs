//! Secret lookup
//!
//! Credentials come from the process environment, optionally seeded from a
//! `.env` file in the working directory. Variables already set in the
//! environment win over the file.

use std::path::{Path, PathBuf};

use repochat_domain::error::{Error, Result};

/// Load `.env` from the working directory (or a parent), if present
///
/// Returns the file that was read. A malformed file is reported as a
/// configuration error.
pub fn load_dotenv() -> Result<Option<PathBuf>> {
    match dotenvy::dotenv() {
        Ok(path) => {
            tracing::debug!(path = %path.display(), "Loaded .env");
            Ok(Some(path))
        }
        Err(e) if e.not_found() => Ok(None),
        Err(e) => Err(Error::configuration_with_source("Failed to read .env", e)),
    }
}

/// Load an explicit env file; unlike [`load_dotenv`] a missing file is an error
pub fn load_dotenv_from(path: &Path) -> Result<()> {
    dotenvy::from_path(path).map_err(|e| {
        Error::configuration_with_source(format!("Failed to read {}", path.display()), e)
    })?;
    tracing::debug!(path = %path.display(), "Loaded env file");
    Ok(())
}

/// Value of `variable`, `None` when unset, blank or not unicode
pub fn env_credential(variable: &str) -> Option<String> {
    std::env::var(variable)
        .ok()
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
}

/// Value of `variable`, or `Error::MissingCredential` naming it
pub fn require_credential(variable: &str) -> Result<String> {
    env_credential(variable).ok_or_else(|| Error::missing_credential(variable))
}
