//! Embedding backend selection

use crate::constants::HOSTED_BACKEND_INPUT;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Value Object: Embedding Backend Choice
///
/// Fixed once at startup. Only the exact input `"1"` selects the hosted
/// backend; every other answer, including an empty line, selects the local one.
///
/// ## Example
///
/// ```rust
/// use repochat_domain::value_objects::BackendChoice;
///
/// assert_eq!(BackendChoice::from_input("1"), BackendChoice::Hosted);
/// assert_eq!(BackendChoice::from_input("0"), BackendChoice::Local);
/// assert_eq!(BackendChoice::from_input(""), BackendChoice::Local);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BackendChoice {
    /// Hosted embedding API (OpenAI)
    Hosted,
    /// Local embedding model (FastEmbed)
    Local,
}

impl BackendChoice {
    /// Interpret the answer to the backend prompt
    pub fn from_input(input: &str) -> Self {
        if input.trim_end_matches(['\r', '\n']) == HOSTED_BACKEND_INPUT {
            Self::Hosted
        } else {
            Self::Local
        }
    }

    /// Stable lowercase name
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Hosted => "hosted",
            Self::Local => "local",
        }
    }
}

impl fmt::Display for BackendChoice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
