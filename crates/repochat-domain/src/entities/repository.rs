//! Repository coordinates

use serde::{Deserialize, Serialize};
use std::fmt;

/// Branch fetched when none is configured
pub const DEFAULT_BRANCH: &str = "main";

/// Entity: GitHub Repository Coordinates
///
/// ## Example
///
/// ```rust
/// use repochat_domain::entities::RepositoryCoordinates;
///
/// let repo = RepositoryCoordinates::new("octocat", "Hello-World");
/// assert_eq!(repo.to_string(), "octocat/Hello-World@main");
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RepositoryCoordinates {
    /// Owner (user or organisation) login
    pub owner: String,
    /// Repository name
    pub repo: String,
    /// Branch to read
    pub branch: String,
}

impl RepositoryCoordinates {
    /// Coordinates on the default branch
    pub fn new(owner: impl Into<String>, repo: impl Into<String>) -> Self {
        Self {
            owner: owner.into(),
            repo: repo.into(),
            branch: DEFAULT_BRANCH.to_string(),
        }
    }

    /// Override the branch
    #[must_use]
    pub fn with_branch(mut self, branch: impl Into<String>) -> Self {
        self.branch = branch.into();
        self
    }
}

impl fmt::Display for RepositoryCoordinates {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}@{}", self.owner, self.repo, self.branch)
    }
}
