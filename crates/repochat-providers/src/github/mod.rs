//! GitHub Repository Reader
//!
//! Downloads repository files through the GitHub REST API:
//! branch -> commit tree -> recursive tree -> blobs.
//!
//! | Type | Role |
//! |------|------|
//! | [`GithubClient`] | Thin REST client, one method per endpoint |
//! | [`GithubRepositoryReader`] | `RepositoryFetcher` implementation |

mod client;
pub mod notebook;
mod reader;

pub use client::{BlobResponse, GithubClient, TreeEntry};
pub use reader::{GithubReaderConfig, GithubRepositoryReader};
