//! GitHub implementation of the repository fetch port

use async_trait::async_trait;
use futures::stream::{self, StreamExt, TryStreamExt};

use repochat_domain::entities::{Document, RepositoryCoordinates};
use repochat_domain::error::Result;
use repochat_domain::ports::providers::RepositoryFetcher;
use serde_json::json;

use super::client::{GithubClient, TreeEntry};
use super::notebook::extract_notebook_text;
use crate::constants::{GITHUB_DEFAULT_CONCURRENT_REQUESTS, GITHUB_DEFAULT_EXTENSIONS};

/// Filtering and fan-out settings for [`GithubRepositoryReader`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GithubReaderConfig {
    /// File extensions to include, with the leading dot (`.py`)
    pub include_extensions: Vec<String>,
    /// Maximum blob downloads in flight
    pub concurrent_requests: usize,
}

impl Default for GithubReaderConfig {
    fn default() -> Self {
        Self {
            include_extensions: GITHUB_DEFAULT_EXTENSIONS
                .iter()
                .map(|ext| (*ext).to_string())
                .collect(),
            concurrent_requests: GITHUB_DEFAULT_CONCURRENT_REQUESTS,
        }
    }
}

impl GithubReaderConfig {
    /// Whether `path` ends with one of the included extensions
    ///
    /// The comparison is case-sensitive: `Guide.MD` does not match `.md`.
    pub fn includes(&self, path: &str) -> bool {
        let file_name = path.rsplit('/').next().unwrap_or(path);
        self.include_extensions
            .iter()
            .any(|ext| file_name.len() > ext.len() && file_name.ends_with(ext.as_str()))
    }
}

/// Reads the files of one branch of a GitHub repository
///
/// Documents come back sorted by path. Files that are not valid UTF-8 are
/// skipped with a warning; any HTTP failure fails the whole fetch.
pub struct GithubRepositoryReader {
    client: GithubClient,
    config: GithubReaderConfig,
}

impl GithubRepositoryReader {
    /// Create a reader
    pub fn new(client: GithubClient, config: GithubReaderConfig) -> Self {
        Self { client, config }
    }

    async fn load_blob(
        &self,
        repository: &RepositoryCoordinates,
        entry: TreeEntry,
    ) -> Result<Option<Document>> {
        let blob = self.client.blob(repository, &entry.sha).await?;
        let bytes = blob.decode()?;

        let Ok(raw) = String::from_utf8(bytes) else {
            tracing::warn!(path = %entry.path, "Skipping file that is not valid UTF-8");
            return Ok(None);
        };

        let text = if entry.path.ends_with(".ipynb") {
            extract_notebook_text(&raw).unwrap_or(raw)
        } else {
            raw
        };

        let url = format!(
            "https://github.com/{}/{}/blob/{}/{}",
            repository.owner, repository.repo, repository.branch, entry.path
        );
        Ok(Some(
            Document::new(entry.sha, entry.path, text).with_metadata("url", json!(url)),
        ))
    }
}

#[async_trait]
impl RepositoryFetcher for GithubRepositoryReader {
    async fn fetch(&self, repository: &RepositoryCoordinates) -> Result<Vec<Document>> {
        let tree_sha = self.client.branch_tree_sha(repository).await?;
        let mut entries: Vec<TreeEntry> = self
            .client
            .tree(repository, &tree_sha)
            .await?
            .into_iter()
            .filter(|entry| entry.is_blob() && self.config.includes(&entry.path))
            .collect();
        entries.sort_by(|a, b| a.path.cmp(&b.path));

        tracing::info!(
            %repository,
            files = entries.len(),
            concurrency = self.config.concurrent_requests,
            "Downloading repository files"
        );

        let documents: Vec<Document> = stream::iter(entries)
            .map(|entry| self.load_blob(repository, entry))
            .buffered(self.config.concurrent_requests.max(1))
            .try_filter_map(|doc| async move { Ok(doc) })
            .try_collect()
            .await?;

        tracing::info!(%repository, documents = documents.len(), "Repository fetched");
        Ok(documents)
    }
}
