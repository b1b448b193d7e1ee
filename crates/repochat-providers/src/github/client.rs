//! GitHub REST client

use std::time::Duration;

use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use reqwest::Client;
use serde::Deserialize;

use repochat_domain::error::{Error, Result};
use repochat_domain::entities::RepositoryCoordinates;

use crate::constants::{GITHUB_ACCEPT_HEADER, GITHUB_API_VERSION, GITHUB_DEFAULT_API_URL};
use crate::embedding::helpers::constructor;
use crate::utils::HttpResponseUtils;

#[derive(Debug, Deserialize)]
struct BranchResponse {
    commit: BranchCommit,
}

#[derive(Debug, Deserialize)]
struct BranchCommit {
    commit: CommitDetail,
}

#[derive(Debug, Deserialize)]
struct CommitDetail {
    tree: ShaRef,
}

#[derive(Debug, Deserialize)]
struct ShaRef {
    sha: String,
}

#[derive(Debug, Deserialize)]
struct TreeResponse {
    tree: Vec<TreeEntry>,
    #[serde(default)]
    truncated: bool,
}

/// One entry of a git tree listing
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct TreeEntry {
    /// Path relative to the repository root
    pub path: String,
    /// `blob`, `tree` or `commit`
    #[serde(rename = "type")]
    pub kind: String,
    /// Object sha
    pub sha: String,
    /// Blob size in bytes, absent for trees
    #[serde(default)]
    pub size: Option<u64>,
}

impl TreeEntry {
    /// Whether this entry is a file
    pub fn is_blob(&self) -> bool {
        self.kind == "blob"
    }
}

/// Blob payload as returned by the API
#[derive(Debug, Deserialize)]
pub struct BlobResponse {
    /// Blob sha
    pub sha: String,
    /// Encoded content
    pub content: String,
    /// Content encoding, normally `base64`
    pub encoding: String,
}

impl BlobResponse {
    /// Decode the blob into raw bytes
    ///
    /// GitHub wraps base64 content at 60 columns, so newlines are stripped first.
    pub fn decode(&self) -> Result<Vec<u8>> {
        match self.encoding.as_str() {
            "base64" => {
                let compact: String = self.content.split_whitespace().collect();
                Ok(STANDARD.decode(compact)?)
            }
            "utf-8" => Ok(self.content.clone().into_bytes()),
            other => Err(Error::fetch(format!(
                "Unsupported blob encoding '{other}' for {}",
                self.sha
            ))),
        }
    }
}

/// GitHub REST client
///
/// Receives its HTTP client via constructor injection, like the other
/// HTTP providers.
#[derive(Clone)]
pub struct GithubClient {
    token: String,
    api_url: String,
    timeout: Duration,
    http_client: Client,
}

impl GithubClient {
    /// Create a client authenticating with `token`
    ///
    /// # Arguments
    /// * `token` - Personal access token
    /// * `api_url` - Optional API root (defaults to `https://api.github.com`)
    /// * `timeout` - Per-request timeout
    /// * `http_client` - Reqwest HTTP client
    pub fn new(token: String, api_url: Option<String>, timeout: Duration, http_client: Client) -> Self {
        Self {
            token: constructor::validate_api_key(&token),
            api_url: constructor::get_effective_url(api_url.as_deref(), GITHUB_DEFAULT_API_URL),
            timeout,
            http_client,
        }
    }

    /// API root in use
    pub fn api_url(&self) -> &str {
        &self.api_url
    }

    async fn get_json<T: serde::de::DeserializeOwned>(&self, path: &str) -> Result<T> {
        let url = format!("{}{path}", self.api_url);
        tracing::trace!(%url, "GitHub request");

        let response = self
            .http_client
            .get(&url)
            .header("Authorization", format!("Bearer {}", self.token))
            .header("Accept", GITHUB_ACCEPT_HEADER)
            .header("X-GitHub-Api-Version", GITHUB_API_VERSION)
            .timeout(self.timeout)
            .send()
            .await
            .map_err(|e| HttpResponseUtils::transport_error("GitHub", &e, self.timeout, Error::fetch))?;

        HttpResponseUtils::check_and_parse(response, "GitHub", Error::fetch).await
    }

    /// Sha of the root tree at the head of the configured branch
    pub async fn branch_tree_sha(&self, repository: &RepositoryCoordinates) -> Result<String> {
        let branch: BranchResponse = self
            .get_json(&format!(
                "/repos/{}/{}/branches/{}",
                repository.owner, repository.repo, repository.branch
            ))
            .await?;
        Ok(branch.commit.commit.tree.sha)
    }

    /// Recursive listing of a tree
    pub async fn tree(&self, repository: &RepositoryCoordinates, tree_sha: &str) -> Result<Vec<TreeEntry>> {
        let tree: TreeResponse = self
            .get_json(&format!(
                "/repos/{}/{}/git/trees/{tree_sha}?recursive=1",
                repository.owner, repository.repo
            ))
            .await?;
        if tree.truncated {
            tracing::warn!(%repository, "GitHub truncated the tree listing; some files will be missing");
        }
        Ok(tree.tree)
    }

    /// Raw blob by sha
    pub async fn blob(&self, repository: &RepositoryCoordinates, sha: &str) -> Result<BlobResponse> {
        self.get_json(&format!(
            "/repos/{}/{}/git/blobs/{sha}",
            repository.owner, repository.repo
        ))
        .await
    }
}
