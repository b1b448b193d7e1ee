//! Composition root
//!
//! Turns an [`AppConfig`] and the GitHub token into the collaborators the
//! application layer needs.
//!
//! ```text
//! AppConfig ─┬─ GithubRepositoryReader  (RepositoryFetcher)
//!            ├─ DefaultProviderFactory  (ProviderFactory)
//!            ├─ OllamaLlmProvider       (LlmProvider)
//!            └─ IndexSettings
//! ```

use std::sync::Arc;
use std::time::Duration;

use repochat_application::domain_services::TextSplitter;
use repochat_application::ports::ProviderFactory;
use repochat_application::use_cases::{IndexSettings, IndexingOrchestrator};
use repochat_domain::error::{Error, Result};
use repochat_domain::ports::providers::{LlmProvider, RepositoryFetcher};
use repochat_providers::github::{GithubClient, GithubReaderConfig, GithubRepositoryReader};
use repochat_providers::http::HttpClientConfig;
use repochat_providers::llm::OllamaLlmProvider;

use crate::config::{AppConfig, GithubConfig, IndexConfig, LlmConfig};
use crate::di::factory::DefaultProviderFactory;

/// Configured collaborators for one run
pub struct RepochatComponents {
    /// Repository fetcher
    pub fetcher: Arc<dyn RepositoryFetcher>,
    /// Embedding and vector store factory
    pub factory: Arc<dyn ProviderFactory>,
    /// Answer generator
    pub llm: Arc<dyn LlmProvider>,
    /// Settings handed to index construction
    pub settings: IndexSettings,
    config: AppConfig,
}

impl std::fmt::Debug for RepochatComponents {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RepochatComponents")
            .field("llm", &self.llm.model())
            .field("settings", &self.settings)
            .finish_non_exhaustive()
    }
}

impl RepochatComponents {
    /// Wire every collaborator from `config`
    pub fn from_config(config: &AppConfig, github_token: String) -> Result<Self> {
        Ok(Self {
            fetcher: Arc::new(github_reader(&config.github, github_token)?),
            factory: Arc::new(DefaultProviderFactory::new(config.embedding.clone())),
            llm: Arc::new(ollama_llm(&config.llm)?),
            settings: index_settings(&config.index)?,
            config: config.clone(),
        })
    }

    /// Orchestrator over these collaborators
    pub fn orchestrator(&self) -> IndexingOrchestrator {
        IndexingOrchestrator::new(
            Arc::clone(&self.fetcher),
            Arc::clone(&self.factory),
            self.config.index.persist_dir.clone(),
            self.settings.clone(),
        )
        .with_branch(self.config.github.branch.clone())
    }

    /// Chunks retrieved per query
    pub fn similarity_top_k(&self) -> usize {
        self.config.index.similarity_top_k
    }
}

/// GitHub reader authenticating with `token`
pub fn github_reader(config: &GithubConfig, token: String) -> Result<GithubRepositoryReader> {
    if config.concurrent_requests == 0 {
        return Err(Error::config("GitHub concurrent requests cannot be 0"));
    }
    let timeout = Duration::from_secs(config.timeout_secs);
    let client = HttpClientConfig::with_timeout(timeout).build_client()?;
    let github = GithubClient::new(token, Some(config.api_url.clone()), timeout, client);

    Ok(GithubRepositoryReader::new(
        github,
        GithubReaderConfig {
            include_extensions: config.include_extensions.clone(),
            concurrent_requests: config.concurrent_requests,
        },
    ))
}

/// Ollama client; the HTTP client timeout matches the request timeout
pub fn ollama_llm(config: &LlmConfig) -> Result<OllamaLlmProvider> {
    let timeout = Duration::from_secs(config.request_timeout_secs);
    let client = HttpClientConfig::with_timeout(timeout).build_client()?;
    Ok(OllamaLlmProvider::new(
        config.base_url.clone(),
        config.model.clone(),
        timeout,
        client,
    ))
}

/// Index settings with no default embedding registered
pub fn index_settings(config: &IndexConfig) -> Result<IndexSettings> {
    Ok(IndexSettings {
        collection: config.collection.clone(),
        splitter: TextSplitter::new(config.chunk_size, config.chunk_overlap)?,
        embed_batch_size: config.embed_batch_size,
        default_embedding: None,
    })
}
