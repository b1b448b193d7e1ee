//! Indexing Orchestrator Use Case
//!
//! Persistence check and branch selection. Exactly one of the two branches
//! runs per call:
//!
//! - **build** when the persistence directory does not exist: ask for the
//!   repository, fetch it, select the embedding backend, build and persist
//! - **reload** otherwise: restore the persisted index without fetching

use std::path::{Path, PathBuf};
use std::sync::Arc;

use repochat_domain::constants::{
    MSG_DOCUMENTS_INDEXED, MSG_EMBEDDING_MODEL_LOADED, MSG_HOSTED_BACKEND, MSG_INDEX_LOADED,
    MSG_LOCAL_BACKEND,
};
use repochat_domain::entities::{DEFAULT_BRANCH, RepositoryCoordinates};
use repochat_domain::error::{Error, Result};
use repochat_domain::ports::providers::{EmbeddingProvider, RepositoryFetcher};
use repochat_domain::value_objects::BackendChoice;

use crate::ports::{ProviderFactory, UserInteraction};
use crate::use_cases::index::{BuildContext, IndexSettings, VectorIndex};

/// Which branch produced the index handle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IndexBranch {
    /// Fresh build from fetched documents
    Built,
    /// Restored from the persistence directory
    Reloaded,
}

/// Result of [`IndexingOrchestrator::open_index`]
#[derive(Debug)]
pub struct IndexOutcome {
    /// The index handle
    pub index: VectorIndex,
    /// Branch that produced it
    pub branch: IndexBranch,
}

/// Drives the persistence check and the build/reload branches
pub struct IndexingOrchestrator {
    fetcher: Arc<dyn RepositoryFetcher>,
    factory: Arc<dyn ProviderFactory>,
    persist_dir: PathBuf,
    branch: String,
    settings: IndexSettings,
}

impl IndexingOrchestrator {
    /// Create an orchestrator persisting under `persist_dir`
    pub fn new(
        fetcher: Arc<dyn RepositoryFetcher>,
        factory: Arc<dyn ProviderFactory>,
        persist_dir: impl Into<PathBuf>,
        settings: IndexSettings,
    ) -> Self {
        Self {
            fetcher,
            factory,
            persist_dir: persist_dir.into(),
            branch: DEFAULT_BRANCH.to_string(),
            settings,
        }
    }

    /// Fetch `branch` instead of the default one
    #[must_use]
    pub fn with_branch(mut self, branch: impl Into<String>) -> Self {
        self.branch = branch.into();
        self
    }

    /// Index settings, including the registered default embedding
    pub fn settings(&self) -> &IndexSettings {
        &self.settings
    }

    /// Directory checked for a persisted index
    pub fn persist_dir(&self) -> &Path {
        &self.persist_dir
    }

    /// Whether a persisted index is present
    pub async fn persistence_exists(&self) -> bool {
        tokio::fs::try_exists(&self.persist_dir)
            .await
            .unwrap_or(false)
    }

    /// Produce the index handle for this run
    ///
    /// Any failure on the build branch is reported as `Error::BuildFailed`;
    /// reload failures propagate unchanged.
    pub async fn open_index(
        &mut self,
        choice: BackendChoice,
        ui: &mut dyn UserInteraction,
    ) -> Result<IndexOutcome> {
        if self.persistence_exists().await {
            tracing::info!(path = %self.persist_dir.display(), "Persisted index found, reloading");
            let index = VectorIndex::load(
                &self.persist_dir,
                &self.settings,
                self.factory.as_ref(),
                choice,
            )
            .await?;
            ui.notify(MSG_INDEX_LOADED).await?;
            return Ok(IndexOutcome {
                index,
                branch: IndexBranch::Reloaded,
            });
        }

        tracing::info!(path = %self.persist_dir.display(), "No persisted index, building");
        let (owner, repo) = ui.repository().await?;
        let repository = RepositoryCoordinates::new(owner, repo).with_branch(self.branch.clone());

        let index = self
            .build(&repository, choice, ui)
            .await
            .map_err(|e| {
                tracing::error!(error = %e, %repository, "Index build failed");
                Error::build_failed(&e)
            })?;
        ui.notify(MSG_DOCUMENTS_INDEXED).await?;

        Ok(IndexOutcome {
            index,
            branch: IndexBranch::Built,
        })
    }

    async fn build(
        &mut self,
        repository: &RepositoryCoordinates,
        choice: BackendChoice,
        ui: &mut dyn UserInteraction,
    ) -> Result<VectorIndex> {
        let documents = self.fetcher.fetch(repository).await?;
        tracing::info!(%repository, documents = documents.len(), "Documents fetched");

        let embed_model = self.select_backend(choice, ui).await?;

        VectorIndex::from_documents(
            &documents,
            embed_model,
            &self.settings,
            self.factory.as_ref(),
            &self.persist_dir,
            &BuildContext {
                backend: choice,
                repository: repository.clone(),
            },
        )
        .await
    }

    /// Hosted: no explicit provider, settings untouched. Local: the local
    /// provider is returned and registered as the default embedding.
    async fn select_backend(
        &mut self,
        choice: BackendChoice,
        ui: &mut dyn UserInteraction,
    ) -> Result<Option<Arc<dyn EmbeddingProvider>>> {
        match choice {
            BackendChoice::Hosted => {
                ui.notify(MSG_HOSTED_BACKEND).await?;
                Ok(None)
            }
            BackendChoice::Local => {
                ui.notify(MSG_LOCAL_BACKEND).await?;
                let provider = self.factory.local_embedding()?;
                ui.notify(MSG_EMBEDDING_MODEL_LOADED).await?;
                self.settings.default_embedding = Some(Arc::clone(&provider));
                Ok(Some(provider))
            }
        }
    }
}
