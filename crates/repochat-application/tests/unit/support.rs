//! Fake collaborators shared by the use case tests

use std::path::Path;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use repochat_application::ports::{ProviderFactory, UserInteraction};
use repochat_domain::entities::{Document, RepositoryCoordinates};
use repochat_domain::error::{Error, Result};
use repochat_domain::ports::providers::{
    EmbeddingProvider, LlmProvider, RepositoryFetcher, VectorStoreProvider,
};
use repochat_domain::value_objects::Embedding;
use repochat_providers::embedding::NullEmbeddingProvider;
use repochat_providers::vector_store::{FilesystemVectorStore, FilesystemVectorStoreConfig};

// ============================================================================
// Documents
// ============================================================================

pub fn sample_documents() -> Vec<Document> {
    vec![
        Document::new(
            "sha-readme",
            "README.md",
            "Hello World. This repository is a greeting example.",
        ),
        Document::new("sha-main", "src/main.py", "print('Hello, World!')"),
    ]
}

// ============================================================================
// Fetcher
// ============================================================================

pub struct CountingFetcher {
    documents: Vec<Document>,
    failure: Option<String>,
    pub calls: AtomicUsize,
    pub last_repository: Mutex<Option<RepositoryCoordinates>>,
}

impl CountingFetcher {
    pub fn new(documents: Vec<Document>) -> Arc<Self> {
        Arc::new(Self {
            documents,
            failure: None,
            calls: AtomicUsize::new(0),
            last_repository: Mutex::new(None),
        })
    }

    pub fn failing(message: &str) -> Arc<Self> {
        Arc::new(Self {
            documents: Vec::new(),
            failure: Some(message.to_string()),
            calls: AtomicUsize::new(0),
            last_repository: Mutex::new(None),
        })
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl RepositoryFetcher for CountingFetcher {
    async fn fetch(&self, repository: &RepositoryCoordinates) -> Result<Vec<Document>> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        *self.last_repository.lock().unwrap() = Some(repository.clone());
        match &self.failure {
            Some(message) => Err(Error::fetch(message.clone())),
            None => Ok(self.documents.clone()),
        }
    }
}

// ============================================================================
// Embedding
// ============================================================================

/// Null embeddings under a recognisable provider name
pub struct CountingEmbedder {
    name: &'static str,
    inner: NullEmbeddingProvider,
    pub batch_calls: AtomicUsize,
}

impl CountingEmbedder {
    pub fn new(name: &'static str) -> Arc<Self> {
        Arc::new(Self {
            name,
            inner: NullEmbeddingProvider::new(),
            batch_calls: AtomicUsize::new(0),
        })
    }

    pub fn batch_calls(&self) -> usize {
        self.batch_calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl EmbeddingProvider for CountingEmbedder {
    async fn embed_batch(&self, texts: &[String]) -> Result<Vec<Embedding>> {
        self.batch_calls.fetch_add(1, Ordering::SeqCst);
        self.inner.embed_batch(texts).await
    }

    fn dimensions(&self) -> usize {
        self.inner.dimensions()
    }

    fn model(&self) -> &str {
        self.name
    }

    fn provider_name(&self) -> &str {
        self.name
    }
}

// ============================================================================
// Factory
// ============================================================================

pub struct FakeFactory {
    pub hosted: Arc<CountingEmbedder>,
    pub local: Arc<CountingEmbedder>,
    hosted_error: Option<String>,
    pub hosted_requests: AtomicUsize,
    pub local_requests: AtomicUsize,
    pub store_opens: AtomicUsize,
}

impl FakeFactory {
    pub fn new() -> Arc<Self> {
        Self::build(None)
    }

    /// Hosted backend unavailable, like a missing API key
    pub fn without_hosted_credentials() -> Arc<Self> {
        Self::build(Some("OPENAI_API_KEY".to_string()))
    }

    fn build(hosted_error: Option<String>) -> Arc<Self> {
        Arc::new(Self {
            hosted: CountingEmbedder::new("hosted-fake"),
            local: CountingEmbedder::new("local-fake"),
            hosted_error,
            hosted_requests: AtomicUsize::new(0),
            local_requests: AtomicUsize::new(0),
            store_opens: AtomicUsize::new(0),
        })
    }

    pub fn hosted_requests(&self) -> usize {
        self.hosted_requests.load(Ordering::SeqCst)
    }

    pub fn local_requests(&self) -> usize {
        self.local_requests.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl ProviderFactory for FakeFactory {
    fn hosted_embedding(&self) -> Result<Arc<dyn EmbeddingProvider>> {
        self.hosted_requests.fetch_add(1, Ordering::SeqCst);
        match &self.hosted_error {
            Some(variable) => Err(Error::missing_credential(variable.clone())),
            None => Ok(self.hosted.clone()),
        }
    }

    fn local_embedding(&self) -> Result<Arc<dyn EmbeddingProvider>> {
        self.local_requests.fetch_add(1, Ordering::SeqCst);
        Ok(self.local.clone())
    }

    async fn open_vector_store(
        &self,
        path: &Path,
        dimensions: usize,
    ) -> Result<Arc<dyn VectorStoreProvider>> {
        self.store_opens.fetch_add(1, Ordering::SeqCst);
        let store =
            FilesystemVectorStore::new(FilesystemVectorStoreConfig::new(path, dimensions)).await?;
        Ok(Arc::new(store))
    }
}

// ============================================================================
// LLM
// ============================================================================

#[derive(Default)]
pub struct RecordingLlm {
    pub prompts: Mutex<Vec<String>>,
}

impl RecordingLlm {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn calls(&self) -> usize {
        self.prompts.lock().unwrap().len()
    }
}

#[async_trait]
impl LlmProvider for RecordingLlm {
    async fn complete(&self, prompt: &str) -> Result<String> {
        let mut prompts = self.prompts.lock().unwrap();
        prompts.push(prompt.to_string());
        Ok(format!("answer #{}", prompts.len()))
    }

    fn model(&self) -> &str {
        "recording"
    }

    fn provider_name(&self) -> &str {
        "recording"
    }
}

// ============================================================================
// User interaction
// ============================================================================

pub struct ScriptedUi {
    owner: String,
    repo: String,
    pub repository_requests: usize,
    pub messages: Vec<String>,
}

impl ScriptedUi {
    pub fn new(owner: &str, repo: &str) -> Self {
        Self {
            owner: owner.to_string(),
            repo: repo.to_string(),
            repository_requests: 0,
            messages: Vec::new(),
        }
    }
}

#[async_trait]
impl UserInteraction for ScriptedUi {
    async fn repository(&mut self) -> Result<(String, String)> {
        self.repository_requests += 1;
        Ok((self.owner.clone(), self.repo.clone()))
    }

    async fn notify(&mut self, message: &str) -> Result<()> {
        self.messages.push(message.to_string());
        Ok(())
    }
}
