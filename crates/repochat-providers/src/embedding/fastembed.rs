//! FastEmbed Local Embedding Provider
//!
//! Implements the EmbeddingProvider port using the fastembed library for local
//! embedding generation. Uses ONNX models for inference without external API calls.
//! This is the local backend.

use async_trait::async_trait;
use fastembed::{EmbeddingModel, InitOptions, TextEmbedding};
use tokio::sync::{mpsc, oneshot};

use repochat_domain::error::{Error, Result};
use repochat_domain::ports::providers::EmbeddingProvider;
use repochat_domain::value_objects::Embedding;

use crate::constants::{
    EMBEDDING_DIMENSION_FASTEMBED_BGE_BASE, EMBEDDING_DIMENSION_FASTEMBED_BGE_SMALL,
    EMBEDDING_DIMENSION_FASTEMBED_MINILM, FASTEMBED_DEFAULT_MODEL,
};

/// Messages for the FastEmbed actor
enum FastEmbedMessage {
    EmbedBatch {
        texts: Vec<String>,
        tx: oneshot::Sender<Result<Vec<Embedding>>>,
    },
}

/// FastEmbed local embedding provider using Actor pattern
///
/// The ONNX model is owned by a single actor task; requests arrive over an
/// mpsc channel and answers go back on a oneshot.
///
/// ## Example
///
/// ```rust,no_run
/// use repochat_providers::embedding::FastEmbedProvider;
///
/// # async fn example() -> repochat_domain::Result<()> {
/// let provider = FastEmbedProvider::from_model_id("BAAI/bge-small-en-v1.5")?;
/// # Ok(())
/// # }
/// ```
pub struct FastEmbedProvider {
    sender: mpsc::Sender<FastEmbedMessage>,
    model_id: String,
    dimensions: usize,
}

impl FastEmbedProvider {
    /// Create a provider with the default model (BAAI/bge-small-en-v1.5)
    pub fn new() -> Result<Self> {
        Self::from_model_id(FASTEMBED_DEFAULT_MODEL)
    }

    /// Create a provider from a model identifier such as `BAAI/bge-small-en-v1.5`
    pub fn from_model_id(model_id: &str) -> Result<Self> {
        let model = parse_embedding_model(model_id)?;
        let init_options = InitOptions::new(model.clone()).with_show_download_progress(false);
        Self::with_options(init_options, model_id, model_dimensions(&model))
    }

    fn with_options(init_options: InitOptions, model_id: &str, dimensions: usize) -> Result<Self> {
        let text_embedding = TextEmbedding::try_new(init_options).map_err(|e| {
            Error::embedding(format!("Failed to initialize FastEmbed model {model_id}: {e}"))
        })?;

        let (tx, rx) = mpsc::channel(100);
        let mut actor = FastEmbedActor::new(rx, text_embedding, model_id.to_string());
        tokio::spawn(async move {
            actor.run().await;
        });

        tracing::info!(model = %model_id, dimensions, "FastEmbed model ready");

        Ok(Self {
            sender: tx,
            model_id: model_id.to_string(),
            dimensions,
        })
    }
}

#[async_trait]
impl EmbeddingProvider for FastEmbedProvider {
    async fn embed_batch(&self, texts: &[String]) -> Result<Vec<Embedding>> {
        if texts.is_empty() {
            return Ok(Vec::new());
        }

        let (tx, rx) = oneshot::channel();
        self.sender
            .send(FastEmbedMessage::EmbedBatch {
                texts: texts.to_vec(),
                tx,
            })
            .await
            .map_err(|_| Error::embedding("FastEmbed actor channel closed"))?;

        rx.await
            .unwrap_or_else(|_| Err(Error::embedding("FastEmbed actor closed")))
    }

    fn dimensions(&self) -> usize {
        self.dimensions
    }

    fn model(&self) -> &str {
        &self.model_id
    }

    fn provider_name(&self) -> &str {
        "fastembed"
    }
}

impl Clone for FastEmbedProvider {
    fn clone(&self) -> Self {
        Self {
            sender: self.sender.clone(),
            model_id: self.model_id.clone(),
            dimensions: self.dimensions,
        }
    }
}

/// Internal actor that processes embedding requests
struct FastEmbedActor {
    receiver: mpsc::Receiver<FastEmbedMessage>,
    model: TextEmbedding,
    model_id: String,
}

impl FastEmbedActor {
    fn new(
        receiver: mpsc::Receiver<FastEmbedMessage>,
        model: TextEmbedding,
        model_id: String,
    ) -> Self {
        Self {
            receiver,
            model,
            model_id,
        }
    }

    async fn run(&mut self) {
        while let Some(msg) = self.receiver.recv().await {
            match msg {
                FastEmbedMessage::EmbedBatch { texts, tx } => {
                    let text_refs: Vec<&str> = texts.iter().map(String::as_str).collect();
                    let result = match self.model.embed(text_refs, None) {
                        Ok(vectors) => Ok(vectors
                            .into_iter()
                            .map(|vector| {
                                let dimensions = vector.len();
                                Embedding {
                                    vector,
                                    model: self.model_id.clone(),
                                    dimensions,
                                }
                            })
                            .collect()),
                        Err(e) => Err(Error::embedding(format!(
                            "FastEmbed embedding failed: {e}"
                        ))),
                    };
                    let _ = tx.send(result);
                }
            }
        }
    }
}

/// Map a model identifier to the fastembed model enum
///
/// Accepts the Hugging Face id (`BAAI/bge-small-en-v1.5`) or the short
/// lowercase alias (`bge-small-en`).
pub fn parse_embedding_model(model_id: &str) -> Result<EmbeddingModel> {
    let short = model_id
        .rsplit('/')
        .next()
        .unwrap_or(model_id)
        .to_lowercase();
    match short.as_str() {
        "bge-small-en-v1.5" | "bge-small-en" => Ok(EmbeddingModel::BGESmallENV15),
        "bge-base-en-v1.5" | "bge-base-en" => Ok(EmbeddingModel::BGEBaseENV15),
        "all-minilm-l6-v2" => Ok(EmbeddingModel::AllMiniLML6V2),
        _ => Err(Error::config(format!(
            "Unsupported local embedding model: {model_id}"
        ))),
    }
}

fn model_dimensions(model: &EmbeddingModel) -> usize {
    match model {
        EmbeddingModel::BGEBaseENV15 => EMBEDDING_DIMENSION_FASTEMBED_BGE_BASE,
        EmbeddingModel::AllMiniLML6V2 => EMBEDDING_DIMENSION_FASTEMBED_MINILM,
        _ => EMBEDDING_DIMENSION_FASTEMBED_BGE_SMALL,
    }
}
