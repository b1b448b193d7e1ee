//! OpenAI Embedding Provider
//!
//! Implements the EmbeddingProvider port using OpenAI's embedding API.
//! This is the hosted backend: the API key comes from the ambient
//! environment (`OPENAI_API_KEY` by default).

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;

use repochat_domain::error::{Error, Result};
use repochat_domain::ports::providers::EmbeddingProvider;
use repochat_domain::value_objects::Embedding;

use crate::constants::{
    CONTENT_TYPE_JSON, EMBEDDING_DIMENSION_OPENAI_ADA, EMBEDDING_DIMENSION_OPENAI_LARGE,
    EMBEDDING_DIMENSION_OPENAI_SMALL, OPENAI_DEFAULT_BASE_URL,
};
use crate::embedding::helpers::constructor;
use crate::utils::HttpResponseUtils;

/// Embeddings endpoint response
#[derive(Debug, Deserialize)]
struct EmbeddingsResponse {
    data: Vec<EmbeddingItem>,
}

#[derive(Debug, Deserialize)]
struct EmbeddingItem {
    #[serde(default)]
    index: usize,
    embedding: Vec<f32>,
}

/// OpenAI embedding provider
///
/// Receives its HTTP client via constructor injection.
///
/// ## Example
///
/// ```rust,no_run
/// use repochat_providers::embedding::OpenAIEmbeddingProvider;
/// use reqwest::Client;
/// use std::time::Duration;
///
/// let provider = OpenAIEmbeddingProvider::new(
///     "sk-your-api-key".to_string(),
///     None,
///     "text-embedding-ada-002".to_string(),
///     Duration::from_secs(30),
///     Client::new(),
/// );
/// ```
pub struct OpenAIEmbeddingProvider {
    api_key: String,
    base_url: Option<String>,
    model: String,
    timeout: Duration,
    http_client: Client,
}

impl OpenAIEmbeddingProvider {
    /// Create a new OpenAI embedding provider
    ///
    /// # Arguments
    /// * `api_key` - OpenAI API key
    /// * `base_url` - Optional custom base URL (defaults to OpenAI API)
    /// * `model` - Model name (e.g., "text-embedding-ada-002")
    /// * `timeout` - Request timeout duration
    /// * `http_client` - Reqwest HTTP client for making API requests
    pub fn new(
        api_key: String,
        base_url: Option<String>,
        model: String,
        timeout: Duration,
        http_client: Client,
    ) -> Self {
        Self {
            api_key: constructor::validate_api_key(&api_key),
            base_url: constructor::validate_url(base_url),
            model,
            timeout,
            http_client,
        }
    }

    /// Get the base URL for this provider
    pub fn base_url(&self) -> &str {
        self.base_url.as_deref().unwrap_or(OPENAI_DEFAULT_BASE_URL)
    }

    /// Send embedding request and get response data
    async fn fetch_embeddings(&self, texts: &[String]) -> Result<EmbeddingsResponse> {
        let payload = serde_json::json!({
            "input": texts,
            "model": self.model,
            "encoding_format": "float"
        });

        let response = self
            .http_client
            .post(format!("{}/embeddings", self.base_url()))
            .header("Authorization", format!("Bearer {}", self.api_key))
            .header("Content-Type", CONTENT_TYPE_JSON)
            .timeout(self.timeout)
            .json(&payload)
            .send()
            .await
            .map_err(|e| HttpResponseUtils::transport_error("OpenAI", &e, self.timeout, Error::embedding))?;

        HttpResponseUtils::check_and_parse(response, "OpenAI", Error::embedding).await
    }
}

#[async_trait]
impl EmbeddingProvider for OpenAIEmbeddingProvider {
    async fn embed_batch(&self, texts: &[String]) -> Result<Vec<Embedding>> {
        if texts.is_empty() {
            return Ok(Vec::new());
        }

        let mut response = self.fetch_embeddings(texts).await?;

        if response.data.len() != texts.len() {
            return Err(Error::embedding(format!(
                "Response data count mismatch: expected {}, got {}",
                texts.len(),
                response.data.len()
            )));
        }

        // The API does not guarantee ordering of `data`
        response.data.sort_by_key(|item| item.index);

        Ok(response
            .data
            .into_iter()
            .map(|item| {
                let dimensions = item.embedding.len();
                Embedding {
                    vector: item.embedding,
                    model: self.model.clone(),
                    dimensions,
                }
            })
            .collect())
    }

    fn dimensions(&self) -> usize {
        match self.model.as_str() {
            "text-embedding-3-large" => EMBEDDING_DIMENSION_OPENAI_LARGE,
            "text-embedding-ada-002" => EMBEDDING_DIMENSION_OPENAI_ADA,
            _ => EMBEDDING_DIMENSION_OPENAI_SMALL,
        }
    }

    fn model(&self) -> &str {
        &self.model
    }

    fn provider_name(&self) -> &str {
        "openai"
    }
}
