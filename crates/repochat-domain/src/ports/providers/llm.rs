use crate::error::Result;
use async_trait::async_trait;

/// Text Completion Interface
///
/// Answers a fully rendered prompt. The query engine fills the prompt
/// template and hands the result to `complete`.
#[async_trait]
pub trait LlmProvider: Send + Sync {
    /// Complete `prompt` and return the generated text
    async fn complete(&self, prompt: &str) -> Result<String>;

    /// Model identifier
    fn model(&self) -> &str;

    /// Provider identifier (e.g. "ollama")
    fn provider_name(&self) -> &str;
}
