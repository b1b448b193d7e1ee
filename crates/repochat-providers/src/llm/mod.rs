//! LLM Provider Implementations
//!
//! | Provider | Type | Description |
//! |----------|------|-------------|
//! | OllamaLlmProvider | Local | Ollama `/api/generate`, used for every query |

#[cfg(feature = "llm-ollama")]
pub mod ollama;

#[cfg(feature = "llm-ollama")]
pub use ollama::OllamaLlmProvider;
