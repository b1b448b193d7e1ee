//! Provider Constants
//!
//! Constants specific to provider implementations. Domain constants live in
//! `repochat-domain`, configuration defaults in `repochat-infrastructure`.

// ============================================================================
// EMBEDDING PROVIDER CONSTANTS
// ============================================================================

/// Null embedding provider dimension (for testing)
pub const EMBEDDING_DIMENSION_NULL: usize = 384;

/// FastEmbed BAAI/bge-small-en-v1.5 dimension
pub const EMBEDDING_DIMENSION_FASTEMBED_BGE_SMALL: usize = 384;

/// FastEmbed BAAI/bge-base-en-v1.5 dimension
pub const EMBEDDING_DIMENSION_FASTEMBED_BGE_BASE: usize = 768;

/// FastEmbed all-MiniLM-L6-v2 dimension
pub const EMBEDDING_DIMENSION_FASTEMBED_MINILM: usize = 384;

/// OpenAI text-embedding-3-small dimension
pub const EMBEDDING_DIMENSION_OPENAI_SMALL: usize = 1536;

/// OpenAI text-embedding-3-large dimension
pub const EMBEDDING_DIMENSION_OPENAI_LARGE: usize = 3072;

/// OpenAI text-embedding-ada-002 dimension
pub const EMBEDDING_DIMENSION_OPENAI_ADA: usize = 1536;

/// Default OpenAI embedding model
pub const OPENAI_DEFAULT_EMBEDDING_MODEL: &str = "text-embedding-ada-002";

/// Default OpenAI API base URL
pub const OPENAI_DEFAULT_BASE_URL: &str = "https://api.openai.com/v1";

/// Default local embedding model
pub const FASTEMBED_DEFAULT_MODEL: &str = "BAAI/bge-small-en-v1.5";

// ============================================================================
// LLM PROVIDER CONSTANTS
// ============================================================================

/// Default Ollama server URL
pub const OLLAMA_DEFAULT_BASE_URL: &str = "http://localhost:11434";

/// Default Ollama completion model
pub const OLLAMA_DEFAULT_MODEL: &str = "llama2";

/// Ollama request timeout in seconds
pub const OLLAMA_REQUEST_TIMEOUT_SECS: u64 = 200;

// ============================================================================
// GITHUB CONSTANTS
// ============================================================================

/// Default GitHub REST API URL
pub const GITHUB_DEFAULT_API_URL: &str = "https://api.github.com";

/// GitHub REST API media type
pub const GITHUB_ACCEPT_HEADER: &str = "application/vnd.github+json";

/// GitHub REST API version header value
pub const GITHUB_API_VERSION: &str = "2022-11-28";

/// Default number of blob downloads in flight
pub const GITHUB_DEFAULT_CONCURRENT_REQUESTS: usize = 5;

/// Extensions fetched when none are configured
pub const GITHUB_DEFAULT_EXTENSIONS: &[&str] = &[".py", ".ipynb", ".js", ".ts", ".md"];

// ============================================================================
// FILESYSTEM VECTOR STORE CONSTANTS
// ============================================================================

/// Maximum vectors per shard file
pub const FILESYSTEM_VECTOR_STORE_MAX_PER_SHARD: usize = 100_000;

/// Bytes per f32 dimension
pub const FILESYSTEM_BYTES_PER_DIMENSION: usize = 4;

// ============================================================================
// HTTP CONSTANTS
// ============================================================================

/// JSON content type
pub const CONTENT_TYPE_JSON: &str = "application/json";

/// Error message prefix for request timeouts
pub const ERROR_MSG_REQUEST_TIMEOUT: &str = "Request timed out after";

/// Default HTTP request timeout in seconds
pub const HTTP_DEFAULT_TIMEOUT_SECS: u64 = 30;
