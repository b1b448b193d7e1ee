//! Infrastructure layer constants
//!
//! Contains constants that are part of the infrastructure implementation.
//! Domain-specific constants are defined in `repochat_domain::constants`.

// ============================================================================
// CONFIGURATION CONSTANTS
// ============================================================================

/// Default configuration file name
pub const DEFAULT_CONFIG_FILENAME: &str = "repochat.toml";

/// Default configuration directory name
pub const DEFAULT_CONFIG_DIR: &str = "repochat";

/// Environment variable prefix for configuration
pub const CONFIG_ENV_PREFIX: &str = "REPOCHAT";

/// Separator between nested keys in environment overrides
pub const CONFIG_ENV_SEPARATOR: &str = "__";

// ============================================================================
// CREDENTIAL CONSTANTS
// ============================================================================

/// Environment variable holding the GitHub token
pub const GITHUB_TOKEN_ENV: &str = "GITHUB_TOKEN";

/// Environment variable holding the OpenAI API key
pub const OPENAI_API_KEY_ENV: &str = "OPENAI_API_KEY";

// ============================================================================
// INDEX CONSTANTS
// ============================================================================

/// Default persistence directory for the vector index
pub const DEFAULT_PERSIST_DIR: &str = "./basic/storage";

// ============================================================================
// LOGGING CONSTANTS
// ============================================================================

/// Default log level
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Environment variable overriding the log filter
pub const LOG_FILTER_ENV: &str = "REPOCHAT_LOG";

/// File name prefix for rolled log files
pub const LOG_FILE_PREFIX: &str = "repochat";

// ============================================================================
// TIMEOUT CONSTANTS
// ============================================================================

/// GitHub API request timeout in seconds
pub const GITHUB_REQUEST_TIMEOUT_SECS: u64 = 30;

/// Hosted embedding request timeout in seconds
pub const EMBEDDING_REQUEST_TIMEOUT_SECS: u64 = 30;
