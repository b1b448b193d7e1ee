//! Configuration loader
//!
//! Handles loading configuration from various sources including
//! TOML files, environment variables, and default values.

use crate::config::AppConfig;
use crate::constants::{
    CONFIG_ENV_PREFIX, CONFIG_ENV_SEPARATOR, DEFAULT_CONFIG_DIR, DEFAULT_CONFIG_FILENAME,
};
use crate::error_ext::ErrorContext;
use crate::logging::parse_log_level;
use figment::Figment;
use figment::providers::{Env, Format, Serialized, Toml};
use repochat_domain::error::{Error, Result};
use std::env;
use std::path::{Path, PathBuf};

/// Configuration loader service
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    /// Configuration file path
    config_path: Option<PathBuf>,

    /// Environment prefix
    env_prefix: String,
}

impl ConfigLoader {
    /// Create a new configuration loader with default settings
    pub fn new() -> Self {
        Self {
            config_path: None,
            env_prefix: CONFIG_ENV_PREFIX.to_string(),
        }
    }

    /// Set the configuration file path
    #[must_use]
    pub fn with_config_path<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.config_path = Some(path.as_ref().to_path_buf());
        self
    }

    /// Set the environment variable prefix
    #[must_use]
    pub fn with_env_prefix<S: Into<String>>(mut self, prefix: S) -> Self {
        self.env_prefix = prefix.into();
        self
    }

    /// Load configuration from all sources
    ///
    /// Configuration sources are merged in this order (later sources override earlier):
    /// 1. Default values from `AppConfig::default()`
    /// 2. TOML configuration file (explicit path, or the first default location found)
    /// 3. Environment variables with prefix, nested keys split on `__`
    ///    (e.g., `REPOCHAT_INDEX__PERSIST_DIR`)
    pub fn load(&self) -> Result<AppConfig> {
        let mut figment = Figment::new().merge(Serialized::defaults(AppConfig::default()));

        if let Some(config_path) = &self.config_path {
            if !config_path.exists() {
                return Err(Error::config(format!(
                    "Configuration file not found: {}",
                    config_path.display()
                )));
            }
        }
        if let Some(path) = self.config_file() {
            figment = figment.merge(Toml::file(path));
        }

        figment = figment.merge(
            Env::prefixed(&format!("{}_", self.env_prefix)).split(CONFIG_ENV_SEPARATOR),
        );

        let app_config: AppConfig = figment
            .extract()
            .config_context("Failed to extract configuration")?;

        validate_app_config(&app_config)?;

        Ok(app_config)
    }

    /// Save configuration to file
    pub fn save_to_file<P: AsRef<Path>>(&self, config: &AppConfig, path: P) -> Result<()> {
        let toml_string =
            toml::to_string_pretty(config).config_context("Failed to serialize config to TOML")?;

        std::fs::write(path.as_ref(), toml_string).io_context("Failed to write config file")?;

        Ok(())
    }

    /// Get the explicitly configured file path
    pub fn config_path(&self) -> Option<&Path> {
        self.config_path.as_deref()
    }

    /// The TOML file [`load`](Self::load) reads, if any
    pub fn config_file(&self) -> Option<PathBuf> {
        match &self.config_path {
            Some(path) => Some(path.clone()).filter(|p| p.exists()),
            None => Self::find_default_config_path(),
        }
    }

    /// Find default configuration file paths to try
    fn find_default_config_path() -> Option<PathBuf> {
        let current_dir = env::current_dir().ok()?;

        let candidates = [
            Some(current_dir.join(DEFAULT_CONFIG_FILENAME)),
            Some(
                current_dir
                    .join(DEFAULT_CONFIG_DIR)
                    .join(DEFAULT_CONFIG_FILENAME),
            ),
            dirs::config_dir().map(|d| d.join(DEFAULT_CONFIG_DIR).join(DEFAULT_CONFIG_FILENAME)),
            dirs::home_dir().map(|d| {
                d.join(format!(".{DEFAULT_CONFIG_DIR}"))
                    .join(DEFAULT_CONFIG_FILENAME)
            }),
        ];

        candidates.into_iter().flatten().find(|path| path.is_file())
    }
}

impl Default for ConfigLoader {
    fn default() -> Self {
        Self::new()
    }
}

/// Validate application configuration
///
/// Performs validation of all configuration sections.
pub fn validate_app_config(config: &AppConfig) -> Result<()> {
    parse_log_level(&config.logging.level)?;
    validate_github_config(config)?;
    validate_index_config(config)?;
    validate_timeouts(config)?;
    Ok(())
}

fn validate_github_config(config: &AppConfig) -> Result<()> {
    if config.github.concurrent_requests == 0 {
        return Err(Error::config("GitHub concurrent requests cannot be 0"));
    }
    if config.github.include_extensions.is_empty() {
        return Err(Error::config("GitHub include extensions cannot be empty"));
    }
    if config.github.token_env.trim().is_empty() {
        return Err(Error::config("GitHub token variable name cannot be empty"));
    }
    Ok(())
}

fn validate_index_config(config: &AppConfig) -> Result<()> {
    let index = &config.index;
    if index.chunk_size == 0 {
        return Err(Error::config("Chunk size cannot be 0"));
    }
    if index.chunk_overlap >= index.chunk_size {
        return Err(Error::config(format!(
            "Chunk overlap ({}) must be smaller than chunk size ({})",
            index.chunk_overlap, index.chunk_size
        )));
    }
    if index.similarity_top_k == 0 {
        return Err(Error::config("Similarity top-k cannot be 0"));
    }
    if index.embed_batch_size == 0 {
        return Err(Error::config("Embedding batch size cannot be 0"));
    }
    if index.collection.trim().is_empty() {
        return Err(Error::config("Collection name cannot be empty"));
    }
    Ok(())
}

fn validate_timeouts(config: &AppConfig) -> Result<()> {
    if config.github.timeout_secs == 0 {
        return Err(Error::config("GitHub timeout cannot be 0"));
    }
    if config.embedding.hosted.timeout_secs == 0 {
        return Err(Error::config("Hosted embedding timeout cannot be 0"));
    }
    if config.llm.request_timeout_secs == 0 {
        return Err(Error::config("LLM request timeout cannot be 0"));
    }
    Ok(())
}
