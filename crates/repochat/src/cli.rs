//! Command line interface

use std::path::PathBuf;

use clap::Parser;
use repochat_domain::error::Result;
use repochat_infrastructure::config::{AppConfig, ConfigLoader};
use repochat_infrastructure::credentials::{load_dotenv, load_dotenv_from};

/// Command line interface for repochat
#[derive(Parser, Debug, Clone, PartialEq, Eq)]
#[command(name = "repochat")]
#[command(about = "Chat with a GitHub repository using retrieval-augmented generation")]
#[command(version)]
pub struct Cli {
    /// Path to configuration file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Directory holding the persisted index (overrides `index.persist_dir`)
    #[arg(long, value_name = "DIR")]
    pub persist_dir: Option<PathBuf>,

    /// Env file to load instead of searching for `.env`
    #[arg(long, value_name = "FILE")]
    pub env_file: Option<PathBuf>,
}

impl Cli {
    /// Configuration loader honouring `--config`
    pub fn config_loader(&self) -> ConfigLoader {
        match &self.config {
            Some(path) => ConfigLoader::new().with_config_path(path),
            None => ConfigLoader::new(),
        }
    }

    /// Seed the process environment from `--env-file` or a discovered `.env`
    ///
    /// Must run before [`Cli::load_config`] so `REPOCHAT_*` entries in the
    /// file reach the environment layer. Returns the file that was read.
    pub fn load_environment(&self) -> Result<Option<PathBuf>> {
        match &self.env_file {
            Some(path) => load_dotenv_from(path).map(|()| Some(path.clone())),
            None => load_dotenv(),
        }
    }

    /// Load the configuration and apply command line overrides
    pub fn load_config(&self) -> Result<AppConfig> {
        let mut config = self.config_loader().load()?;
        if let Some(dir) = &self.persist_dir {
            config.index.persist_dir.clone_from(dir);
        }
        Ok(config)
    }
}
