//! repochat - Entry Point
//!
//! Parses the command line, seeds the environment from `.env`, loads
//! configuration, sets up logging and hands stdin/stdout to [`run_session`].
//! Documented fatal conditions print their message and exit with status 1.

use std::process::ExitCode;

use clap::Parser;
use repochat::{Cli, fatal_message, run_session};
use repochat_application::use_cases::Console;
use repochat_domain::error::Error;
use repochat_infrastructure::credentials::env_credential;
use repochat_infrastructure::logging::{init_logging, log_config_loaded};
use tokio::io::BufReader;

fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();

    // Before the config: `.env` may carry REPOCHAT_* overrides
    let env_file = match cli.load_environment() {
        Ok(path) => path,
        Err(e) => {
            eprintln!("{e}");
            return Ok(ExitCode::FAILURE);
        }
    };
    let config = match cli.load_config() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("{e}");
            return Ok(ExitCode::FAILURE);
        }
    };
    init_logging(&config.logging)?;
    if let Some(path) = cli.config_loader().config_file() {
        log_config_loaded(&path, true);
    }
    if let Some(path) = env_file {
        tracing::debug!(path = %path.display(), "Environment seeded from file");
    }

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()?;
    let code = runtime.block_on(async {
        let github_token = env_credential(&config.github.token_env);

        let mut console = Console::new(BufReader::new(tokio::io::stdin()), tokio::io::stdout());
        match run_session(&config, github_token, &mut console, ctrl_c()).await {
            Ok(_) => ExitCode::SUCCESS,
            Err(e) => {
                let message = fatal_message(&config, &e);
                if e.is_configuration() || matches!(e, Error::BuildFailed { .. }) {
                    println!("{message}");
                } else {
                    tracing::error!(error = %e, "repochat failed");
                    eprintln!("{message}");
                }
                ExitCode::FAILURE
            }
        }
    });
    // The stdin reader thread may still be parked on a read
    runtime.shutdown_background();
    Ok(code)
}

/// Resolves on Ctrl+C; never resolves if the handler cannot be installed
async fn ctrl_c() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!(error = %e, "Ctrl+C handler unavailable");
        std::future::pending::<()>().await;
    }
}
