//! One interactive run
//!
//! Token check, backend prompt, build-or-reload, then the query loop. Every
//! fatal condition comes back as an [`Error`]; the binary decides what to
//! print and how to exit.

use std::future::Future;

use repochat_application::use_cases::{
    Console, IndexBranch, QueryEngine, QueryLoopSummary, RunConfig, run_query_loop,
};
use repochat_domain::constants::{MSG_MISSING_GITHUB_TOKEN, PROMPT_BACKEND_CHOICE};
use repochat_domain::error::{Error, Result};
use repochat_domain::value_objects::BackendChoice;
use repochat_infrastructure::config::AppConfig;
use repochat_infrastructure::constants::GITHUB_TOKEN_ENV;
use repochat_infrastructure::di::RepochatComponents;
use tokio::io::{AsyncBufRead, AsyncWrite};

/// What a completed run did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionReport {
    /// Backend picked at the prompt
    pub backend: BackendChoice,
    /// Whether the index was built or reloaded
    pub branch: IndexBranch,
    /// How the query loop went
    pub queries: QueryLoopSummary,
}

/// Run one session over `console`
///
/// Fails with `Error::MissingCredential` before any prompt when
/// `github_token` is absent or blank.
pub async fn run_session<R, W, S>(
    config: &AppConfig,
    github_token: Option<String>,
    console: &mut Console<R, W>,
    shutdown: S,
) -> Result<SessionReport>
where
    R: AsyncBufRead + Unpin + Send,
    W: AsyncWrite + Unpin + Send,
    S: Future<Output = ()>,
{
    let github_token = github_token
        .filter(|t| !t.trim().is_empty())
        .ok_or_else(|| Error::missing_credential(&config.github.token_env))?;

    let answer = console
        .ask(PROMPT_BACKEND_CHOICE)
        .await?
        .ok_or_else(|| Error::invalid_argument("Input closed before a backend was chosen"))?;
    let run = RunConfig::new(
        Some(github_token),
        &config.github.token_env,
        BackendChoice::from_input(&answer),
        config.index.persist_dir.clone(),
    )?;
    tracing::info!(backend = %run.backend, persist_dir = %run.persist_dir.display(), "Run configured");

    let mut run_config = config.clone();
    run_config.index.persist_dir.clone_from(&run.persist_dir);
    let components = RepochatComponents::from_config(&run_config, run.github_token)?;

    let mut orchestrator = components.orchestrator();
    let outcome = orchestrator.open_index(run.backend, console).await?;

    let engine = QueryEngine::new(
        outcome.index,
        components.llm.clone(),
        components.similarity_top_k(),
    );
    let queries = run_query_loop(console, &engine, shutdown).await?;
    tracing::info!(answered = queries.answered, exit = ?queries.exit, "Query loop finished");

    Ok(SessionReport {
        backend: run.backend,
        branch: outcome.branch,
        queries,
    })
}

/// Text printed for a fatal session error
///
/// Only a missing GitHub credential gets the `.env` hint, naming the
/// configured variable. A build failure prints its reason; anything else,
/// including a missing embedding API key, prints the error itself.
pub fn fatal_message(config: &AppConfig, error: &Error) -> String {
    match error {
        Error::MissingCredential { variable } if *variable == config.github.token_env => {
            MSG_MISSING_GITHUB_TOKEN.replace(GITHUB_TOKEN_ENV, variable)
        }
        Error::BuildFailed { reason } => reason.clone(),
        other => other.to_string(),
    }
}
