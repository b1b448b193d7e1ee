//! Interactive query loop

use std::future::Future;

use repochat_domain::constants::{MSG_QUERY_LOOP_BANNER, PROMPT_QUERY, QUERY_EXIT_SENTINELS};
use repochat_domain::error::Result;
use tokio::io::{AsyncBufRead, AsyncWrite};

use crate::use_cases::console::Console;
use crate::use_cases::query_engine::QueryEngine;

/// Why the loop ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopExit {
    /// The shutdown future resolved (Ctrl+C)
    Interrupted,
    /// Input was closed
    EndOfInput,
    /// The user typed an exit word
    Sentinel,
}

/// Outcome of [`run_query_loop`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QueryLoopSummary {
    /// Number of answered queries
    pub answered: usize,
    /// Termination cause
    pub exit: LoopExit,
}

fn done(answered: usize, exit: LoopExit) -> QueryLoopSummary {
    QueryLoopSummary { answered, exit }
}

fn is_sentinel(line: &str) -> bool {
    QUERY_EXIT_SENTINELS
        .iter()
        .any(|s| line.eq_ignore_ascii_case(s))
}

/// Prompt, answer, repeat
///
/// Each non-empty line costs exactly one retrieval and one completion and
/// prints exactly one answer. Blank lines are skipped. `shutdown` is polled
/// both while waiting for input and while a query is in flight.
pub async fn run_query_loop<R, W, S>(
    console: &mut Console<R, W>,
    engine: &QueryEngine,
    shutdown: S,
) -> Result<QueryLoopSummary>
where
    R: AsyncBufRead + Unpin + Send,
    W: AsyncWrite + Unpin + Send,
    S: Future<Output = ()>,
{
    tokio::pin!(shutdown);
    let mut answered = 0usize;

    console.say(MSG_QUERY_LOOP_BANNER).await?;

    loop {
        let line = tokio::select! {
            biased;
            () = &mut shutdown => return Ok(done(answered, LoopExit::Interrupted)),
            line = console.ask(PROMPT_QUERY) => line?,
        };

        let Some(line) = line else {
            return Ok(done(answered, LoopExit::EndOfInput));
        };
        let query = line.trim();
        if query.is_empty() {
            continue;
        }
        if is_sentinel(query) {
            return Ok(done(answered, LoopExit::Sentinel));
        }

        let answer = tokio::select! {
            biased;
            () = &mut shutdown => return Ok(done(answered, LoopExit::Interrupted)),
            answer = engine.query(query) => answer?,
        };
        console.say(&answer).await?;
        answered += 1;
        tracing::debug!(answered, "Query answered");
    }
}
