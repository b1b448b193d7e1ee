//! Line-oriented terminal conversation
//!
//! Generic over tokio readers and writers so the whole conversation can be
//! driven from byte buffers in tests.

use async_trait::async_trait;
use repochat_domain::constants::{PROMPT_REPO_NAME, PROMPT_REPO_OWNER};
use repochat_domain::error::{Error, Result};
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt, Lines};

use crate::ports::UserInteraction;

/// Prompt/answer console over an input and an output stream
pub struct Console<R, W> {
    lines: Lines<R>,
    output: W,
}

impl<R, W> Console<R, W>
where
    R: AsyncBufRead + Unpin + Send,
    W: AsyncWrite + Unpin + Send,
{
    /// Wrap an input and an output stream
    pub fn new(input: R, output: W) -> Self {
        Self {
            lines: input.lines(),
            output,
        }
    }

    /// Print `prompt` without a newline and read one line
    ///
    /// Returns `None` at end of input. The line terminator is removed.
    pub async fn ask(&mut self, prompt: &str) -> Result<Option<String>> {
        self.output.write_all(prompt.as_bytes()).await?;
        self.output.flush().await?;
        let line = self.lines.next_line().await?;
        Ok(line.map(|l| l.trim_end_matches('\r').to_string()))
    }

    /// Print one line
    pub async fn say(&mut self, line: &str) -> Result<()> {
        self.output.write_all(line.as_bytes()).await?;
        self.output.write_all(b"\n").await?;
        self.output.flush().await?;
        Ok(())
    }

    /// Consume the console, returning the output stream
    pub fn into_output(self) -> W {
        self.output
    }
}

#[async_trait]
impl<R, W> UserInteraction for Console<R, W>
where
    R: AsyncBufRead + Unpin + Send,
    W: AsyncWrite + Unpin + Send,
{
    async fn repository(&mut self) -> Result<(String, String)> {
        let owner = self
            .ask(PROMPT_REPO_OWNER)
            .await?
            .ok_or_else(|| Error::invalid_argument("Input closed before the repository owner was entered"))?;
        let repo = self
            .ask(PROMPT_REPO_NAME)
            .await?
            .ok_or_else(|| Error::invalid_argument("Input closed before the repository name was entered"))?;
        Ok((owner.trim().to_string(), repo.trim().to_string()))
    }

    async fn notify(&mut self, message: &str) -> Result<()> {
        self.say(message).await
    }
}
