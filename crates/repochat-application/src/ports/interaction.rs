use async_trait::async_trait;
use repochat_domain::error::Result;

/// Conversation with the user outside the query loop
#[async_trait]
pub trait UserInteraction: Send {
    /// Owner and name of the repository to index, in that order
    ///
    /// Only consulted on the build branch; a reload never asks.
    async fn repository(&mut self) -> Result<(String, String)>;

    /// Show one status line
    async fn notify(&mut self, message: &str) -> Result<()>;
}
