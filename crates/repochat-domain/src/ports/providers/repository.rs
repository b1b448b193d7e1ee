use crate::entities::{Document, RepositoryCoordinates};
use crate::error::Result;
use async_trait::async_trait;

/// Repository Content Interface
///
/// Downloads the text files of a repository. Filtering (extensions) and
/// request fan-out are configured on the implementation; callers only pass
/// the coordinates.
#[async_trait]
pub trait RepositoryFetcher: Send + Sync {
    /// Fetch every matching file of `repository`, ordered by path
    async fn fetch(&self, repository: &RepositoryCoordinates) -> Result<Vec<Document>>;
}
