use super::{decode_posts, PostSource, SourceError};
use crate::model::Post;
use std::path::PathBuf;
use tracing::debug;

/// Reads a JSON array of posts from disk on every fetch.
pub struct FilePostSource {
    path: PathBuf,
}

impl FilePostSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait::async_trait]
impl PostSource for FilePostSource {
    async fn fetch_posts(&self) -> Result<Vec<Post>, SourceError> {
        debug!("reading posts from {}", self.path.display());

        let bytes = tokio::fs::read(&self.path).await?;
        decode_posts(&bytes)
    }
}
