use crate::model::Post;

mod fake;
mod file;
mod http;

pub use self::fake::FakePostSource;
pub use file::FilePostSource;
pub use http::HttpPostSource;

#[derive(Debug, thiserror::Error)]
pub enum SourceError {
    #[error(transparent)]
    Http(#[from] reqwest::Error),

    #[error("{url} responded with {status}")]
    Status {
        url: String,
        status: reqwest::StatusCode,
    },

    #[error("could not decode posts: {0}")]
    Decode(#[from] serde_json::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Where a feed gets its posts from.
///
/// A feed calls `fetch_posts` exactly once when it is mounted and renders the
/// result in the order it was returned.
#[async_trait::async_trait]
pub trait PostSource: Send + Sync {
    async fn fetch_posts(&self) -> Result<Vec<Post>, SourceError>;
}

/// Posts already held in memory.
#[async_trait::async_trait]
impl PostSource for Vec<Post> {
    async fn fetch_posts(&self) -> Result<Vec<Post>, SourceError> {
        Ok(self.clone())
    }
}

pub(crate) fn decode_posts(bytes: &[u8]) -> Result<Vec<Post>, SourceError> {
    Ok(serde_json::from_slice(bytes)?)
}
