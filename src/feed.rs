use crate::{model::Post, source::PostSource};
use tracing::{debug, info, warn};

/// Lifecycle of a mounted feed.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum FeedState {
    #[default]
    Loading,
    Loaded(Vec<Post>),
    Failed(String),
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Feed {
    state: FeedState,
}

impl Feed {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fetch once from `source` and settle into `Loaded` or `Failed`.
    ///
    /// A failed fetch is kept as state so the feed can still be rendered.
    pub async fn mount(source: &dyn PostSource) -> Self {
        debug!("mounting feed");

        let state = match source.fetch_posts().await {
            Ok(posts) => {
                info!("loaded {} posts", posts.len());
                FeedState::Loaded(posts)
            }
            Err(e) => {
                warn!("could not load posts: {e}");
                FeedState::Failed(e.to_string())
            }
        };

        Self { state }
    }

    pub fn state(&self) -> &FeedState {
        &self.state
    }

    pub fn posts(&self) -> &[Post] {
        match &self.state {
            FeedState::Loaded(posts) => posts,
            FeedState::Loading | FeedState::Failed(_) => &[],
        }
    }

    pub fn error(&self) -> Option<&str> {
        match &self.state {
            FeedState::Failed(error) => Some(error),
            FeedState::Loading | FeedState::Loaded(_) => None,
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self.state, FeedState::Loading)
    }

    pub fn len(&self) -> usize {
        self.posts().len()
    }

    pub fn is_empty(&self) -> bool {
        self.posts().is_empty()
    }
}

impl From<Vec<Post>> for Feed {
    fn from(posts: Vec<Post>) -> Self {
        Self {
            state: FeedState::Loaded(posts),
        }
    }
}
