#![allow(dead_code)]

use postboard::{model::Post, PostSource, SourceError};
use std::sync::atomic::{AtomicUsize, Ordering};

/// Image post, post without media, video post with null text.
pub const POSTS_JSON: &str = include_str!("posts.json");

/// `2020-12-05 13:53:23` in the default long form.
pub const LONG_DATE: &str = "Saturday, December 5, 2020 1:53 PM";

pub fn posts() -> Vec<Post> {
    serde_json::from_str(POSTS_JSON).expect("fixture should decode")
}

pub struct CountingSource {
    posts: Vec<Post>,
    calls: AtomicUsize,
}

impl CountingSource {
    pub fn new(posts: Vec<Post>) -> Self {
        Self {
            posts,
            calls: AtomicUsize::new(0),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait::async_trait]
impl PostSource for CountingSource {
    async fn fetch_posts(&self) -> Result<Vec<Post>, SourceError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(self.posts.clone())
    }
}

pub struct FailingSource;

#[async_trait::async_trait]
impl PostSource for FailingSource {
    async fn fetch_posts(&self) -> Result<Vec<Post>, SourceError> {
        Err(SourceError::Status {
            url: "http://feed.invalid/posts".to_string(),
            status: reqwest::StatusCode::BAD_GATEWAY,
        })
    }
}

/// Rendered `.post` entries, in document order.
pub fn entries(html: &str) -> Vec<&str> {
    html.split(r#"<div class="post" "#).skip(1).collect()
}

pub fn has_media(entry: &str) -> bool {
    entry.contains(r#"<div class="post-image">"#)
}

pub fn has_image(entry: &str) -> bool {
    has_media(entry) && entry.contains("<img src=")
}

pub fn has_video(entry: &str) -> bool {
    has_media(entry) && entry.contains("<video ")
}

/// Contents of the `<small>` inside `.post-author`.
pub fn timestamp(entry: &str) -> Option<&str> {
    let author = &entry[entry.find(r#"<div class="post-author">"#)?..];
    let start = author.find("<small>")? + "<small>".len();
    let end = author[start..].find("</small>")?;

    Some(&author[start..start + end])
}
