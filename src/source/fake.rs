use super::{PostSource, SourceError};
use crate::model::{Media, Post};

const SAMPLE_VIDEO: &str = "https://interactive-examples.mdn.mozilla.net/media/cc0-videos/flower.mp4";

/// Generates posts on every fetch. Attachments cycle through image, none and
/// video so every entry shape shows up in a small feed.
pub struct FakePostSource {
    count: usize,
}

impl FakePostSource {
    pub fn new(count: usize) -> Self {
        Self { count }
    }
}

#[async_trait::async_trait]
impl PostSource for FakePostSource {
    async fn fetch_posts(&self) -> Result<Vec<Post>, SourceError> {
        let posts = (0..self.count)
            .map(|i| {
                let id = i as i64 + 1;
                let media = match i % 3 {
                    0 => Media::Image(format!("https://picsum.photos/seed/{id}/640/360")),
                    1 => Media::None,
                    _ => Media::Video(SAMPLE_VIDEO.to_string()),
                };

                Post::fake(id, media)
            })
            .collect();

        Ok(posts)
    }
}
