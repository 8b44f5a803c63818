use super::Post;
use crate::feed;
use crate::timestamp::TimestampFormat;
use rinja::Template;

#[derive(Template)]
#[template(path = "components/feed.html")]
pub struct Feed<'f> {
    pub entries: Vec<Post<'f>>,
    pub loading: bool,
    pub failed: bool,
}

impl<'f> Feed<'f> {
    pub fn new(feed: &'f feed::Feed, timestamps: &TimestampFormat) -> Self {
        let entries = feed
            .posts()
            .iter()
            .map(|post| Post::new(post, timestamps))
            .collect();

        Self {
            entries,
            loading: feed.is_loading(),
            failed: feed.error().is_some(),
        }
    }
}
