use crate::model::{self, Media};
use crate::timestamp::TimestampFormat;
use rinja::Template;

/// A single feed entry.
#[derive(Template)]
#[template(path = "components/post.html")]
pub struct Post<'p> {
    pub post: &'p model::Post,
    pub created: String,
}

impl<'p> Post<'p> {
    pub fn new(post: &'p model::Post, timestamps: &TimestampFormat) -> Self {
        Self {
            post,
            created: timestamps.format(&post.created_at),
        }
    }
}
