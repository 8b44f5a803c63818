use super::{Author, Media, MediaRecord};
use crate::timestamp::{self, TimestampError};
use chrono::{Duration, Local, NaiveDateTime, SubsecRound as _};
use fake::faker::lorem::en::Paragraph;
use fake::Fake;
use serde::{Deserialize, Serialize};
use tracing::warn;

#[derive(Debug, thiserror::Error)]
pub enum DecodeError {
    #[error("post {id} has an invalid createTime: {source}")]
    CreateTime {
        id: i64,
        #[source]
        source: TimestampError,
    },
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
#[serde(try_from = "PostRecord", into = "PostRecord")]
pub struct Post {
    pub id: i64,
    pub text: Option<String>,
    pub created_at: NaiveDateTime,
    pub likes: u32,
    pub liked: bool,
    pub media: Media,
    pub author: Author,
}

impl Post {
    pub fn text(&self) -> Option<&str> {
        self.text.as_deref()
    }

    pub fn media(&self) -> &Media {
        &self.media
    }

    pub fn fake(id: i64, media: Media) -> Self {
        let minutes_ago: i64 = (1..60 * 24 * 30).fake();
        let created_at =
            (Local::now().naive_local() - Duration::minutes(minutes_ago)).trunc_subsecs(0);

        Self {
            id,
            text: Some(Paragraph(1..3).fake()),
            created_at,
            likes: (0..250).fake(),
            liked: (0..4).fake::<u8>() == 0,
            media,
            author: Author::fake(id + 1000),
        }
    }
}

/// Wire shape of a post, as served by the feed endpoint.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PostRecord {
    pub id: i64,
    pub text: Option<String>,
    pub create_time: String,
    pub likes: u32,
    pub liked: bool,
    pub media: Option<MediaRecord>,
    pub author: Author,
}

impl TryFrom<PostRecord> for Post {
    type Error = DecodeError;

    fn try_from(record: PostRecord) -> Result<Self, Self::Error> {
        let created_at = timestamp::parse_create_time(&record.create_time).map_err(|source| {
            DecodeError::CreateTime {
                id: record.id,
                source,
            }
        })?;

        let media = match record.media {
            None => Media::None,
            Some(media) => match media.media_kind() {
                Some(kind) => Media::new(kind, media.url),
                None => {
                    warn!(
                        "post {} has unknown media type `{}`, rendering without media",
                        record.id, media.kind
                    );
                    Media::None
                }
            },
        };

        Ok(Self {
            id: record.id,
            text: record.text,
            created_at,
            likes: record.likes,
            liked: record.liked,
            media,
            author: record.author,
        })
    }
}

/// Convert from a `Post` model into `PostRecord`
impl From<Post> for PostRecord {
    fn from(value: Post) -> Self {
        Self {
            id: value.id,
            text: value.text,
            create_time: timestamp::format_create_time(&value.created_at),
            likes: value.likes,
            liked: value.liked,
            media: value.media.into(),
            author: value.author,
        }
    }
}
