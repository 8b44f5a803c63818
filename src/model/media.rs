use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

/// Kinds of attachment a post can carry on the wire.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Display, EnumString)]
#[strum(serialize_all = "lowercase")]
pub enum MediaKind {
    Image,
    Video,
}

/// A post's attachment.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum Media {
    #[default]
    None,
    Image(String),
    Video(String),
}

impl Media {
    pub fn new(kind: MediaKind, url: impl Into<String>) -> Self {
        match kind {
            MediaKind::Image => Self::Image(url.into()),
            MediaKind::Video => Self::Video(url.into()),
        }
    }

    pub fn kind(&self) -> Option<MediaKind> {
        match self {
            Self::None => None,
            Self::Image(_) => Some(MediaKind::Image),
            Self::Video(_) => Some(MediaKind::Video),
        }
    }

    pub fn url(&self) -> Option<&str> {
        match self {
            Self::None => None,
            Self::Image(url) | Self::Video(url) => Some(url),
        }
    }

    pub fn is_none(&self) -> bool {
        matches!(self, Self::None)
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct MediaRecord {
    pub url: String,
    #[serde(rename = "type")]
    pub kind: String,
}

impl MediaRecord {
    pub fn media_kind(&self) -> Option<MediaKind> {
        self.kind.parse().ok()
    }
}

/// Convert from a `Media` model into an optional `MediaRecord`
impl From<Media> for Option<MediaRecord> {
    fn from(value: Media) -> Self {
        let (kind, url) = match value {
            Media::None => return None,
            Media::Image(url) => (MediaKind::Image, url),
            Media::Video(url) => (MediaKind::Video, url),
        };

        Some(MediaRecord {
            url,
            kind: kind.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn media_kind_parses_lowercase_names() {
        assert_eq!("image".parse::<MediaKind>().ok(), Some(MediaKind::Image));
        assert_eq!("video".parse::<MediaKind>().ok(), Some(MediaKind::Video));
        assert!("gif".parse::<MediaKind>().is_err());
        assert!("Image".parse::<MediaKind>().is_err());
    }

    #[test]
    fn none_has_no_url_or_kind() {
        assert_eq!(Media::None.url(), None);
        assert_eq!(Media::None.kind(), None);
        assert!(Media::default().is_none());
    }

    #[test]
    fn record_round_trips_kind_name() {
        let record: Option<MediaRecord> = Media::Video("clip.mp4".into()).into();
        let record = record.expect("video should produce a record");

        assert_eq!(record.kind, "video");
        assert_eq!(record.url, "clip.mp4");
        assert_eq!(record.media_kind(), Some(MediaKind::Video));
    }
}
