use chrono::format::{Item, StrftimeItems};
use chrono::{Locale, NaiveDateTime};

/// Wire format of `createTime`.
pub const CREATE_TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Long form, e.g. `Saturday, December 5, 2020 1:53 PM`.
pub const DEFAULT_PATTERN: &str = "%A, %B %-d, %Y %-I:%M %p";

pub const DEFAULT_LOCALE: &str = "en_US";

#[derive(Debug, thiserror::Error)]
pub enum TimestampError {
    #[error("invalid timestamp `{value}`: {source}")]
    Parse {
        value: String,
        #[source]
        source: chrono::ParseError,
    },

    #[error("unknown locale `{0}`")]
    Locale(String),

    #[error("invalid date format pattern `{0}`")]
    Pattern(String),
}

pub fn parse_create_time(value: &str) -> Result<NaiveDateTime, TimestampError> {
    NaiveDateTime::parse_from_str(value, CREATE_TIME_FORMAT).map_err(|source| {
        TimestampError::Parse {
            value: value.to_string(),
            source,
        }
    })
}

pub fn format_create_time(value: &NaiveDateTime) -> String {
    value.format(CREATE_TIME_FORMAT).to_string()
}

/// Locale-aware display format for post timestamps.
///
/// Timestamps carry no offset and are shown as the wall-clock time they were
/// recorded with. Patterns are validated up front, so `format` never panics.
#[derive(Clone, Debug)]
pub struct TimestampFormat {
    locale: Locale,
    pattern: String,
}

impl TimestampFormat {
    pub fn new(locale: &str, pattern: &str) -> Result<Self, TimestampError> {
        let parsed =
            Locale::try_from(locale).map_err(|_| TimestampError::Locale(locale.to_string()))?;

        if StrftimeItems::new_with_locale(pattern, parsed).any(|item| matches!(item, Item::Error)) {
            return Err(TimestampError::Pattern(pattern.to_string()));
        }

        Ok(Self {
            locale: parsed,
            pattern: pattern.to_string(),
        })
    }

    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    pub fn format(&self, value: &NaiveDateTime) -> String {
        value
            .and_utc()
            .format_localized(&self.pattern, self.locale)
            .to_string()
    }
}

impl Default for TimestampFormat {
    fn default() -> Self {
        Self {
            locale: Locale::en_US,
            pattern: DEFAULT_PATTERN.to_string(),
        }
    }
}
