use confique::{yaml::FormatOptions, Config as _};
use serde::{Deserialize, Serialize};
use std::{net::SocketAddr, path::PathBuf, sync::Arc};

use crate::{
    source::{FakePostSource, FilePostSource, HttpPostSource, PostSource, SourceError},
    timestamp::{TimestampError, TimestampFormat},
};

type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    Confique(#[from] confique::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("Could not determine config dir parent path")]
    ParentPath,

    #[error("Config file already exists: {}", .0.display())]
    Exists(PathBuf),

    #[error(transparent)]
    Xdg(#[from] xdg::BaseDirectoriesError),

    #[error(transparent)]
    Source(#[from] SourceError),

    #[error(transparent)]
    Timestamp(#[from] TimestampError),
}

#[derive(Clone, Debug, Serialize, Deserialize, confique::Config)]
pub struct Config {
    /// Address the HTTP server listens on
    #[config(env = "POSTBOARD_LISTEN_ADDR", default = "127.0.0.1:3000")]
    pub listen_addr: SocketAddr,

    /// Directory served under /static
    #[config(default = "static")]
    pub static_dir: PathBuf,

    /// URL returning the feed as a JSON array of posts
    #[config(env = "POSTBOARD_POSTS_URL")]
    pub posts_url: Option<String>,

    /// JSON file holding the feed, used when no posts_url is set
    #[config(env = "POSTBOARD_POSTS_FILE")]
    pub posts_file: Option<PathBuf>,

    /// Number of generated posts when neither posts_url nor posts_file is set
    #[config(default = 5)]
    pub fake_posts: usize,

    /// Locale used for month and weekday names
    #[config(default = "en_US")]
    pub locale: String,

    /// strftime pattern for post timestamps
    #[config(default = "%A, %B %-d, %Y %-I:%M %p")]
    pub date_format: String,
}

impl Config {
    pub fn load(config_path: Option<PathBuf>) -> Result<Config> {
        let config_path = get_config_path(config_path)?;
        let config = Config::builder().env().file(config_path).load()?;

        Ok(config)
    }

    pub fn post_source(&self) -> Result<Arc<dyn PostSource>> {
        let source: Arc<dyn PostSource> = match (&self.posts_url, &self.posts_file) {
            (Some(url), _) => Arc::new(HttpPostSource::new(url.clone())?),
            (None, Some(path)) => Arc::new(FilePostSource::new(path.clone())),
            (None, None) => Arc::new(FakePostSource::new(self.fake_posts)),
        };

        Ok(source)
    }

    pub fn timestamp_format(&self) -> Result<TimestampFormat> {
        Ok(TimestampFormat::new(&self.locale, &self.date_format)?)
    }
}

/// Write the config template, leaving an existing file untouched.
pub fn init_config(config_path: Option<PathBuf>) -> Result<PathBuf> {
    let config_path = get_config_path(config_path)?;
    if config_path.exists() {
        return Err(Error::Exists(config_path));
    }

    write_config_template(Some(config_path))
}

const CONFIG_PREFIX: &str = "postboard";
const CONFIG_FILE: &str = "config.yml";

/// Commented YAML listing every key with its default.
pub fn get_config_template() -> String {
    confique::yaml::template::<Config>(FormatOptions::default())
}

pub fn print_config_template() {
    println!("{}", get_config_template());
}

/// `$XDG_CONFIG_HOME/postboard/config.yml` unless a path is given.
pub fn get_config_path(config_path: Option<PathBuf>) -> Result<PathBuf> {
    if let Some(path) = config_path {
        return Ok(path);
    }

    let dirs = xdg::BaseDirectories::with_prefix(CONFIG_PREFIX)?;
    Ok(dirs.get_config_file(CONFIG_FILE))
}

pub fn write_config_template(config_path: Option<PathBuf>) -> Result<PathBuf> {
    let path = get_config_path(config_path)?;

    std::fs::create_dir_all(path.parent().ok_or(Error::ParentPath)?)?;
    std::fs::write(&path, get_config_template())?;

    Ok(path)
}
