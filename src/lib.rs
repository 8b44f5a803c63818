use anyhow::Result;
use axum::{middleware, routing::get, Router};
use rinja::Template as _;
use std::path::Path;
use tokio::signal;
use tower_http::{services::ServeDir, trace::TraceLayer};
use tracing::info;

mod app;
pub mod cli;
pub mod config;
mod controller;
pub mod error;
pub mod feed;
pub mod model;
pub mod source;
pub mod timestamp;
pub mod view;

pub use {
    app::App,
    config::Config,
    error::PostboardError,
    feed::{Feed, FeedState},
    source::{PostSource, SourceError},
    timestamp::TimestampFormat,
};

pub struct Postboard {
    app: App,
    config: Config,
}

impl Postboard {
    pub fn boot(config: Config) -> Result<Self> {
        let app = App::with_source(config.post_source()?, config.timestamp_format()?);

        Ok(Self { app, config })
    }

    /// Mount the feed once and render it without the page layout.
    pub async fn render_once(&self) -> Result<String> {
        let feed = Feed::mount(self.app.source()).await;

        Ok(view::Feed::new(&feed, self.app.timestamps()).render()?)
    }

    pub async fn serve(self) -> Result<()> {
        let router = router(self.app, &self.config.static_dir);

        let listener = tokio::net::TcpListener::bind(self.config.listen_addr).await?;
        info!("listening on {}", listener.local_addr()?);

        axum::serve(listener, router.into_make_service())
            .with_graceful_shutdown(shutdown_signal())
            .await?;

        Ok(())
    }
}

pub fn router(app: App, static_dir: impl AsRef<Path>) -> Router {
    Router::new()
        .route("/", get(controller::home))
        .route("/feed", get(controller::feed))
        .nest_service("/static", ServeDir::new(static_dir))
        .fallback(|| async { PostboardError::NotFound })
        .layer(middleware::map_response(view::render_view))
        .layer(TraceLayer::new_for_http())
        .with_state(app)
}

pub async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    tokio::select! {
        _ = ctrl_c => info!("received Ctrl+C, shutting down"),
        _ = terminate => info!("received SIGTERM, shutting down"),
    }
}
