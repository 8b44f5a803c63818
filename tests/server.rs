mod common;

use axum::{
    body::Body,
    http::{header, Request, StatusCode},
    Router,
};
use common::{entries, CountingSource, LONG_DATE};
use postboard::{App, Config, Postboard, TimestampFormat};
use std::sync::Arc;
use tower::ServiceExt as _;

fn router(app: App) -> Router {
    postboard::router(app, "static")
}

async fn get(router: Router, uri: &str) -> (StatusCode, Option<String>, String) {
    let response = router
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();

    let status = response.status();
    let content_type = response
        .headers()
        .get(header::CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .map(str::to_string);
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();

    (status, content_type, String::from_utf8(body.to_vec()).unwrap())
}

#[tokio::test]
async fn home_renders_feed_inside_layout() {
    let app = App::new(common::posts(), TimestampFormat::default());

    let (status, content_type, html) = get(router(app), "/").await;

    assert_eq!(status, StatusCode::OK);
    assert!(content_type.unwrap().starts_with("text/html"));
    assert!(html.starts_with("<!DOCTYPE html>"));
    assert!(html.contains("<title>Feed · postboard</title>"));
    assert_eq!(entries(&html).len(), 3);
    assert!(html.contains(LONG_DATE));
}

#[tokio::test]
async fn feed_fragment_has_no_layout() {
    let app = App::new(common::posts(), TimestampFormat::default());

    let (status, _, html) = get(router(app), "/feed").await;

    assert_eq!(status, StatusCode::OK);
    assert!(html.starts_with(r#"<section class="feed">"#));
    assert!(!html.contains("<html"));
    assert_eq!(entries(&html).len(), 3);
}

#[tokio::test]
async fn every_request_mounts_its_own_feed() {
    let source = Arc::new(CountingSource::new(common::posts()));
    let app = App::with_source(source.clone(), TimestampFormat::default());
    let router = router(app);

    get(router.clone(), "/").await;
    assert_eq!(source.calls(), 1);

    get(router, "/feed").await;
    assert_eq!(source.calls(), 2);
}

#[tokio::test]
async fn failing_source_still_renders_page() {
    let app = App::new(common::FailingSource, TimestampFormat::default());

    let (status, _, html) = get(router(app), "/").await;

    assert_eq!(status, StatusCode::OK);
    assert!(html.contains("Posts could not be loaded."));
    assert!(!html.contains("http://feed.invalid/posts"));
    assert!(entries(&html).is_empty());
}

#[tokio::test]
async fn unknown_paths_are_not_found() {
    let app = App::new(common::posts(), TimestampFormat::default());

    let (status, _, _) = get(router(app), "/profiles").await;

    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn render_once_uses_configured_source() {
    let dir = tempfile::tempdir().unwrap();
    let posts = dir.path().join("posts.json");
    std::fs::write(&posts, common::POSTS_JSON).unwrap();
    let config_path = dir.path().join("config.yml");
    std::fs::write(
        &config_path,
        format!("posts_file: {}\n", posts.display()),
    )
    .unwrap();

    let config = Config::load(Some(config_path)).unwrap();
    let html = Postboard::boot(config).unwrap().render_once().await.unwrap();

    assert_eq!(entries(&html).len(), 3);
}
