use crate::{app::App, error::PostboardError, feed::Feed, view};
use axum::{extract::State, response::Html};
use rinja::Template as _;

/// The feed on its own, without the page layout.
pub async fn feed(State(app): State<App>) -> Result<Html<String>, PostboardError> {
    let feed = Feed::mount(app.source()).await;
    let html = view::Feed::new(&feed, app.timestamps()).render()?;

    Ok(Html(html))
}
