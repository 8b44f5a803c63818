use crate::{app::App, feed::Feed, postboard_view, view};
use axum::{
    extract::State,
    response::{IntoResponse, Response},
};

pub async fn home(State(app): State<App>) -> Response {
    let feed = Feed::mount(app.source()).await;
    let feed = view::Feed::new(&feed, app.timestamps());

    postboard_view!(view::Home { feed }, {
        "title" => "Feed",
    })
    .into_response()
}
