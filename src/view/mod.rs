mod feed;
mod home;
mod layout;
mod post;

pub use feed::*;
pub use home::*;
pub use layout::*;
pub use post::*;

use crate::error::PostboardError;
use axum::{
    body::Body,
    response::{Html, IntoResponse, Response},
};
use rinja::Template;
use std::collections::BTreeMap;

/// Wraps any rendered page view in the site layout. Responses that did not
/// come from a `View` (fragments, errors, static files) pass through as-is.
pub async fn render_view(response: Response) -> Response {
    let Some(RenderedTemplate(content)) = response.extensions().get::<RenderedTemplate>().cloned()
    else {
        return response;
    };

    let metadata = response
        .extensions()
        .get::<ViewData>()
        .cloned()
        .unwrap_or_default();

    match Layout::new(content, metadata).render() {
        Ok(html) => (response.status(), Html(html)).into_response(),
        Err(e) => PostboardError::from(e).into_response(),
    }
}

#[derive(Clone, Debug, Default)]
pub struct ViewData(pub BTreeMap<String, String>);

impl ViewData {
    pub fn new() -> Self {
        Self(BTreeMap::new())
    }
}

impl std::ops::DerefMut for ViewData {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.0
    }
}

impl std::ops::Deref for ViewData {
    type Target = BTreeMap<String, String>;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

#[macro_export]
macro_rules! view_data {
    ($($key:expr => $value:expr, )*) => {
        {
            let mut _data = $crate::view::ViewData::new();
        $(
            let _ = _data.insert($key.to_string(), $value.to_string());
        )*
            _data
        }
    }
}

#[macro_export]
macro_rules! postboard_view {
    ($template:expr , { $($data:tt)* }) => {
        $crate::view::ViewWithData($template, $crate::view_data! { $($data)* })
    };
    ($template:expr, $data:expr) => {
        $crate::view::ViewWithData($template, $data)
    };
    ($template:expr) => {
        $crate::view::View($template)
    };
}

pub trait PostboardView {
    fn to_html(&self) -> Result<String, rinja::Error>;
}

impl<T: Template> PostboardView for T {
    fn to_html(&self) -> Result<String, rinja::Error> {
        self.render()
    }
}

pub struct View<T: PostboardView>(pub T);

pub struct ViewWithData<T: PostboardView>(pub T, pub ViewData);

#[derive(Clone)]
struct RenderedTemplate(String);

fn rendered_response(rendered: Result<String, rinja::Error>) -> Response {
    match rendered {
        Ok(html) => {
            let mut response = Response::new(Body::empty());
            response.extensions_mut().insert(RenderedTemplate(html));
            response
        }
        Err(e) => PostboardError::from(e).into_response(),
    }
}

impl<T: PostboardView> IntoResponse for View<T> {
    fn into_response(self) -> Response {
        rendered_response(self.0.to_html())
    }
}

impl<T: PostboardView> IntoResponse for ViewWithData<T> {
    fn into_response(self) -> Response {
        let mut response = rendered_response(self.0.to_html());
        response.extensions_mut().insert(self.1);
        response
    }
}
