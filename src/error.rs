use axum::{http::StatusCode, response::IntoResponse};

#[derive(Debug, thiserror::Error)]
pub enum PostboardError {
    #[error("404 Not Found")]
    NotFound,

    #[error("500 Internal Server Error")]
    Render(#[from] rinja::Error),
}

impl IntoResponse for PostboardError {
    fn into_response(self) -> axum::response::Response {
        use PostboardError::*;

        let code = match self {
            NotFound => StatusCode::NOT_FOUND,
            Render(ref inner) => {
                tracing::error!("Could not render template: {inner}");
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };

        (code, self.to_string()).into_response()
    }
}
