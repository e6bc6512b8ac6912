use axum::{
    http::{header, StatusCode},
    response::{IntoResponse, Response},
};
use thiserror::Error;
use tracing::error;

#[derive(Debug, Error)]
#[error("template '{template}' failed to render: {source}")]
pub struct RenderError {
    pub template: &'static str,
    #[source]
    pub source: askama::Error,
}

/// Per-request failures. Neither touches the shared episode snapshot.
#[derive(Debug, Error)]
pub enum PageError {
    #[error(transparent)]
    Render(#[from] RenderError),
    #[error("Method Not Allowed")]
    MethodNotAllowed,
}

impl IntoResponse for PageError {
    fn into_response(self) -> Response {
        match self {
            PageError::Render(err) => {
                error!(template = err.template, error = %err, "failed to render page");
                (StatusCode::INTERNAL_SERVER_ERROR, err.to_string()).into_response()
            }
            PageError::MethodNotAllowed => (
                StatusCode::METHOD_NOT_ALLOWED,
                [(header::ALLOW, "GET")],
                StatusCode::METHOD_NOT_ALLOWED
                    .canonical_reason()
                    .unwrap_or_default(),
            )
                .into_response(),
        }
    }
}
