use axum::{
    extract::State,
    http::{Method, StatusCode, header},
    response::{IntoResponse, Response},
};
use std::sync::Arc;
use tracing::debug;

pub const METHOD_NOT_ALLOWED_BODY: &str = "Method Not Allowed\n";

#[derive(Clone)]
pub struct AppState {
    pub greeting: Arc<str>,
}

/// `GET /`. Also answers any path that has no route of its own.
pub async fn home(State(state): State<AppState>, method: Method) -> Response {
    if method != Method::GET {
        return method_not_allowed(&method);
    }
    plain_text(StatusCode::OK, state.greeting.to_string())
}

/// `GET /health`.
pub async fn health(method: Method) -> Response {
    if method != Method::GET {
        return method_not_allowed(&method);
    }
    plain_text(StatusCode::OK, "OK".to_string())
}

fn method_not_allowed(method: &Method) -> Response {
    debug!("Rejecting {} request", method);
    plain_text(
        StatusCode::METHOD_NOT_ALLOWED,
        METHOD_NOT_ALLOWED_BODY.to_string(),
    )
}

fn plain_text(status: StatusCode, body: String) -> Response {
    (
        status,
        [(header::CONTENT_TYPE, "text/plain; charset=utf-8")],
        body,
    )
        .into_response()
}
