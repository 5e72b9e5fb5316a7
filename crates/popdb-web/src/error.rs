// crates/popdb-web/src/error.rs
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use popdb_core::PopError;

/// Failure of a request handler.
#[derive(Debug)]
pub enum WebError {
    /// The request is missing something the handler needs.
    BadRequest(String),
    /// The core library failed.
    Core(PopError),
    /// The blocking worker panicked or was cancelled.
    Worker(String),
}

impl From<PopError> for WebError {
    fn from(e: PopError) -> Self {
        WebError::Core(e)
    }
}

impl WebError {
    pub fn status(&self) -> StatusCode {
        match self {
            WebError::BadRequest(_) => StatusCode::BAD_REQUEST,
            WebError::Core(_) | WebError::Worker(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn message(&self) -> String {
        match self {
            WebError::BadRequest(msg) | WebError::Worker(msg) => msg.clone(),
            WebError::Core(e) => e.to_string(),
        }
    }
}

impl IntoResponse for WebError {
    fn into_response(self) -> Response {
        let status = self.status();
        let message = self.message();
        if status.is_server_error() {
            tracing::error!(%status, %message, "request failed");
        } else {
            tracing::warn!(%status, %message, "rejected request");
        }
        (status, message).into_response()
    }
}
