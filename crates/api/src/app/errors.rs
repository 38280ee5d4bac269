use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;
use thiserror::Error;

use stocklist_core::DomainError;
use stocklist_infra::ServiceError;

/// Failures a handler does not turn into a redirect; all render as 5xx.
#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Service(#[from] ServiceError),

    #[error("failed to render model attribute {name}: {source}")]
    Render {
        name: &'static str,
        #[source]
        source: serde_json::Error,
    },
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let message = self.to_string();
        tracing::error!(error = %message, "request failed");
        let code = match self {
            AppError::Service(_) => "service_error",
            AppError::Render { .. } => "render_error",
        };
        json_error(StatusCode::INTERNAL_SERVER_ERROR, code, message)
    }
}

pub fn json_error(status: StatusCode, code: &'static str, message: impl Into<String>) -> Response {
    (
        status,
        axum::Json(json!({
            "error": code,
            "message": message.into(),
        })),
    )
        .into_response()
}

/// User-facing text for a failed form validation.
pub fn validation_message(err: DomainError) -> String {
    match err {
        DomainError::Validation(msg) => msg,
        other => other.to_string(),
    }
}
