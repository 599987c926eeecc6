use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use person_core::error::CoreError;
use person_db::StoreError;
use serde_json::json;

/// Application-level error type for HTTP handlers.
///
/// Two outcomes reach the client: not-found (404) and everything else
/// (500). Failure messages are passed through unchanged in the `error`
/// field of the JSON body.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A domain-level error from `person_core`.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// A failure inside the person store.
    #[error(transparent)]
    Store(#[from] StoreError),

    /// A request body that could not be decoded into a person input.
    #[error("{0}")]
    MalformedBody(String),
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

impl AppError {
    /// The 404 returned when no person matches a lookup.
    pub fn person_not_found() -> Self {
        AppError::Core(CoreError::NotFound { entity: "Person" })
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = match &self {
            AppError::Core(CoreError::NotFound { .. }) => StatusCode::NOT_FOUND,
            AppError::Core(err @ CoreError::Validation(_)) => {
                tracing::error!(error = %err, "Unexpected validation failure");
                StatusCode::INTERNAL_SERVER_ERROR
            }
            AppError::Store(err) => {
                tracing::error!(error = %err, "Person store error");
                StatusCode::INTERNAL_SERVER_ERROR
            }
            AppError::MalformedBody(msg) => {
                tracing::error!(error = %msg, "Undecodable person body");
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };

        let body = json!({ "error": self.to_string() });

        (status, axum::Json(body)).into_response()
    }
}
