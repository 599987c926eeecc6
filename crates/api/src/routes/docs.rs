//! Landing page and the OpenAPI JSON document. No interactive docs UI is
//! served.

use axum::extract::State;
use axum::{routing::get, Json, Router};
use serde_json::Value;

use crate::docs::openapi_document;
use crate::state::AppState;

/// GET /
async fn index() -> &'static str {
    "Successful response."
}

/// GET /api-docs: the raw OpenAPI JSON document.
async fn api_docs(State(state): State<AppState>) -> Json<Value> {
    Json(openapi_document(state.config.port))
}

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(index))
        .route("/api-docs", get(api_docs))
}
