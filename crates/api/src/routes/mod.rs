pub mod docs;
pub mod health;

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::person;
use crate::state::AppState;

/// Build the `/api` route tree.
///
/// ```text
/// POST   /api, /api/            -> create
/// GET    /api/{id_or_name}      -> get_by_id_or_name
/// PATCH  /api/{id_or_name}      -> update
/// DELETE /api/{id_or_name}      -> delete
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/api", post(person::create))
        .route("/api/", post(person::create))
        .route(
            "/api/{id_or_name}",
            get(person::get_by_id_or_name)
                .patch(person::update)
                .delete(person::delete),
        )
}
