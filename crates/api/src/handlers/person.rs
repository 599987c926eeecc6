//! Handlers for the `/api` person resource.
//!
//! Every `{id_or_name}` path segment is resolved once into a
//! [`PersonKey`] and then passed to exactly one store call.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use person_core::lookup::PersonKey;
use person_db::models::person::{CreatePerson, Person, UpdatePerson};
use serde::Serialize;

use crate::error::{AppError, AppResult};
use crate::extract::PersonBody;
use crate::state::AppState;

/// Confirmation returned by a successful delete.
pub const DELETED_MESSAGE: &str = "Person deleted successfully";

/// `{ "message": ... }` response body.
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: &'static str,
}

/// POST /api
pub async fn create(
    State(state): State<AppState>,
    PersonBody(input): PersonBody<CreatePerson>,
) -> AppResult<(StatusCode, Json<Person>)> {
    let person = state.store.insert(input).await?;
    tracing::info!(id = %person.id, "Person created");
    Ok((StatusCode::CREATED, Json(person)))
}

/// GET /api/{id_or_name}
pub async fn get_by_id_or_name(
    State(state): State<AppState>,
    Path(id_or_name): Path<String>,
) -> AppResult<Json<Person>> {
    let key = PersonKey::resolve(&id_or_name);
    let person = state
        .store
        .find(&key)
        .await?
        .ok_or_else(AppError::person_not_found)?;
    Ok(Json(person))
}

/// PATCH /api/{id_or_name}
///
/// Fields absent from the body keep their stored values.
pub async fn update(
    State(state): State<AppState>,
    Path(id_or_name): Path<String>,
    PersonBody(input): PersonBody<UpdatePerson>,
) -> AppResult<Json<Person>> {
    let key = PersonKey::resolve(&id_or_name);
    let person = state
        .store
        .update(&key, input)
        .await?
        .ok_or_else(AppError::person_not_found)?;
    tracing::info!(id = %person.id, %key, "Person updated");
    Ok(Json(person))
}

/// DELETE /api/{id_or_name}
pub async fn delete(
    State(state): State<AppState>,
    Path(id_or_name): Path<String>,
) -> AppResult<Json<MessageResponse>> {
    let key = PersonKey::resolve(&id_or_name);
    let removed = state
        .store
        .delete(&key)
        .await?
        .ok_or_else(AppError::person_not_found)?;
    tracing::info!(id = %removed.id, %key, "Person deleted");
    Ok(Json(MessageResponse {
        message: DELETED_MESSAGE,
    }))
}
