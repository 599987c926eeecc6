//! Request body extraction for person inputs.

use axum::body::Bytes;
use axum::extract::{FromRequest, Request};
use serde::de::DeserializeOwned;

use crate::error::AppError;

/// JSON request body that may be omitted.
///
/// An empty (or all-whitespace) body decodes to `T::default()`. The
/// `Content-Type` header is not inspected. Bodies that fail to decode are
/// rejected with [`AppError::MalformedBody`].
///
/// ```ignore
/// async fn update(PersonBody(input): PersonBody<UpdatePerson>) -> AppResult<Json<Person>> {
///     // ...
/// }
/// ```
#[derive(Debug, Clone, Default)]
pub struct PersonBody<T>(pub T);

impl<S, T> FromRequest<S> for PersonBody<T>
where
    S: Send + Sync,
    T: DeserializeOwned + Default,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let bytes = Bytes::from_request(req, state)
            .await
            .map_err(|rejection| AppError::MalformedBody(rejection.body_text()))?;

        if bytes.iter().all(u8::is_ascii_whitespace) {
            return Ok(Self(T::default()));
        }

        serde_json::from_slice(&bytes)
            .map(Self)
            .map_err(|e| AppError::MalformedBody(e.to_string()))
    }
}
