use crate::errors::AppError;
use axum::extract::{FromRequest, Json, Request};
use serde::de::DeserializeOwned;

/// `axum::Json` whose rejection is an [`AppError`].
///
/// Domain validation stays with the domain; this only guarantees that a
/// missing content type or malformed body still answers with the shared
/// error body instead of axum's plain-text rejection.
///
/// ```ignore
/// async fn create(JsonBody(payload): JsonBody<NewThing>) -> impl IntoResponse { ... }
/// ```
pub struct JsonBody<T>(pub T);

impl<T, S> FromRequest<S> for JsonBody<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(data) = Json::<T>::from_request(req, state).await?;
        Ok(JsonBody(data))
    }
}
