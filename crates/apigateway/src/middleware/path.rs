use axum::{
    extract::{FromRequestParts, Path},
    http::request::Parts,
};
use serde::de::DeserializeOwned;
use shared::errors::HttpError;

/// Path parameters whose parse failures answer with the validation error body.
pub struct SimplePath<T>(pub T);

impl<S, T> FromRequestParts<S> for SimplePath<T>
where
    T: DeserializeOwned + Send,
    S: Send + Sync,
{
    type Rejection = HttpError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(value) = Path::<T>::from_request_parts(parts, state)
            .await
            .map_err(|rejection| HttpError::malformed_path(rejection.body_text()))?;

        Ok(Self(value))
    }
}
