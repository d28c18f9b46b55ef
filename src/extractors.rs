use axum::extract::{rejection::JsonRejection, FromRequest, Request};
use serde::de::DeserializeOwned;

use crate::error::Error;

/// JSON body extractor whose rejection is the crate's validation error,
/// so a malformed payload (bad syntax or wrong shape) gets a 400 with
/// the standard `{status, message}` body instead of axum's plain-text
/// rejection.
pub struct JsonBody<T>(pub T);

impl<S, T> FromRequest<S> for JsonBody<T>
where
    S: Send + Sync,
    T: DeserializeOwned,
{
    type Rejection = Error;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        match axum::Json::<T>::from_request(req, state).await {
            Ok(axum::Json(value)) => Ok(Self(value)),
            Err(rejection) => Err(Error::Validation(rejection.body_text())),
        }
    }
}
