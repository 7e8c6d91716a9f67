//! Request extractors with consistent error responses

use axum::{
    async_trait,
    extract::{rejection::JsonRejection, FromRequest, Request},
    Json,
};
use serde::de::DeserializeOwned;

use crate::error::ApiError;

/// JSON body extractor whose rejections use the API error format.
///
/// Schema mismatches (missing or mistyped fields) become 422,
/// anything else wrong with the body becomes 400.
pub struct AppJson<T>(pub T);

#[async_trait]
impl<T, S> FromRequest<S> for AppJson<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        match Json::<T>::from_request(req, state).await {
            Ok(Json(value)) => Ok(Self(value)),
            Err(rejection) => Err(match rejection {
                JsonRejection::JsonDataError(err) => ApiError::InvalidBody(err.body_text()),
                JsonRejection::JsonSyntaxError(err) => {
                    ApiError::BadRequest(format!("Invalid JSON syntax: {}", err.body_text()))
                }
                JsonRejection::MissingJsonContentType(err) => {
                    ApiError::BadRequest(err.body_text())
                }
                other => ApiError::BadRequest(other.body_text()),
            }),
        }
    }
}
