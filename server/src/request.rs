mod book;

pub use self::book::*;
use crate::error::ErrorStatus;
use axum::async_trait;
use axum::extract::{FromRequest, FromRequestParts, Query, Request};
use axum::http::request::Parts;
use axum::Json;
use error_stack::Report;
use kernel::KernelError;
use serde::de::DeserializeOwned;

/// JSON body whose rejection is rendered as a fail envelope instead of axum's plain text.
pub struct Payload<T>(pub T);

#[async_trait]
impl<S, T> FromRequest<S> for Payload<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = ErrorStatus;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(|rejection| invalid_payload(rejection.body_text()))?;
        Ok(Self(value))
    }
}

/// Query string read as raw key/value pairs, so a repeated key never rejects the request.
pub struct QueryPairs<T>(pub T);

#[async_trait]
impl<S, T> FromRequestParts<S> for QueryPairs<T>
where
    T: FromIterator<(String, String)>,
    S: Send + Sync,
{
    type Rejection = ErrorStatus;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Query(pairs) = Query::<Vec<(String, String)>>::from_request_parts(parts, state)
            .await
            .map_err(|rejection| invalid_payload(rejection.body_text()))?;
        Ok(Self(pairs.into_iter().collect()))
    }
}

fn invalid_payload(detail: String) -> ErrorStatus {
    ErrorStatus::from(Report::new(KernelError::InvalidPayload).attach_printable(detail))
}
