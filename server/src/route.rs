mod book;

pub use self::book::*;
use crate::response::Envelope;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;

pub async fn route_not_found() -> impl IntoResponse {
    (
        StatusCode::NOT_FOUND,
        Json(Envelope::fail("route not found")),
    )
}

pub async fn method_not_allowed() -> impl IntoResponse {
    (
        StatusCode::METHOD_NOT_ALLOWED,
        Json(Envelope::fail("method not allowed")),
    )
}
