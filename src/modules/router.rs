use axum::{http::StatusCode, response::IntoResponse, routing::get, Json, Router};
use serde_json::json;

use super::{document, functions, media};
use crate::types::Context;
use std::sync::Arc;

pub async fn health_check() -> impl IntoResponse {
    (
        StatusCode::OK,
        Json(json!({ "message": "Welcome to the event uploads API" })),
    )
}

pub fn get_router() -> Router<Arc<Context>> {
    Router::new()
        .route("/", get(health_check))
        .nest("/documents", document::get_router())
        .nest("/media", media::get_router())
        .nest("/functions", functions::get_router())
}
