use super::service::service;
use super::types::request;
use crate::{modules::upload::types::request::UploadRequest, types::Context};
use axum::{
    extract::{Path, State},
    response::IntoResponse,
    Json,
};
use std::sync::Arc;

pub async fn handler(
    State(ctx): State<Arc<Context>>,
    Path(name): Path<String>,
    Json(event): Json<UploadRequest>,
) -> impl IntoResponse {
    service(ctx, request::Payload { name, event }).await
}
