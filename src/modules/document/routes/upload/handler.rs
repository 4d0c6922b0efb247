use super::service::service;
use crate::{modules::upload::types::request, types::Context};
use axum::{
    body::Bytes,
    extract::State,
    http::{HeaderMap, Method},
    response::IntoResponse,
};
use std::sync::Arc;

pub async fn handler(
    State(ctx): State<Arc<Context>>,
    method: Method,
    headers: HeaderMap,
    body: Bytes,
) -> impl IntoResponse {
    service(
        ctx,
        request::UploadRequest::from_parts(&method, &headers, &body),
    )
    .await
}
