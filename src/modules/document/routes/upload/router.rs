use super::handler;
use crate::types::Context;
use axum::routing::{any, Router};
use std::sync::Arc;

pub fn get_router() -> Router<Arc<Context>> {
    Router::new().route("/upload", any(handler::handler))
}
