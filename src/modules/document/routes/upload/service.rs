use crate::{
    modules::{
        document::Document,
        upload::{self, types::request, types::response},
    },
    types::Context,
};
use std::sync::Arc;

pub async fn service(
    ctx: Arc<Context>,
    payload: request::UploadRequest,
) -> response::UploadResponse {
    upload::handle(ctx, &Document, payload).await
}
