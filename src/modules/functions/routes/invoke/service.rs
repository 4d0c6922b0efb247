use super::types::{request, response};
use crate::{
    modules::{
        document::Document,
        media::Media,
        upload::{self, Profile},
    },
    types::Context,
};
use std::sync::Arc;

pub async fn service(ctx: Arc<Context>, payload: request::Payload) -> response::Response {
    let name = payload.name.as_str();

    if name == Document::NAME {
        return Ok(response::Success::Invoked(
            upload::handle(ctx, &Document, payload.event).await,
        ));
    }

    if name == Media::NAME {
        return Ok(response::Success::Invoked(
            upload::handle(ctx, &Media, payload.event).await,
        ));
    }

    tracing::warn!("No function registered as {}", name);
    Err(response::Error::FunctionNotFound)
}
