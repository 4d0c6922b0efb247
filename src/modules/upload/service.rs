use super::types::{request, response};
use super::Profile;
use crate::{types::Context, utils::storage::StoredObject};
use std::sync::Arc;
use uuid::Uuid;
use validator::Validate;

/// Text after the last `.` of `file_name`, or `default` when there is none.
pub fn extension<'a>(file_name: &'a str, default: &'a str) -> &'a str {
    file_name
        .rsplit_once('.')
        .map(|(_, extension)| extension)
        .unwrap_or(default)
}

fn normalize<P: Profile>(profile: &P, payload: request::Payload) -> request::UploadPayload {
    request::UploadPayload {
        file_name: payload
            .file_name
            .unwrap_or_else(|| P::DEFAULT_FILE_NAME.to_string()),
        file_content: payload.file_content.unwrap_or_default(),
        file_type: profile.file_type(payload.file_type),
    }
}

fn parse_body(body: Option<&[u8]>) -> Result<request::Payload, response::Error> {
    let body = body
        .filter(|body| !body.iter().all(|byte| byte.is_ascii_whitespace()))
        .unwrap_or(b"{}");

    serde_json::from_slice::<request::Payload>(body).map_err(|err| {
        tracing::warn!("Failed to parse upload body: {}", err);
        response::Error::MalformedInput
    })
}

pub async fn service<P: Profile>(
    ctx: Arc<Context>,
    profile: &P,
    request: request::UploadRequest,
) -> response::Response {
    tracing::debug!(
        function = P::NAME,
        method = %request.http_method,
        user_id = request.header("X-User-Id").unwrap_or("-"),
        "Received upload request"
    );

    match request.http_method.as_str() {
        "OPTIONS" => return Ok(response::Success::Preflight),
        "POST" => (),
        method => {
            tracing::warn!("Rejected {} request to {}", method, P::NAME);
            return Err(response::Error::MethodNotAllowed);
        }
    }

    let body = match request.raw_body.as_deref() {
        Some(raw_body) => Some(raw_body),
        None => request.body.as_deref().map(str::as_bytes),
    };
    let payload = normalize(profile, parse_body(body)?);

    payload.validate().map_err(|errors| {
        tracing::warn!("Failed to validate payload: {errors}");
        response::Error::MissingContent
    })?;

    let file_id = Uuid::new_v4();
    let key = format!(
        "{}.{}",
        file_id,
        extension(&payload.file_name, P::DEFAULT_EXTENSION)
    );
    let folder = profile.folder(payload.file_type.as_deref());

    let url = ctx
        .storage
        .put(StoredObject {
            folder: folder.to_string(),
            key,
            content: payload.file_content,
        })
        .await
        .map_err(|err| {
            tracing::error!("Failed to store {}: {:?}", payload.file_name, err);
            response::Error::StorageFailed
        })?;

    tracing::info!("Uploaded {} as {} ({})", payload.file_name, file_id, url);

    Ok(response::Success::Uploaded(response::UploadResult {
        url,
        file_name: payload.file_name,
        file_id,
        file_type: payload.file_type,
    }))
}

/// Runs an upload function end to end and renders the gateway response.
pub async fn handle<P: Profile>(
    ctx: Arc<Context>,
    profile: &P,
    request: request::UploadRequest,
) -> response::UploadResponse {
    service(ctx, profile, request).await.into()
}
