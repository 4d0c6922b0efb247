pub mod request {
    use axum::{
        body::Bytes,
        http::{HeaderMap, Method},
    };
    use serde::{Deserialize, Serialize};
    use std::collections::HashMap;
    use validator::Validate;

    fn default_method() -> String {
        String::from("POST")
    }

    /// The event a gateway hands to an upload function.
    #[derive(Clone, Debug, Serialize, Deserialize)]
    #[serde(rename_all = "camelCase")]
    pub struct UploadRequest {
        #[serde(default = "default_method")]
        pub http_method: String,
        #[serde(default)]
        pub body: Option<String>,
        #[serde(default)]
        pub headers: HashMap<String, String>,
        /// Body bytes exactly as received over HTTP; parsed in place of `body`.
        #[serde(skip)]
        pub raw_body: Option<Bytes>,
    }

    impl UploadRequest {
        pub fn from_parts(method: &Method, headers: &HeaderMap, body: &Bytes) -> Self {
            let headers = headers
                .iter()
                .filter_map(|(name, value)| {
                    value
                        .to_str()
                        .ok()
                        .map(|value| (name.as_str().to_string(), value.to_string()))
                })
                .collect();

            let raw_body = match body.is_empty() {
                true => None,
                false => Some(body.clone()),
            };

            Self {
                http_method: method.to_string(),
                body: None,
                headers,
                raw_body,
            }
        }

        pub fn header(&self, name: &str) -> Option<&str> {
            self.headers
                .iter()
                .find(|(key, _)| key.eq_ignore_ascii_case(name))
                .map(|(_, value)| value.as_str())
        }
    }

    #[derive(Debug, Deserialize)]
    #[serde(rename_all = "camelCase")]
    pub struct Payload {
        pub file_name: Option<String>,
        pub file_content: Option<String>,
        pub file_type: Option<String>,
    }

    #[derive(Debug, Validate)]
    pub struct UploadPayload {
        pub file_name: String,
        #[validate(length(
            min = 1,
            code = "FILE_CONTENT_REQUIRED",
            message = "File content is required"
        ))]
        pub file_content: String,
        pub file_type: Option<String>,
    }
}

pub mod response {
    use axum::{
        body::Body,
        http::{header::HeaderName, HeaderMap, HeaderValue, StatusCode},
        response::IntoResponse,
    };
    use serde::{Deserialize, Serialize};
    use serde_json::json;
    use std::collections::BTreeMap;
    use uuid::Uuid;

    const ALLOW_ORIGIN: &str = "*";
    const ALLOW_METHODS: &str = "POST, OPTIONS";
    const ALLOW_HEADERS: &str = "Content-Type, X-User-Id";
    const MAX_AGE: &str = "86400";

    #[derive(Clone, Debug, Serialize, Deserialize)]
    #[serde(rename_all = "camelCase")]
    pub struct UploadResult {
        pub url: String,
        pub file_name: String,
        pub file_id: Uuid,
        #[serde(skip_serializing_if = "Option::is_none", default)]
        pub file_type: Option<String>,
    }

    pub enum Success {
        Preflight,
        Uploaded(UploadResult),
    }

    #[derive(Debug)]
    pub enum Error {
        MethodNotAllowed,
        MissingContent,
        MalformedInput,
        StorageFailed,
    }

    pub type Response = Result<Success, Error>;

    /// The response object a gateway expects back from an upload function.
    #[derive(Clone, Debug, Serialize, Deserialize)]
    #[serde(rename_all = "camelCase")]
    pub struct UploadResponse {
        pub status_code: u16,
        pub headers: BTreeMap<String, String>,
        pub body: String,
        pub is_base64_encoded: bool,
    }

    fn json_headers() -> BTreeMap<String, String> {
        BTreeMap::from([
            (String::from("Content-Type"), String::from("application/json")),
            (
                String::from("Access-Control-Allow-Origin"),
                String::from(ALLOW_ORIGIN),
            ),
        ])
    }

    fn preflight_headers() -> BTreeMap<String, String> {
        BTreeMap::from([
            (
                String::from("Access-Control-Allow-Origin"),
                String::from(ALLOW_ORIGIN),
            ),
            (
                String::from("Access-Control-Allow-Methods"),
                String::from(ALLOW_METHODS),
            ),
            (
                String::from("Access-Control-Allow-Headers"),
                String::from(ALLOW_HEADERS),
            ),
            (String::from("Access-Control-Max-Age"), String::from(MAX_AGE)),
        ])
    }

    impl Success {
        fn into_upload_response(self) -> UploadResponse {
            match self {
                Self::Preflight => UploadResponse {
                    status_code: StatusCode::OK.as_u16(),
                    headers: preflight_headers(),
                    body: String::new(),
                    is_base64_encoded: false,
                },
                Self::Uploaded(result) => UploadResponse {
                    status_code: StatusCode::OK.as_u16(),
                    headers: json_headers(),
                    body: json!(result).to_string(),
                    is_base64_encoded: false,
                },
            }
        }
    }

    impl Error {
        pub fn status(&self) -> StatusCode {
            match self {
                Self::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
                Self::MissingContent | Self::MalformedInput => StatusCode::BAD_REQUEST,
                Self::StorageFailed => StatusCode::INTERNAL_SERVER_ERROR,
            }
        }

        pub fn message(&self) -> &'static str {
            match self {
                Self::MethodNotAllowed => "Method not allowed",
                Self::MissingContent => "File content is required",
                Self::MalformedInput => "Invalid request body",
                Self::StorageFailed => "Failed to upload file",
            }
        }

        fn into_upload_response(self) -> UploadResponse {
            UploadResponse {
                status_code: self.status().as_u16(),
                headers: json_headers(),
                body: json!({ "error": self.message() }).to_string(),
                is_base64_encoded: false,
            }
        }
    }

    impl From<Response> for UploadResponse {
        fn from(response: Response) -> Self {
            match response {
                Ok(success) => success.into_upload_response(),
                Err(error) => error.into_upload_response(),
            }
        }
    }

    impl IntoResponse for UploadResponse {
        fn into_response(self) -> axum::response::Response {
            let status = StatusCode::from_u16(self.status_code)
                .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

            let mut headers = HeaderMap::new();
            for (name, value) in self.headers {
                match (
                    HeaderName::try_from(name.as_str()),
                    HeaderValue::try_from(value.as_str()),
                ) {
                    (Ok(name), Ok(value)) => {
                        headers.insert(name, value);
                    }
                    _ => tracing::warn!("Dropping invalid response header {}", name),
                }
            }

            (status, headers, Body::from(self.body)).into_response()
        }
    }
}
