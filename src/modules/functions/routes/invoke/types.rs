pub mod request {
    use crate::modules::upload::types::request::UploadRequest;

    pub struct Payload {
        pub name: String,
        pub event: UploadRequest,
    }
}

pub mod response {
    use crate::modules::upload::types::response::UploadResponse;
    use axum::{extract::Json, http::StatusCode, response::IntoResponse};
    use serde_json::json;

    pub enum Success {
        Invoked(UploadResponse),
    }

    impl IntoResponse for Success {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::Invoked(response) => (StatusCode::OK, Json(json!(response))).into_response(),
            }
        }
    }

    pub enum Error {
        FunctionNotFound,
    }

    impl IntoResponse for Error {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::FunctionNotFound => (
                    StatusCode::NOT_FOUND,
                    Json(json!({ "error": "Function not found" })),
                )
                    .into_response(),
            }
        }
    }

    pub type Response = Result<Success, Error>;
}
