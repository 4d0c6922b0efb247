use axum::{
    body::{to_bytes, Body},
    http::{HeaderMap, Method, Request, StatusCode},
    Router,
};
use event_uploads_backend_rs::{
    app::App,
    types::Context,
    utils::storage::{MemoryStorage, BASE_URL},
};
use regex::Regex;
use serde_json::{json, Value};
use std::sync::Arc;
use tower::ServiceExt;
use uuid::Uuid;

struct Reply {
    status: StatusCode,
    headers: HeaderMap,
    body: String,
}

impl Reply {
    fn json(&self) -> Value {
        serde_json::from_str(&self.body).unwrap()
    }

    fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name).and_then(|value| value.to_str().ok())
    }
}

fn setup() -> (Router, Arc<MemoryStorage>) {
    let storage = Arc::new(MemoryStorage::new(BASE_URL));
    let ctx = Arc::new(Context::with_storage(storage.clone()));
    (App::new(ctx).into_router(), storage)
}

async fn send(router: Router, method: Method, uri: &str, body: Option<Value>) -> Reply {
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .header("Content-Type", "application/json")
        .header("X-User-Id", "user-1")
        .body(match body {
            Some(body) => Body::from(body.to_string()),
            None => Body::empty(),
        })
        .unwrap();

    let response = router.oneshot(request).await.unwrap();
    let status = response.status();
    let headers = response.headers().clone();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();

    Reply {
        status,
        headers,
        body: String::from_utf8(bytes.to_vec()).unwrap(),
    }
}

#[tokio::test]
async fn health_check_responds() {
    for uri in ["/api/", "/api"] {
        let (router, _) = setup();

        let reply = send(router, Method::GET, uri, None).await;

        assert_eq!(reply.status, StatusCode::OK);
        assert_eq!(
            reply.json(),
            json!({ "message": "Welcome to the event uploads API" })
        );
    }
}

#[tokio::test]
async fn preflight_returns_cors_headers_only() {
    for uri in ["/api/documents/upload", "/api/media/upload"] {
        let (router, storage) = setup();

        let reply = send(
            router,
            Method::OPTIONS,
            uri,
            Some(json!({ "fileContent": "QQ==" })),
        )
        .await;

        assert_eq!(reply.status, StatusCode::OK);
        assert_eq!(reply.body, "");
        assert_eq!(reply.header("access-control-allow-origin"), Some("*"));
        assert_eq!(
            reply.header("access-control-allow-methods"),
            Some("POST, OPTIONS")
        );
        assert_eq!(
            reply.header("access-control-allow-headers"),
            Some("Content-Type, X-User-Id")
        );
        assert_eq!(reply.header("access-control-max-age"), Some("86400"));
        assert_eq!(reply.header("content-type"), None);
        assert!(storage.is_empty().await);
    }
}

#[tokio::test]
async fn unsupported_methods_are_not_allowed() {
    for method in [Method::GET, Method::PUT, Method::DELETE, Method::PATCH] {
        let (router, _) = setup();

        let reply = send(router, method, "/api/documents/upload", None).await;

        assert_eq!(reply.status, StatusCode::METHOD_NOT_ALLOWED);
        assert_eq!(reply.json(), json!({ "error": "Method not allowed" }));
        assert_eq!(reply.header("content-type"), Some("application/json"));
        assert_eq!(reply.header("access-control-allow-origin"), Some("*"));
    }
}

#[tokio::test]
async fn missing_content_is_a_bad_request() {
    let bodies = [
        None,
        Some(json!({})),
        Some(json!({ "fileName": "contract.pdf" })),
        Some(json!({ "fileName": "contract.pdf", "fileContent": "" })),
        Some(json!({ "fileContent": null })),
    ];

    for body in bodies {
        let (router, storage) = setup();

        let reply = send(router, Method::POST, "/api/media/upload", body).await;

        assert_eq!(reply.status, StatusCode::BAD_REQUEST);
        assert_eq!(reply.json(), json!({ "error": "File content is required" }));
        assert!(storage.is_empty().await);
    }
}

#[tokio::test]
async fn malformed_body_is_a_bad_request() {
    let (router, _) = setup();

    let request = Request::builder()
        .method(Method::POST)
        .uri("/api/documents/upload")
        .body(Body::from("{\"fileContent\": "))
        .unwrap();
    let response = router.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    assert_eq!(
        serde_json::from_slice::<Value>(&bytes).unwrap(),
        json!({ "error": "Invalid request body" })
    );
}

#[tokio::test]
async fn invalid_utf8_body_is_a_bad_request() {
    let (router, storage) = setup();

    let request = Request::builder()
        .method(Method::POST)
        .uri("/api/documents/upload")
        .header("Content-Type", "application/json")
        .body(Body::from(
            &b"{\"fileName\": \"a\xff.pdf\", \"fileContent\": \"QQ==\"}"[..],
        ))
        .unwrap();
    let response = router.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    assert_eq!(
        serde_json::from_slice::<Value>(&bytes).unwrap(),
        json!({ "error": "Invalid request body" })
    );
    assert!(storage.is_empty().await);
}

#[tokio::test]
async fn uploads_document() {
    let (router, storage) = setup();

    let reply = send(
        router,
        Method::POST,
        "/api/documents/upload",
        Some(json!({ "fileName": "contract.pdf", "fileContent": "QQ==" })),
    )
    .await;

    assert_eq!(reply.status, StatusCode::OK);
    assert_eq!(reply.header("content-type"), Some("application/json"));
    assert_eq!(reply.header("access-control-allow-origin"), Some("*"));

    let body = reply.json();
    assert_eq!(body["fileName"], "contract.pdf");
    assert!(body.get("fileType").is_none());

    let file_id = Uuid::parse_str(body["fileId"].as_str().unwrap()).unwrap();
    assert_eq!(
        body["url"],
        format!("https://storage.example.com/documents/{}.pdf", file_id)
    );

    let records = storage.records().await;
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].url, body["url"]);
}

#[tokio::test]
async fn document_defaults_apply() {
    let (router, _) = setup();

    let reply = send(
        router,
        Method::POST,
        "/api/documents/upload",
        Some(json!({ "fileContent": "QQ==" })),
    )
    .await;
    let body = reply.json();
    assert_eq!(body["fileName"], "document.pdf");

    let (router, _) = setup();
    let reply = send(
        router,
        Method::POST,
        "/api/documents/upload",
        Some(json!({ "fileName": "README", "fileContent": "QQ==" })),
    )
    .await;
    let url = reply.json()["url"].as_str().unwrap().to_string();
    assert!(url.ends_with(".pdf"));

    let (router, _) = setup();
    let reply = send(
        router,
        Method::POST,
        "/api/documents/upload",
        Some(json!({ "fileName": "a.b.docx", "fileContent": "QQ==" })),
    )
    .await;
    let url = reply.json()["url"].as_str().unwrap().to_string();
    assert!(url.ends_with(".docx"));
}

#[tokio::test]
async fn repeated_uploads_get_fresh_ids() {
    let (router, storage) = setup();
    let body = json!({ "fileName": "contract.pdf", "fileContent": "QQ==" });

    let first = send(
        router.clone(),
        Method::POST,
        "/api/documents/upload",
        Some(body.clone()),
    )
    .await
    .json();
    let second = send(router, Method::POST, "/api/documents/upload", Some(body))
        .await
        .json();

    assert_ne!(first["fileId"], second["fileId"]);
    assert_ne!(first["url"], second["url"]);
    assert_eq!(storage.len().await, 2);
}

#[tokio::test]
async fn uploads_video_into_videos_folder() {
    let (router, _) = setup();

    let reply = send(
        router,
        Method::POST,
        "/api/media/upload",
        Some(json!({ "fileName": "clip.mov", "fileContent": "QQ==", "fileType": "video" })),
    )
    .await;

    assert_eq!(reply.status, StatusCode::OK);

    let body = reply.json();
    assert_eq!(body["fileType"], "video");
    assert_eq!(body["fileName"], "clip.mov");

    let pattern =
        Regex::new(r"^https://storage\.example\.com/videos/([0-9a-f-]{36})\.mov$").unwrap();
    let url = body["url"].as_str().unwrap();
    let captures = pattern.captures(url).unwrap();
    assert_eq!(&captures[1], body["fileId"].as_str().unwrap());
}

#[tokio::test]
async fn media_defaults_route_to_photos() {
    let (router, _) = setup();

    let reply = send(
        router,
        Method::POST,
        "/api/media/upload",
        Some(json!({ "fileContent": "QQ==" })),
    )
    .await;

    let body = reply.json();
    assert_eq!(body["fileName"], "media.jpg");
    assert_eq!(body["fileType"], "image");

    let pattern =
        Regex::new(r"^https://storage\.example\.com/photos/[0-9a-f-]{36}\.jpg$").unwrap();
    assert!(pattern.is_match(body["url"].as_str().unwrap()));
}

#[tokio::test]
async fn media_file_type_other_than_image_routes_to_videos() {
    for file_type in ["video", "Image", "xyz"] {
        let (router, _) = setup();

        let reply = send(
            router,
            Method::POST,
            "/api/media/upload",
            Some(json!({ "fileName": "snap", "fileContent": "QQ==", "fileType": file_type })),
        )
        .await;

        let body = reply.json();
        assert_eq!(body["fileType"], file_type);

        let url = body["url"].as_str().unwrap();
        assert!(url.starts_with("https://storage.example.com/videos/"));
        assert!(url.ends_with(".jpg"));
    }
}

#[tokio::test]
async fn functions_dispatch_gateway_events() {
    let (router, storage) = setup();

    let reply = send(
        router,
        Method::POST,
        "/api/functions/upload-media",
        Some(json!({
            "httpMethod": "POST",
            "body": json!({ "fileName": "clip.mov", "fileContent": "QQ==", "fileType": "video" }).to_string(),
            "headers": { "X-User-Id": "user-1" }
        })),
    )
    .await;

    assert_eq!(reply.status, StatusCode::OK);

    let event = reply.json();
    assert_eq!(event["statusCode"], 200);
    assert_eq!(event["isBase64Encoded"], false);
    assert_eq!(event["headers"]["Content-Type"], "application/json");
    assert_eq!(event["headers"]["Access-Control-Allow-Origin"], "*");

    let body: Value = serde_json::from_str(event["body"].as_str().unwrap()).unwrap();
    assert_eq!(body["fileType"], "video");
    assert!(body["url"]
        .as_str()
        .unwrap()
        .starts_with("https://storage.example.com/videos/"));
    assert_eq!(storage.len().await, 1);
}

#[tokio::test]
async fn functions_default_to_post() {
    let (router, _) = setup();

    let reply = send(
        router,
        Method::POST,
        "/api/functions/upload-document",
        Some(json!({ "body": json!({ "fileContent": "QQ==" }).to_string() })),
    )
    .await;

    let event = reply.json();
    assert_eq!(event["statusCode"], 200);

    let body: Value = serde_json::from_str(event["body"].as_str().unwrap()).unwrap();
    assert_eq!(body["fileName"], "document.pdf");
}

#[tokio::test]
async fn functions_render_preflight_and_errors() {
    let (router, _) = setup();
    let reply = send(
        router,
        Method::POST,
        "/api/functions/upload-document",
        Some(json!({ "httpMethod": "OPTIONS", "body": null })),
    )
    .await;

    let event = reply.json();
    assert_eq!(event["statusCode"], 200);
    assert_eq!(event["body"], "");
    assert_eq!(event["headers"]["Access-Control-Max-Age"], "86400");
    assert!(event["headers"].get("Content-Type").is_none());

    let (router, _) = setup();
    let reply = send(
        router,
        Method::POST,
        "/api/functions/upload-document",
        Some(json!({ "httpMethod": "GET" })),
    )
    .await;

    let event = reply.json();
    assert_eq!(event["statusCode"], 405);
    assert_eq!(
        serde_json::from_str::<Value>(event["body"].as_str().unwrap()).unwrap(),
        json!({ "error": "Method not allowed" })
    );
}

#[tokio::test]
async fn unknown_function_is_not_found() {
    let (router, _) = setup();

    let reply = send(
        router,
        Method::POST,
        "/api/functions/upload-avatar",
        Some(json!({ "httpMethod": "POST" })),
    )
    .await;

    assert_eq!(reply.status, StatusCode::NOT_FOUND);
    assert_eq!(reply.json(), json!({ "error": "Function not found" }));
}
