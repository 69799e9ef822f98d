use axum::{
    body::Body,
    http::{Request, StatusCode},
    Router,
};
use face_match::server::{create_router, AppState};
use face_match::LocalStore;
use http_body_util::BodyExt;
use serde_json::Value;
use tempfile::TempDir;
use tower::ServiceExt;

const BOUNDARY: &str = "---------------------------123456789012345678901234567";
const PNG_BYTES: &[u8] = b"\x89PNG\r\n\x1a\nfake image data";

async fn setup(max_upload_size: usize) -> (Router, TempDir) {
    let tmp = tempfile::tempdir().unwrap();
    let store = LocalStore::init(tmp.path().join("uploads")).await.unwrap();
    (create_router(AppState::new(store), max_upload_size), tmp)
}

fn multipart_body(field: &str, file_name: &str, content_type: &str, data: &[u8]) -> Vec<u8> {
    let mut body = format!(
        "--{boundary}\r\n\
        Content-Disposition: form-data; name=\"{field}\"; filename=\"{file_name}\"\r\n\
        Content-Type: {content_type}\r\n\r\n",
        boundary = BOUNDARY,
    )
    .into_bytes();
    body.extend_from_slice(data);
    body.extend_from_slice(format!("\r\n--{}--\r\n", BOUNDARY).as_bytes());
    body
}

fn upload_request(uri: &str, body: Vec<u8>) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header(
            "Content-Type",
            format!("multipart/form-data; boundary={}", BOUNDARY),
        )
        .body(Body::from(body))
        .unwrap()
}

async fn read_json(response: axum::response::Response) -> Value {
    let body = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&body).unwrap()
}

#[tokio::test]
async fn test_welcome() {
    let (app, _tmp) = setup(1024).await;

    let response = app
        .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let json = read_json(response).await;
    assert_eq!(json["message"], "Welcome to the Face Match API");
}

#[tokio::test]
async fn test_upload_flow() {
    let (app, tmp) = setup(1024 * 1024).await;

    let response = app
        .oneshot(upload_request(
            "/uploads",
            multipart_body("file", "me.png", "image/png", PNG_BYTES),
        ))
        .await
        .unwrap();

    let status = response.status();
    let json = read_json(response).await;
    assert_eq!(status, StatusCode::OK, "unexpected body: {}", json);
    assert_eq!(json["message"], "File uploaded successfully!");

    let file_path = json["file_path"].as_str().unwrap();
    assert!(file_path.ends_with(".png"));
    assert!(file_path.starts_with(tmp.path().join("uploads").to_str().unwrap()));
    assert_eq!(std::fs::read(file_path).unwrap(), PNG_BYTES);
}

#[tokio::test]
async fn test_legacy_path_uses_same_handler() {
    let (app, tmp) = setup(1024 * 1024).await;

    let response = app
        .oneshot(upload_request(
            "/upload",
            multipart_body("file", "me.gif", "image/gif", b"GIF89a"),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let stored = std::fs::read_dir(tmp.path().join("uploads")).unwrap().count();
    assert_eq!(stored, 1);
}

#[tokio::test]
async fn test_rejects_wrong_type() {
    let (app, tmp) = setup(1024 * 1024).await;

    for (name, content_type) in [
        ("notes.txt", "text/plain"),
        ("me.png", "text/plain"),
        ("me.webp", "image/webp"),
        ("me.bmp", "image/png"),
    ] {
        let response = app
            .clone()
            .oneshot(upload_request(
                "/uploads",
                multipart_body("file", name, content_type, b"data"),
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST, "{}", name);
        let json = read_json(response).await;
        assert_eq!(json["error"], "Invalid file type or extension");
    }

    let stored = std::fs::read_dir(tmp.path().join("uploads")).unwrap().count();
    assert_eq!(stored, 0);
}

#[tokio::test]
async fn test_rejects_missing_file_field() {
    let (app, _tmp) = setup(1024 * 1024).await;

    let response = app
        .oneshot(upload_request(
            "/uploads",
            multipart_body("image", "me.png", "image/png", PNG_BYTES),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = read_json(response).await;
    assert_eq!(json["error"], "Invalid file upload");
}

#[tokio::test]
async fn test_rejects_oversized_body() {
    let (app, tmp) = setup(64).await;

    let response = app
        .oneshot(upload_request(
            "/uploads",
            multipart_body("file", "big.png", "image/png", &[0u8; 4096]),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = read_json(response).await;
    assert_eq!(json["error"], "Invalid file upload");

    let stored = std::fs::read_dir(tmp.path().join("uploads")).unwrap().count();
    assert_eq!(stored, 0);
}

#[tokio::test]
async fn test_cors_preflight() {
    let (app, _tmp) = setup(1024).await;

    let response = app
        .oneshot(
            Request::builder()
                .method("OPTIONS")
                .uri("/uploads")
                .header("Origin", "http://localhost:8081")
                .header("Access-Control-Request-Method", "POST")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.headers()["access-control-allow-origin"],
        "*"
    );
}
