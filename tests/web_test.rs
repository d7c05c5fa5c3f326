//! Integration tests for the web routes, driven through the router without
//! binding a socket.

use std::fs;
use std::path::Path;

use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use axum::response::Response;
use http_body_util::BodyExt;
use tempfile::TempDir;
use tower::ServiceExt;

use docsift::search::SearchContext;
use docsift::web::{AppState, app_router};

const PNG_BYTES: &[u8] = &[0x89, b'P', b'N', b'G', 0x0d, 0x0a, 0x1a, 0x0a];

fn write(root: &Path, relative: &str, content: &[u8]) {
    let path = root.join(relative);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(path, content).unwrap();
}

fn fixture() -> (TempDir, axum::Router) {
    let temp = TempDir::new().unwrap();
    let docs = temp.path().join("docs");
    write(&docs, "a.md", b"# Cats\n\ncats and dogs\n\n| col | val |\n|-----|-----|\n| x | 1 |\n");
    write(&docs, "b.md", b"dogs and birds\n\n![logo](img/logo.png)\n");
    write(&docs, "img/logo.png", PNG_BYTES);
    write(&docs, "notes.txt", b"not a document");
    write(temp.path(), "secret.md", b"outside the corpus");

    let state = AppState::new(
        SearchContext::new(&docs),
        vec!["png".to_string(), "jpg".to_string(), "jpeg".to_string()],
    )
    .unwrap();
    (temp, app_router(state))
}

async fn send(app: axum::Router, request: Request<Body>) -> Response {
    app.oneshot(request).await.unwrap()
}

async fn get(app: axum::Router, uri: &str) -> Response {
    send(app, Request::builder().uri(uri).body(Body::empty()).unwrap()).await
}

async fn body_bytes(response: Response) -> Vec<u8> {
    response.into_body().collect().await.unwrap().to_bytes().to_vec()
}

async fn body_text(response: Response) -> String {
    String::from_utf8(body_bytes(response).await).unwrap()
}

#[tokio::test]
async fn test_index_serves_form() {
    let (_temp, app) = fixture();

    let response = get(app, "/").await;

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_text(response).await;
    assert!(body.contains("<form action=\"/search\" method=\"post\">"));
    assert!(body.contains("name=\"query\""));
}

#[tokio::test]
async fn test_search_get_ranks_results() {
    let (_temp, app) = fixture();

    let response = get(app, "/search?query=birds").await;

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_text(response).await;
    let b = body.find("href=\"/view/b.md\"").unwrap();
    let a = body.find("href=\"/view/a.md\"").unwrap();
    assert!(b < a);
    assert!(body.contains("Results for &ldquo;birds&rdquo;"));
}

#[tokio::test]
async fn test_search_post_form() {
    let (_temp, app) = fixture();

    let request = Request::builder()
        .method("POST")
        .uri("/search")
        .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
        .body(Body::from("query=cats"))
        .unwrap();
    let response = send(app, request).await;

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_text(response).await;
    let a = body.find("href=\"/view/a.md\"").unwrap();
    let b = body.find("href=\"/view/b.md\"").unwrap();
    assert!(a < b);
}

#[tokio::test]
async fn test_search_post_empty_query_string_uses_form() {
    let (_temp, app) = fixture();

    let request = Request::builder()
        .method("POST")
        .uri("/search?query=")
        .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
        .body(Body::from("query=birds"))
        .unwrap();
    let response = send(app, request).await;

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_text(response).await;
    assert!(body.contains("Results for &ldquo;birds&rdquo;"));
    let b = body.find("href=\"/view/b.md\"").unwrap();
    let a = body.find("href=\"/view/a.md\"").unwrap();
    assert!(b < a);
}

#[tokio::test]
async fn test_search_post_query_string_wins_over_form() {
    let (_temp, app) = fixture();

    let request = Request::builder()
        .method("POST")
        .uri("/search?query=cats")
        .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
        .body(Body::from("query=birds"))
        .unwrap();
    let response = send(app, request).await;

    let body = body_text(response).await;
    assert!(body.contains("Results for &ldquo;cats&rdquo;"));
}

#[tokio::test]
async fn test_search_without_query() {
    let (_temp, app) = fixture();

    let response = get(app, "/search").await;

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_text(response).await;
    assert!(body.contains("/view/a.md"));
    assert!(body.contains("/view/b.md"));
}

#[tokio::test]
async fn test_search_escapes_query() {
    let (_temp, app) = fixture();

    let response = get(app, "/search?query=%3Cscript%3E").await;

    let body = body_text(response).await;
    assert!(body.contains("&lt;script&gt;"));
    assert!(!body.contains("<script>"));
}

#[tokio::test]
async fn test_search_query_is_not_expanded_as_template() {
    let (_temp, app) = fixture();

    let response = get(app, "/search?query=%7B%7Bresults%7D%7D").await;

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_text(response).await;
    assert!(body.contains("<title>{{results}} - docsift</title>"));
    assert_eq!(body.matches("<ol>").count(), 1);
}

#[tokio::test]
async fn test_search_error_is_500() {
    let (temp, app) = fixture();
    write(&temp.path().join("docs"), "broken.md", &[0xff, 0xfe, 0xfd]);

    let response = get(app, "/search?query=dogs").await;

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let body = body_text(response).await;
    assert!(body.contains("UTF-8"));
}

#[tokio::test]
async fn test_view_renders_markdown() {
    let (_temp, app) = fixture();

    let response = get(app, "/view/a.md").await;

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_text(response).await;
    assert!(body.contains("<title>a - docsift</title>"));
    assert!(body.contains("<h1>Cats</h1>"));
    assert!(body.contains("<table>"));
}

#[tokio::test]
async fn test_view_serves_images() {
    let (_temp, app) = fixture();

    let response = get(app, "/view/img/logo.png").await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.headers().get(header::CONTENT_TYPE).unwrap(),
        "image/png"
    );
    assert_eq!(body_bytes(response).await, PNG_BYTES);
}

#[tokio::test]
async fn test_view_guesses_jpeg_content_type() {
    let (temp, app) = fixture();
    write(&temp.path().join("docs"), "img/photo.jpg", b"\xff\xd8\xff");

    let response = get(app, "/view/img/photo.jpg").await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.headers().get(header::CONTENT_TYPE).unwrap(),
        "image/jpeg"
    );
}

#[tokio::test]
async fn test_view_rejects_invalid_paths() {
    for uri in [
        "/view/missing.md",
        "/view/notes.txt",
        "/view/img/missing.png",
        "/view/../secret.md",
        "/view/img/../../secret.md",
        "/view/%2E%2E%2Fsecret.md",
    ] {
        let (_temp, app) = fixture();
        let response = get(app, uri).await;

        assert_eq!(response.status(), StatusCode::OK, "{uri}");
        assert_eq!(body_text(response).await, "Invalid file path", "{uri}");
    }
}
