use axum::{
    body::Body,
    http::{Request, Response},
    Router,
};
use serde_json::Value;
use tower::ServiceExt;

use crate::{app::envy::Envy, router, AppState};

pub static MULTIPART_BOUNDARY: &str = "X-PLUGIN-LOGO-BOUNDARY";

// Serverless mode keeps tests from writing icon files.
pub fn test_envy() -> Envy {
    Envy {
        openai_api_key: Some("sk-test".to_string()),
        openai_timeout_secs: Some(5),
        vercel: Some("1".to_string()),
        ..Default::default()
    }
}

pub fn test_router(envy: Envy) -> Router {
    router(AppState::new(envy))
}

pub async fn send(app: Router, request: Request<Body>) -> Response<axum::body::BoxBody> {
    app.oneshot(request).await.unwrap()
}

pub fn json_request(uri: &str, body: &Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

pub struct MultipartPart<'a> {
    pub name: &'a str,
    pub file_name: Option<&'a str>,
    pub content_type: Option<&'a str>,
    pub data: &'a [u8],
}

pub fn multipart_request(uri: &str, parts: &[MultipartPart<'_>]) -> Request<Body> {
    let mut body = Vec::new();

    for part in parts {
        body.extend_from_slice(["--", MULTIPART_BOUNDARY, "\r\n"].concat().as_bytes());

        let mut disposition = ["Content-Disposition: form-data; name=\"", part.name, "\""].concat();
        if let Some(file_name) = part.file_name {
            disposition.push_str(&["; filename=\"", file_name, "\""].concat());
        }
        body.extend_from_slice(disposition.as_bytes());
        body.extend_from_slice(b"\r\n");

        if let Some(content_type) = part.content_type {
            body.extend_from_slice(["Content-Type: ", content_type, "\r\n"].concat().as_bytes());
        }

        body.extend_from_slice(b"\r\n");
        body.extend_from_slice(part.data);
        body.extend_from_slice(b"\r\n");
    }
    body.extend_from_slice(["--", MULTIPART_BOUNDARY, "--\r\n"].concat().as_bytes());

    Request::builder()
        .method("POST")
        .uri(uri)
        .header(
            "content-type",
            ["multipart/form-data; boundary=", MULTIPART_BOUNDARY].concat(),
        )
        .body(Body::from(body))
        .unwrap()
}

pub async fn body_bytes(response: Response<axum::body::BoxBody>) -> Vec<u8> {
    hyper::body::to_bytes(response.into_body())
        .await
        .unwrap()
        .to_vec()
}

pub fn parse_events(body: &[u8]) -> Vec<Value> {
    std::str::from_utf8(body)
        .unwrap()
        .lines()
        .filter(|line| !line.trim().is_empty())
        .map(|line| serde_json::from_str(line).unwrap())
        .collect()
}
