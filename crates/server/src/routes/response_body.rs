use axum::{
    body::Body,
    http::StatusCode,
    response::Response,
    Json,
};
use common::types::HelloData;

fn sample() -> HelloData {
    HelloData { username: "userA".to_string(), age: 20 }
}

/// Body written onto a hand-built response.
pub async fn response_body_v1() -> Response {
    Response::new(Body::from("ok"))
}

/// Status and body returned together.
pub async fn response_body_v2() -> (StatusCode, &'static str) {
    (StatusCode::OK, "ok")
}

pub async fn response_body_v3() -> &'static str {
    "ok"
}

pub async fn response_body_json_v1() -> (StatusCode, Json<HelloData>) {
    (StatusCode::OK, Json(sample()))
}

/// Fixed 200; use the tuple form above when the status has to vary.
pub async fn response_body_json_v2() -> Json<HelloData> {
    Json(sample())
}
