use axum::{
    Router,
    body::{Body, to_bytes},
    http::{Request, Response, StatusCode, header},
};
use prompt_gateway::server::{self, SEND_PROMPT_PATH, handlers::AppState};
use std::sync::Arc;

use super::mocks::MockInferenceClient;

/// Builds the gateway router around a shared mock client.
pub fn create_test_app(client: Arc<MockInferenceClient>) -> Router {
    server::router(AppState::new(client))
}

pub fn json_request(body: impl Into<String>) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(SEND_PROMPT_PATH)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.into()))
        .unwrap()
}

/// Splits a response into its status, content type and body text.
pub async fn read_response(response: Response<Body>) -> (StatusCode, Option<String>, String) {
    let status = response.status();
    let content_type = response
        .headers()
        .get(header::CONTENT_TYPE)
        .map(|v| v.to_str().unwrap().to_string());
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, content_type, String::from_utf8(bytes.to_vec()).unwrap())
}
