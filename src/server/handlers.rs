use super::error::ApiError;
use super::types::{PromptRequest, PromptResponse};
use crate::inference::InferenceClient;
use axum::{body::Bytes, extract::State, response::Json};
use std::sync::Arc;
use tracing::{debug, error, info};

#[derive(Clone)]
pub struct AppState {
    pub inference: Arc<dyn InferenceClient>,
}

impl AppState {
    pub fn new(inference: Arc<dyn InferenceClient>) -> Self {
        Self { inference }
    }
}

pub async fn send_prompt(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<PromptResponse>, ApiError> {
    let request = PromptRequest::from_body(&body).map_err(|e| {
        debug!("Rejected prompt payload: {}", e);
        ApiError::InvalidPayload
    })?;

    if !request.is_complete() {
        return Err(ApiError::MissingFields);
    }

    info!("Received prompt for model: {}", request.model);

    match state
        .inference
        .invoke(&request.prompt, &request.model)
        .await
    {
        Ok(response) => Ok(Json(PromptResponse { response })),
        Err(e) => {
            error!("Error invoking Bedrock model {}: {}", request.model, e);
            Err(ApiError::Upstream)
        }
    }
}

pub async fn method_not_allowed() -> ApiError {
    ApiError::MethodNotAllowed
}
