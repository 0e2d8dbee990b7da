mod error;
pub mod handlers;
mod types;

pub use error::ApiError;
pub use types::{PromptRequest, PromptResponse};

use crate::{Result, config::ServerConfig, inference::InferenceClient};
use axum::{Router, routing::post};
use handlers::AppState;
use std::{net::SocketAddr, sync::Arc};
use tower_http::trace::TraceLayer;
use tracing::info;

pub const SEND_PROMPT_PATH: &str = "/api/send-prompt";

pub fn router(state: AppState) -> Router {
    Router::new()
        .route(
            SEND_PROMPT_PATH,
            post(handlers::send_prompt).fallback(handlers::method_not_allowed),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

pub async fn run(config: &ServerConfig, inference: Arc<dyn InferenceClient>) -> Result<()> {
    let app = router(AppState::new(inference));

    let addr = SocketAddr::new(config.host.parse()?, config.port);
    let listener = tokio::net::TcpListener::bind(addr).await?;

    info!("Server is running on port {}", config.port);

    axum::serve(listener, app).await?;

    Ok(())
}
