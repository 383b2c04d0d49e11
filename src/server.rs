use axum::http::StatusCode;
use axum::{
    Json, Router,
    routing::{get, post},
};
use log::{info, warn};

use crate::config::{SchedulerConfig, ServerConfig};
use crate::data::{ScheduleRequest, ScheduleResult};
use crate::solver;

async fn generate_handler(
    Json(input): Json<ScheduleRequest>,
) -> Result<Json<ScheduleResult>, (StatusCode, String)> {
    match solver::solve(&input) {
        Ok(output) => Ok(Json(output)),
        Err(e) => {
            warn!("Rejected schedule request: {}", e);
            Err((StatusCode::BAD_REQUEST, e.to_string()))
        }
    }
}

async fn default_config_handler() -> Json<SchedulerConfig> {
    Json(SchedulerConfig::default())
}

pub fn router() -> Router {
    Router::new()
        .route("/v1/schedule/generate", post(generate_handler))
        .route("/v1/config/default", get(default_config_handler))
}

pub async fn run_server(config: ServerConfig) -> std::io::Result<()> {
    let listener = tokio::net::TcpListener::bind(config.addr).await?;

    info!("Server running at http://{}", listener.local_addr()?);

    axum::serve(listener, router()).await
}
