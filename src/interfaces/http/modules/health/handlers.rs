//! Liveness check

use std::sync::Arc;
use std::time::Instant;

use axum::{extract::State, http::StatusCode, Json};
use sea_orm::{ConnectionTrait, DatabaseConnection, Statement};
use serde::Serialize;
use utoipa::ToSchema;

use crate::application::TriviaService;

#[derive(Clone)]
pub struct HealthState {
    pub db: DatabaseConnection,
    pub service: Arc<TriviaService>,
    pub started_at: Arc<Instant>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: &'static str,
    pub uptime_seconds: u64,
    pub database: DatabaseHealth,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct DatabaseHealth {
    pub status: &'static str,
    pub latency_ms: Option<u64>,
    /// Number of stored questions, absent when the store is unreachable
    pub questions: Option<u64>,
}

impl DatabaseHealth {
    fn unreachable() -> Self {
        Self {
            status: "error",
            latency_ms: None,
            questions: None,
        }
    }
}

#[utoipa::path(
    get,
    path = "/health",
    tag = "Health",
    responses(
        (status = 200, description = "Database reachable", body = HealthResponse),
        (status = 503, description = "Database unreachable", body = HealthResponse)
    )
)]
pub async fn health_check(State(state): State<HealthState>) -> (StatusCode, Json<HealthResponse>) {
    let ping_started = Instant::now();
    let ping = Statement::from_string(state.db.get_database_backend(), "SELECT 1".to_string());

    let database = match state.db.execute(ping).await {
        Ok(_) => DatabaseHealth {
            status: "ok",
            latency_ms: Some(ping_started.elapsed().as_millis() as u64),
            questions: state.service.question_count().await.ok(),
        },
        Err(e) => {
            tracing::warn!(error = %e, "Health check could not reach the database");
            DatabaseHealth::unreachable()
        }
    };

    let (code, status) = match database.status {
        "ok" => (StatusCode::OK, "ok"),
        _ => (StatusCode::SERVICE_UNAVAILABLE, "degraded"),
    };

    (
        code,
        Json(HealthResponse {
            status,
            version: env!("CARGO_PKG_VERSION"),
            uptime_seconds: state.started_at.elapsed().as_secs(),
            database,
        }),
    )
}
