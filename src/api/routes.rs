use axum::Json;
use axum::body::Bytes;
use axum::extract::State;
use chrono::Utc;
use serde_json::{Value, json};
use tracing::{debug, error, warn};

use super::AppState;
use super::error::ApiError;
use super::validation::parse_numbers;
use crate::stats::{BasicStats, StatsResult, basic_stats, compute_stats};

pub const SERVICE_NAME: &str = "Statistics API";

/// Inputs at least this long are sorted and counted off the async workers.
pub const BLOCKING_THRESHOLD: usize = 10_000;

/// Liveness probe.
pub async fn root() -> Json<Value> {
    Json(json!({
        "message": format!("{} is running", SERVICE_NAME),
        "status": "healthy",
    }))
}

/// Detailed health check with version and uptime.
pub async fn health(State(state): State<AppState>) -> Json<Value> {
    let uptime_seconds = (Utc::now() - state.started_at).num_seconds().max(0);
    Json(json!({
        "status": "healthy",
        "service": SERVICE_NAME,
        "version": env!("CARGO_PKG_VERSION"),
        "uptime_seconds": uptime_seconds,
        "dependencies": {
            "axum": "ok",
            "tokio": "ok",
            "serde_json": "ok",
        },
    }))
}

/// `POST /stats`: full descriptive statistics.
#[tracing::instrument(skip_all, fields(count = tracing::field::Empty))]
pub async fn stats(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<StatsResult>, ApiError> {
    let numbers = validated(&state, &body)?;
    let result = if numbers.len() >= BLOCKING_THRESHOLD {
        tokio::task::spawn_blocking(move || compute_stats(&numbers))
            .await
            .inspect_err(|e| error!(error = %e, "Stats task failed"))?
    } else {
        compute_stats(&numbers)
    };
    debug!(mode_count = result.mode.as_ref().map_or(0, Vec::len), "Stats computed");
    Ok(Json(result))
}

/// `POST /stats/basic`: mean, max and min only.
#[tracing::instrument(skip_all, fields(count = tracing::field::Empty))]
pub async fn basic(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<BasicStats>, ApiError> {
    let numbers = validated(&state, &body)?;
    Ok(Json(basic_stats(&numbers)))
}

fn validated(state: &AppState, body: &[u8]) -> Result<Vec<f64>, ApiError> {
    match parse_numbers(body, state.config.max_numbers) {
        Ok(numbers) => {
            tracing::Span::current().record("count", numbers.len());
            Ok(numbers)
        }
        Err(e) => {
            warn!(error = %e, body_bytes = body.len(), "Rejected request body");
            Err(e)
        }
    }
}
