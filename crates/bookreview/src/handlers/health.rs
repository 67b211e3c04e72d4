//! Service health endpoint.

use axum::{extract::State, Json};
use chrono::{SecondsFormat, Utc};
use serde::Serialize;

use crate::state::AppState;

/// Reachability of a dependency as reported by `/health`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Connectivity {
    Connected,
    Disconnected,
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub timestamp: String,
    pub database: Connectivity,
    pub redis: Connectivity,
}

/// GET /health - Always 200; dependency state is reported in the body.
///
/// Both probes run concurrently and the cache probe shares the cache timeout.
#[axum::debug_handler]
pub async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    let (database, cache) = tokio::join!(
        state.storage_health.ping(),
        tokio::time::timeout(state.cache_timeout, state.cache.ping()),
    );

    let database = match database {
        Ok(()) => Connectivity::Connected,
        Err(err) => {
            tracing::warn!(error = %err, "Database health check failed");
            Connectivity::Disconnected
        }
    };

    let redis = match cache {
        Ok(Ok(())) => Connectivity::Connected,
        Ok(Err(err)) => {
            tracing::warn!(error = %err, "Cache health check failed");
            Connectivity::Disconnected
        }
        Err(_) => {
            tracing::warn!(
                timeout_ms = state.cache_timeout.as_millis() as u64,
                "Cache health check timed out"
            );
            Connectivity::Disconnected
        }
    };

    Json(HealthResponse {
        status: "OK",
        timestamp: Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
        database,
        redis,
    })
}
