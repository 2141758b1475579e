//! Readiness endpoint

use axum::{extract::State, response::IntoResponse, routing::get, Router};
use axum_helpers::{run_health_checks, HealthCheckFuture};
use database::mongodb::check_health_detailed;

use crate::state::{AppState, Store};

async fn ready(State(state): State<AppState>) -> impl IntoResponse {
    let mut checks: Vec<(&str, HealthCheckFuture<'_>)> = Vec::new();

    if let Store::Mongo { client, .. } = &state.store {
        checks.push((
            "mongodb",
            Box::pin(async move {
                let status = check_health_detailed(client).await;
                if status.healthy {
                    Ok(())
                } else {
                    Err(status.message.unwrap_or_default())
                }
            }),
        ));
    }

    run_health_checks(checks).await
}

/// `GET /ready`, 503 while the store is unreachable
pub fn router(state: AppState) -> Router {
    Router::new().route("/ready", get(ready)).with_state(state)
}
