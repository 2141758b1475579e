//! # Axum Helpers
//!
//! Shared plumbing for the HTTP services in this workspace.
//!
//! - **[`server`]**: router assembly with API docs, health endpoints, graceful shutdown
//! - **[`http`]**: CORS and security header layers
//! - **[`extractors`]**: [`JsonBody`], a JSON extractor rejecting with [`AppError`]
//! - **[`errors`]**: [`AppError`] and the JSON [`ErrorResponse`] body every failure renders as

pub mod errors;
pub mod extractors;
pub mod http;
pub mod server;

pub use errors::{AppError, ErrorCode, ErrorResponse, error_response};
pub use extractors::JsonBody;
pub use http::{cors_layer_from_env, create_cors_layer, security_headers};
pub use server::{
    HealthCheckFuture, HealthResponse, ShutdownCoordinator, create_production_app, create_router,
    health_router, run_health_checks,
};
