//! API routes module

pub mod health;
pub mod products;

use axum::Router;
use axum_helpers::health_router;

use crate::openapi::ApiDoc;
use crate::state::AppState;

/// Resource routes, nested under `/api` by [`app`]
pub async fn routes(state: &AppState) -> eyre::Result<Router> {
    Ok(Router::new().nest("/product", products::router(state).await?))
}

/// The complete HTTP surface: API, docs, liveness and readiness
pub async fn app(state: &AppState) -> eyre::Result<Router> {
    let router = axum_helpers::create_router::<ApiDoc>(routes(state).await?).await?;

    Ok(router
        .merge(health_router(state.config.app))
        .merge(health::router(state.clone())))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{Config, Environment, StoreConfig};
    use crate::state::Store;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use core_config::{app_info, server::ServerConfig};
    use http_body_util::BodyExt;
    use serde_json::{json, Value};
    use tower::ServiceExt;

    fn memory_state() -> AppState {
        AppState {
            config: Config {
                app: app_info!(),
                server: ServerConfig::default(),
                environment: Environment::Development,
                store: StoreConfig::Memory,
            },
            store: Store::Memory,
        }
    }

    async fn test_app() -> Router {
        temp_env::async_with_vars([("CORS_ALLOWED_ORIGIN", None::<&str>)], async {
            app(&memory_state()).await.unwrap()
        })
        .await
    }

    async fn json_body(response: axum::response::Response) -> Value {
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_product_routes_are_nested() {
        let app = test_app().await;

        let create = Request::builder()
            .method("POST")
            .uri("/api/product")
            .header("content-type", "application/json")
            .body(Body::from(
                json!({ "id": "a", "name": "Lamp", "description": "Desk lamp", "price": 10 })
                    .to_string(),
            ))
            .unwrap();
        let response = app.clone().oneshot(create).await.unwrap();
        assert_eq!(response.status(), StatusCode::CREATED);

        let get = Request::builder()
            .uri("/api/product/id/a")
            .body(Body::empty())
            .unwrap();
        let response = app.oneshot(get).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(json_body(response).await["name"], "Lamp");
    }

    #[tokio::test]
    async fn test_memory_store_is_ready() {
        let request = Request::builder().uri("/ready").body(Body::empty()).unwrap();
        let response = test_app().await.oneshot(request).await.unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(json_body(response).await["status"], "ready");
    }

    #[tokio::test]
    async fn test_health_reports_binary() {
        let request = Request::builder().uri("/health").body(Body::empty()).unwrap();
        let response = test_app().await.oneshot(request).await.unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = json_body(response).await;
        assert_eq!(body["status"], "healthy");
        assert_eq!(body["name"], "products_api");
    }

    #[tokio::test]
    async fn test_unknown_route_is_json_404() {
        let request = Request::builder()
            .uri("/api/nothing")
            .body(Body::empty())
            .unwrap();
        let response = test_app().await.oneshot(request).await.unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert_eq!(json_body(response).await["error"], "NOT_FOUND");
    }
}
