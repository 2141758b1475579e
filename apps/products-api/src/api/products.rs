//! Products API routes

use axum::Router;
use domain_products::{handlers, InMemoryProductRepository, MongoProductRepository, ProductService};
use tracing::info;

use crate::state::{AppState, Store};

/// Create products router, preparing the collection first when backed by MongoDB
pub async fn router(state: &AppState) -> eyre::Result<Router> {
    match &state.store {
        Store::Mongo { db, collection, .. } => {
            let repository = MongoProductRepository::with_collection(db, collection);
            repository.init_collection().await?;
            info!(collection = %collection, "Product collection ready");
            Ok(handlers::router(ProductService::new(repository)))
        }
        Store::Memory => Ok(handlers::router(ProductService::new(
            InMemoryProductRepository::new(),
        ))),
    }
}
