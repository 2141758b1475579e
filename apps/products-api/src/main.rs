//! Products API - REST server

use axum_helpers::server::create_production_app;
use core_config::tracing::{init_tracing, install_color_eyre};
use std::time::Duration;
use tracing::{info, warn};

mod api;
mod config;
mod openapi;
mod state;

use config::{Config, StoreConfig};
use state::{AppState, Store};

#[tokio::main]
async fn main() -> eyre::Result<()> {
    install_color_eyre();

    let config = Config::from_env()?;
    init_tracing(&config.environment);

    let store = match &config.store {
        StoreConfig::Mongo {
            mongodb,
            collection,
        } => {
            info!(database = %mongodb.database(), "Connecting to MongoDB");

            let client = database::mongodb::connect_from_config_with_retry(mongodb, None).await?;
            let db = client.database(mongodb.database());

            info!(
                "Successfully connected to MongoDB database: {}",
                mongodb.database()
            );

            Store::Mongo {
                client,
                db,
                collection: collection.clone(),
            }
        }
        StoreConfig::Memory => {
            warn!("Using the in-memory product store, data will not survive a restart");
            Store::Memory
        }
    };

    let state = AppState { config, store };
    let app = api::app(&state).await?;
    let AppState { config, store } = state;

    info!("Starting Products API on {}", config.server.address());

    create_production_app(app, &config.server, Duration::from_secs(30), async move {
        if let Store::Mongo { client, .. } = store {
            info!("Shutting down: closing MongoDB connections");
            drop(client);
            info!("MongoDB connection closed");
        }
    })
    .await
    .map_err(|e| eyre::eyre!("Server error: {}", e))?;

    info!("Products API shutdown complete");
    Ok(())
}
