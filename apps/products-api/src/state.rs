//! Application state management

use mongodb::{Client, Database};

use crate::config::Config;

/// Connected product store
#[derive(Clone)]
pub enum Store {
    Mongo {
        client: Client,
        db: Database,
        collection: String,
    },
    Memory,
}

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub store: Store,
}
