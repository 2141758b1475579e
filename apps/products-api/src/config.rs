//! Configuration for Products API

use core_config::{app_info, env_or_default, server::ServerConfig, AppInfo, ConfigError, FromEnv};
use database::mongodb::MongoConfig;
use domain_products::mongodb::DEFAULT_COLLECTION;

pub use core_config::Environment;

/// Where products are persisted.
#[derive(Clone, Debug)]
pub enum StoreConfig {
    Mongo {
        mongodb: MongoConfig,
        collection: String,
    },
    /// Process-local store, contents are lost on restart
    Memory,
}

impl FromEnv for StoreConfig {
    /// - PRODUCTS_STORE: `mongodb` (default) or `memory`
    /// - PRODUCTS_COLLECTION: defaults to `product`
    /// - MONGODB_*: see [`MongoConfig`], only read for the `mongodb` store
    fn from_env() -> Result<Self, ConfigError> {
        let kind = env_or_default("PRODUCTS_STORE", "mongodb");

        match kind.to_ascii_lowercase().as_str() {
            "mongodb" | "mongo" => Ok(StoreConfig::Mongo {
                mongodb: MongoConfig::from_env()?,
                collection: env_or_default("PRODUCTS_COLLECTION", DEFAULT_COLLECTION),
            }),
            "memory" => Ok(StoreConfig::Memory),
            other => Err(ConfigError::ParseError {
                key: "PRODUCTS_STORE".to_string(),
                details: format!("unknown store '{other}', expected 'mongodb' or 'memory'"),
            }),
        }
    }
}

/// Application configuration
#[derive(Clone, Debug)]
pub struct Config {
    pub app: AppInfo,
    pub server: ServerConfig,
    pub environment: Environment,
    pub store: StoreConfig,
}

impl Config {
    pub fn from_env() -> eyre::Result<Self> {
        Ok(Self {
            app: app_info!(),
            server: ServerConfig::from_env()?,
            environment: Environment::from_env(),
            store: StoreConfig::from_env()?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const MONGO_VARS: [&str; 4] = ["MONGODB_URL", "MONGO_URL", "MONGODB_DATABASE", "MONGO_DATABASE"];

    fn without_mongo_vars<'a>(
        extra: &[(&'a str, Option<&'a str>)],
    ) -> Vec<(&'a str, Option<&'a str>)> {
        MONGO_VARS
            .iter()
            .map(|key| (*key, None))
            .chain(extra.iter().copied())
            .collect()
    }

    #[test]
    fn test_memory_store_needs_no_mongo_settings() {
        temp_env::with_vars(without_mongo_vars(&[("PRODUCTS_STORE", Some("memory"))]), || {
            let config = Config::from_env().unwrap();
            assert!(matches!(config.store, StoreConfig::Memory));
            assert_eq!(config.app.name, "products_api");
        });
    }

    #[test]
    fn test_mongo_store_is_default() {
        temp_env::with_vars(
            [
                ("PRODUCTS_STORE", None),
                ("PRODUCTS_COLLECTION", None),
                ("MONGODB_URL", Some("mongodb://db:27017")),
                ("MONGODB_DATABASE", Some("shop")),
            ],
            || match StoreConfig::from_env().unwrap() {
                StoreConfig::Mongo { mongodb, collection } => {
                    assert_eq!(mongodb.url(), "mongodb://db:27017");
                    assert_eq!(mongodb.database(), "shop");
                    assert_eq!(collection, "product");
                }
                StoreConfig::Memory => panic!("expected the mongodb store"),
            },
        );
    }

    #[test]
    fn test_custom_collection() {
        temp_env::with_vars(
            [
                ("PRODUCTS_STORE", Some("MongoDB")),
                ("PRODUCTS_COLLECTION", Some("catalog")),
                ("MONGO_URL", Some("mongodb://db:27017")),
                ("MONGO_DATABASE", Some("shop")),
            ],
            || {
                let store = StoreConfig::from_env().unwrap();
                assert!(matches!(store, StoreConfig::Mongo { ref collection, .. } if collection == "catalog"));
            },
        );
    }

    #[test]
    fn test_mongo_store_without_url_fails() {
        temp_env::with_vars(without_mongo_vars(&[("PRODUCTS_STORE", None)]), || {
            let err = StoreConfig::from_env().unwrap_err();
            assert!(matches!(err, ConfigError::MissingEnvVar(_)));
        });
    }

    #[test]
    fn test_unknown_store_fails() {
        temp_env::with_var("PRODUCTS_STORE", Some("redis"), || {
            let err = StoreConfig::from_env().unwrap_err();
            assert!(err.to_string().contains("PRODUCTS_STORE"));
        });
    }
}
