//! Products Domain
//!
//! ```text
//! ┌─────────────┐
//! │  Handlers   │  ← HTTP route table
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │   Service   │  ← Conflict / not-found / unavailable rules
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │ Repository  │  ← Port; MongoDB and in-memory adapters
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │  Document   │  ← `_id` <-> `id` mapping, schema rules
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │   Models    │  ← DTO and the validated Product
//! └─────────────┘
//! ```
//!
//! ```rust,no_run
//! use domain_products::{handlers, MongoProductRepository, ProductService};
//! use mongodb::Client;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let client = Client::with_uri_str("mongodb://localhost:27017").await?;
//! let db = client.database("shop");
//!
//! let repository = MongoProductRepository::new(&db);
//! repository.init_collection().await?;
//!
//! let router = handlers::router(ProductService::new(repository));
//! # Ok(())
//! # }
//! ```

pub mod document;
pub mod error;
pub mod handlers;
pub mod memory;
pub mod models;
pub mod mongodb;
pub mod repository;
pub mod schema;
pub mod service;

pub use error::{ProductError, ProductResult};
pub use handlers::ApiDoc;
pub use memory::InMemoryProductRepository;
pub use models::{DeleteProduct, Product, ProductDto};
pub use mongodb::MongoProductRepository;
pub use repository::ProductRepository;
pub use service::ProductService;
