//! Mapping between [`Product`] and its stored document.
//!
//! The document primary key `_id` holds the entity id; every other field is
//! copied through unchanged in both directions.

use mongodb::bson::{self, Bson, Document};

use crate::error::{ProductError, ProductResult};
use crate::models::{Product, ProductDto};

pub const PRIMARY_KEY: &str = "_id";
const ENTITY_ID: &str = "id";

/// Encodes `product` with its id stored under `_id`, which comes first.
pub fn to_document(product: &Product) -> ProductResult<Document> {
    let mut fields = bson::to_document(product)?;
    let id = fields.remove(ENTITY_ID).unwrap_or(Bson::Null);

    let mut document = Document::new();
    document.insert(PRIMARY_KEY, id);
    document.extend(fields);
    Ok(document)
}

/// Rebuilds a [`Product`] from a stored document.
///
/// A document that fails to decode or validate is reported as a
/// [`ProductError::Database`] since the caller did nothing wrong.
pub fn from_document(mut document: Document) -> ProductResult<Product> {
    if let Some(key) = document.remove(PRIMARY_KEY) {
        let key = match key {
            Bson::ObjectId(oid) => Bson::String(oid.to_hex()),
            other => other,
        };
        document.insert(ENTITY_ID, key);
    }

    let dto: ProductDto = bson::from_document(document)?;
    Product::new(dto).map_err(|e| ProductError::Database(format!("stored product is invalid: {e}")))
}
