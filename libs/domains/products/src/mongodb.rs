//! MongoDB implementation of ProductRepository

use async_trait::async_trait;
use futures::TryStreamExt;
use mongodb::{
    Collection, Database,
    bson::{Bson, Document, doc, oid::ObjectId},
    error::{ErrorKind, WriteFailure},
    options::ReturnDocument,
};
use tracing::{info, instrument, warn};

use crate::document::{PRIMARY_KEY, from_document, to_document};
use crate::error::{ProductError, ProductResult, messages};
use crate::models::Product;
use crate::repository::ProductRepository;
use crate::schema::json_schema_validator;

pub const DEFAULT_COLLECTION: &str = "product";

const DUPLICATE_KEY: i32 = 11000;
const NAMESPACE_EXISTS: i32 = 48;

pub struct MongoProductRepository {
    db: Database,
    collection: Collection<Document>,
}

impl MongoProductRepository {
    pub fn new(db: &Database) -> Self {
        Self::with_collection(db, DEFAULT_COLLECTION)
    }

    pub fn with_collection(db: &Database, collection_name: &str) -> Self {
        Self {
            db: db.clone(),
            collection: db.collection::<Document>(collection_name),
        }
    }

    pub fn collection_name(&self) -> &str {
        self.collection.name()
    }

    /// Creates the collection with the product `$jsonSchema` validator, or
    /// installs the validator on an existing collection.
    pub async fn init_collection(&self) -> ProductResult<()> {
        let name = self.collection.name();
        let validator = json_schema_validator();

        match self
            .db
            .create_collection(name)
            .validator(validator.clone())
            .await
        {
            Ok(()) => info!(collection = name, "Created product collection"),
            Err(e) if error_code(&e) == Some(NAMESPACE_EXISTS) => {
                self.db
                    .run_command(doc! { "collMod": name, "validator": validator })
                    .await?;
                info!(collection = name, "Updated product collection validator");
            }
            Err(e) => return Err(e.into()),
        }

        Ok(())
    }

    /// Matches `id` as stored by this adapter, or as the `ObjectId` whose
    /// hex form [`from_document`] reports for documents written elsewhere.
    fn by_id(id: &str) -> Document {
        let mut keys = vec![Bson::String(id.to_string())];
        if let Ok(oid) = ObjectId::parse_str(id) {
            keys.push(Bson::ObjectId(oid));
        }

        let mut filter = Document::new();
        filter.insert(PRIMARY_KEY, doc! { "$in": keys });
        filter
    }
}

fn error_code(err: &mongodb::error::Error) -> Option<i32> {
    match err.kind.as_ref() {
        ErrorKind::Command(e) => Some(e.code),
        ErrorKind::Write(WriteFailure::WriteError(e)) => Some(e.code),
        _ => None,
    }
}

fn is_duplicate_key(err: &mongodb::error::Error) -> bool {
    error_code(err) == Some(DUPLICATE_KEY)
}

#[async_trait]
impl ProductRepository for MongoProductRepository {
    #[instrument(skip(self))]
    async fn find_all(&self) -> ProductResult<Vec<Product>> {
        let documents: Vec<Document> = self.collection.find(doc! {}).await?.try_collect().await?;
        documents.into_iter().map(from_document).collect()
    }

    #[instrument(skip(self))]
    async fn find_by_id(&self, id: &str) -> ProductResult<Option<Product>> {
        self.collection
            .find_one(Self::by_id(id))
            .await?
            .map(from_document)
            .transpose()
    }

    #[instrument(skip(self, product), fields(product_id = %product.id()))]
    async fn create(&self, product: Product) -> ProductResult<Option<Product>> {
        match self.collection.insert_one(to_document(&product)?).await {
            Ok(_) => {}
            Err(e) if is_duplicate_key(&e) => {
                warn!("Duplicate product id rejected by the store");
                return Err(ProductError::conflict(messages::DUPLICATE_PRODUCT));
            }
            Err(e) => return Err(e.into()),
        }

        self.find_by_id(product.id()).await
    }

    #[instrument(skip(self, product), fields(product_id = %product.id()))]
    async fn update_by_id(&self, product: Product) -> ProductResult<Option<Product>> {
        // `_id` is immutable; the matched document keeps its own key type
        let mut replacement = to_document(&product)?;
        replacement.remove(PRIMARY_KEY);

        self.collection
            .find_one_and_replace(Self::by_id(product.id()), replacement)
            .return_document(ReturnDocument::After)
            .await?
            .map(from_document)
            .transpose()
    }

    #[instrument(skip(self))]
    async fn delete_by_id(&self, id: &str) -> ProductResult<Option<Product>> {
        self.collection
            .find_one_and_delete(Self::by_id(id))
            .await?
            .map(from_document)
            .transpose()
    }
}
